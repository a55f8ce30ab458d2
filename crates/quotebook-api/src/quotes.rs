//! Handlers for `/quotes` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/quotes` | Optional filter: one of `collector_id`, `author_id`, `author_name` |
//! | `POST`   | `/quotes` | Body: [`QuotePayload`]; 404 if the author is unknown |
//! | `GET`    | `/quotes/mine` | Quotes uploaded by the caller |
//! | `GET`    | `/quotes/{id}` | 404 if not found |
//! | `PATCH`  | `/quotes/{id}` | Body: any of `content`, `author_id`, `collector_id`; uploader only |
//! | `DELETE` | `/quotes/{id}` | Uploader only |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use quotebook_core::{
  record::{Quote, QuotePatch, QuotePayload},
  store::RecordStore,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
  ApiState,
  error::ApiError,
  extract::{JsonBody, QueryParams},
  identity::Caller,
};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  /// Match the caller-supplied `collector_id` field.
  pub collector_id: Option<String>,
  pub author_id:    Option<String>,
  /// Case-insensitive author name; 404 if no author has it.
  pub author_name:  Option<String>,
}

/// `GET /quotes[?collector_id=…|?author_id=…|?author_name=…]`
pub async fn list<S: RecordStore>(
  State(state): State<ApiState<S>>,
  QueryParams(params): QueryParams<ListParams>,
) -> Result<Json<Vec<Quote>>, ApiError> {
  let book = &state.book;
  let quotes = match (params.collector_id, params.author_id, params.author_name) {
    (None, None, None) => book.list_quotes().await?,
    (Some(cid), None, None) => book.quotes_by_collector_id(&cid).await?,
    (None, Some(aid), None) => book.quotes_by_author_id(&aid).await?,
    (None, None, Some(name)) => book.quotes_by_author_name(&name).await?,
    _ => {
      return Err(ApiError::BadRequest(
        "use at most one of collector_id, author_id, author_name".into(),
      ));
    }
  };
  Ok(Json(quotes))
}

/// `GET /quotes/mine`
pub async fn mine<S: RecordStore>(
  State(state): State<ApiState<S>>,
  Caller(caller): Caller,
) -> Result<Json<Vec<Quote>>, ApiError> {
  Ok(Json(state.book.quotes_by_collector(&caller).await?))
}

// ─── Single quote ─────────────────────────────────────────────────────────────

/// `POST /quotes`
pub async fn upload<S: RecordStore>(
  State(state): State<ApiState<S>>,
  Caller(caller): Caller,
  JsonBody(body): JsonBody<QuotePayload>,
) -> Result<impl IntoResponse, ApiError> {
  let quote = state.book.upload_quote(&caller, body).await?;
  Ok((StatusCode::CREATED, Json(quote)))
}

/// `GET /quotes/{id}`
pub async fn get_one<S: RecordStore>(
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
) -> Result<Json<Quote>, ApiError> {
  Ok(Json(state.book.get_quote(&id).await?))
}

/// `PATCH /quotes/{id}`
pub async fn update<S: RecordStore>(
  State(state): State<ApiState<S>>,
  Caller(caller): Caller,
  Path(id): Path<String>,
  JsonBody(body): JsonBody<QuotePatch>,
) -> Result<Json<Quote>, ApiError> {
  Ok(Json(state.book.update_quote(&caller, &id, body).await?))
}

/// `DELETE /quotes/{id}`
pub async fn delete<S: RecordStore>(
  State(state): State<ApiState<S>>,
  Caller(caller): Caller,
  Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
  state.book.delete_quote(&caller, &id).await?;
  Ok(Json(json!({ "message": "Quote deleted successfully." })))
}
