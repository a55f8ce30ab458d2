//! Handlers for `/authors` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/authors` | All authors |
//! | `POST`   | `/authors` | Body: `{"name":"…","birth_year":n}`; returns 201 |
//! | `GET`    | `/authors/{id}` | 404 if not found |
//! | `PATCH`  | `/authors/{id}` | Body: any of `name`, `birth_year`; creator only |
//! | `DELETE` | `/authors/{id}` | Creator only; quotes are kept |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use quotebook_core::{
  record::{Author, AuthorPatch, AuthorPayload},
  store::RecordStore,
};
use serde_json::{Value, json};

use crate::{
  ApiState,
  error::ApiError,
  extract::JsonBody,
  identity::Caller,
};

/// `GET /authors`
pub async fn list<S: RecordStore>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<Author>>, ApiError> {
  Ok(Json(state.book.list_authors().await?))
}

/// `POST /authors`
pub async fn create<S: RecordStore>(
  State(state): State<ApiState<S>>,
  Caller(caller): Caller,
  JsonBody(body): JsonBody<AuthorPayload>,
) -> Result<impl IntoResponse, ApiError> {
  let author = state.book.create_author(&caller, body).await?;
  Ok((StatusCode::CREATED, Json(author)))
}

/// `GET /authors/{id}`
pub async fn get_one<S: RecordStore>(
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
) -> Result<Json<Author>, ApiError> {
  Ok(Json(state.book.get_author(&id).await?))
}

/// `PATCH /authors/{id}`
pub async fn update<S: RecordStore>(
  State(state): State<ApiState<S>>,
  Caller(caller): Caller,
  Path(id): Path<String>,
  JsonBody(body): JsonBody<AuthorPatch>,
) -> Result<Json<Author>, ApiError> {
  Ok(Json(state.book.update_author(&caller, &id, body).await?))
}

/// `DELETE /authors/{id}`
pub async fn delete<S: RecordStore>(
  State(state): State<ApiState<S>>,
  Caller(caller): Caller,
  Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
  state.book.delete_author(&caller, &id).await?;
  Ok(Json(json!({ "message": "Author deleted successfully." })))
}
