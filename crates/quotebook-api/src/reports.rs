//! Handlers for the aggregate `/reports/*` endpoints. All are read-only.

use axum::{Json, extract::State};
use quotebook_core::{
  query::{AuthorWithQuotes, QuoteSpan},
  store::RecordStore,
};
use serde_json::{Value, json};

use crate::{ApiState, error::ApiError};

/// `GET /reports/authors-with-quotes`
pub async fn authors_with_quotes<S: RecordStore>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<AuthorWithQuotes>>, ApiError> {
  Ok(Json(state.book.authors_with_quotes().await?))
}

/// `GET /reports/quote-count` — `{"count": n}`
pub async fn quote_count<S: RecordStore>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Value>, ApiError> {
  let count = state.book.total_quote_count().await?;
  Ok(Json(json!({ "count": count })))
}

/// `GET /reports/oldest-newest` — 409 with fewer than two quotes.
pub async fn oldest_newest<S: RecordStore>(
  State(state): State<ApiState<S>>,
) -> Result<Json<QuoteSpan>, ApiError> {
  Ok(Json(state.book.oldest_and_newest_quotes().await?))
}

/// `GET /reports/author-names`
pub async fn author_names<S: RecordStore>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<String>>, ApiError> {
  Ok(Json(state.book.unique_author_names().await?))
}
