//! Handlers for `/collectors` endpoints.
//!
//! | Method  | Path | Notes |
//! |---------|------|-------|
//! | `GET`   | `/collectors` | All collectors |
//! | `POST`  | `/collectors` | Register the caller; body: `{"collector_name":"…"}`; 409 on repeat |
//! | `GET`   | `/collectors/{id}` | 404 if not found |
//! | `PATCH` | `/collectors/{id}` | Rename; owner only |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use quotebook_core::{
  record::{Collector, CollectorPayload},
  store::RecordStore,
};

use crate::{
  ApiState,
  error::ApiError,
  extract::JsonBody,
  identity::Caller,
};

/// `GET /collectors`
pub async fn list<S: RecordStore>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<Collector>>, ApiError> {
  Ok(Json(state.book.list_collectors().await?))
}

/// `POST /collectors`
pub async fn register<S: RecordStore>(
  State(state): State<ApiState<S>>,
  Caller(caller): Caller,
  JsonBody(body): JsonBody<CollectorPayload>,
) -> Result<impl IntoResponse, ApiError> {
  let collector = state.book.register_collector(&caller, body).await?;
  Ok((StatusCode::CREATED, Json(collector)))
}

/// `GET /collectors/{id}`
pub async fn get_one<S: RecordStore>(
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
) -> Result<Json<Collector>, ApiError> {
  Ok(Json(state.book.get_collector(&id).await?))
}

/// `PATCH /collectors/{id}`
pub async fn update<S: RecordStore>(
  State(state): State<ApiState<S>>,
  Caller(caller): Caller,
  Path(id): Path<String>,
  JsonBody(body): JsonBody<CollectorPayload>,
) -> Result<Json<Collector>, ApiError> {
  Ok(Json(state.book.update_collector(&caller, &id, body).await?))
}
