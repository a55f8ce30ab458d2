//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::{JsonRejection, QueryRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use quotebook_core::ErrorKind;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The request needs a caller identity and carried none.
  #[error("missing caller identity")]
  MissingIdentity,

  #[error("bad request: {0}")]
  BadRequest(String),

  /// The body was not JSON, or did not fit the payload type.
  #[error("invalid body: {}", .0.body_text())]
  Body(#[from] JsonRejection),

  #[error("invalid query: {}", .0.body_text())]
  Query(#[from] QueryRejection),

  #[error(transparent)]
  Book(#[from] quotebook_core::Error),
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::MissingIdentity => StatusCode::UNAUTHORIZED,
      ApiError::BadRequest(_) | ApiError::Query(_) => StatusCode::BAD_REQUEST,
      // 422 for a body that parses but does not fit, 400 for broken JSON,
      // 415 without a JSON content type.
      ApiError::Body(rejection) => rejection.status(),
      ApiError::Book(e) => match e.kind() {
        ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Unauthorized => StatusCode::FORBIDDEN,
        ErrorKind::DuplicateRegistration | ErrorKind::InsufficientData => {
          StatusCode::CONFLICT
        }
        ErrorKind::Storage => StatusCode::INTERNAL_SERVER_ERROR,
      },
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      tracing::error!(error = %self, "request failed");
    }
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
