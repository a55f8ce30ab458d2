//! Caller identity extractor.
//!
//! Identity is asserted by whatever sits in front of this router (an
//! authenticating reverse proxy, a gateway) through a single request header.
//! The header's value is taken verbatim as the caller's [`Principal`].

use axum::{extract::FromRequestParts, http::request::Parts};
use quotebook_core::{Principal, store::RecordStore};

use crate::{ApiState, error::ApiError};

/// Header read when no other name is configured.
pub const DEFAULT_IDENTITY_HEADER: &str = "x-principal";

/// The identity of the caller. Extracting it fails with 401 when the header
/// is missing, not valid UTF-8, or blank.
#[derive(Debug, Clone)]
pub struct Caller(pub Principal);

impl<S: RecordStore> FromRequestParts<ApiState<S>> for Caller {
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &ApiState<S>,
  ) -> Result<Self, Self::Rejection> {
    let token = parts
      .headers
      .get(&state.identity_header)
      .and_then(|v| v.to_str().ok())
      .map(str::trim)
      .filter(|t| !t.is_empty())
      .ok_or(ApiError::MissingIdentity)?;
    Ok(Caller(Principal::new(token)))
  }
}
