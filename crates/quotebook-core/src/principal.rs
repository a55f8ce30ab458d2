//! Caller identity.

use serde::{Deserialize, Serialize};

/// Opaque identity of the caller of an operation, supplied by the host
/// environment. The engine only ever compares two principals for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
  pub fn new(token: impl Into<String>) -> Self { Self(token.into()) }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl std::fmt::Display for Principal {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for Principal {
  fn from(value: &str) -> Self { Self::new(value) }
}

impl From<String> for Principal {
  fn from(value: String) -> Self { Self(value) }
}
