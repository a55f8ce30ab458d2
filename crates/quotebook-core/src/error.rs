//! Error types for `quotebook-core`.

use thiserror::Error;

use crate::record::RecordKind;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid payload: {0}")]
  Validation(String),

  #[error("{kind} with id={id} not found")]
  NotFound { kind: RecordKind, id: String },

  #[error("author with name={0} not found")]
  AuthorNameNotFound(String),

  #[error("you are not authorized to {action} this {kind}")]
  Unauthorized {
    kind:   RecordKind,
    action: &'static str,
  },

  #[error("collector already registered")]
  DuplicateRegistration,

  #[error("there are not enough quotes to compare (found {0}, need 2)")]
  InsufficientData(usize),

  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Coarse classification of an [`Error`], used by transports to pick a
/// status code without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  Validation,
  NotFound,
  Unauthorized,
  DuplicateRegistration,
  InsufficientData,
  Storage,
}

impl Error {
  /// Box a backend error into [`Error::Storage`].
  pub fn storage<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Storage(Box::new(err))
  }

  pub(crate) fn not_found(kind: RecordKind, id: &str) -> Self {
    Self::NotFound { kind, id: id.to_owned() }
  }

  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::Validation(_) => ErrorKind::Validation,
      Self::NotFound { .. } | Self::AuthorNameNotFound(_) => ErrorKind::NotFound,
      Self::Unauthorized { .. } => ErrorKind::Unauthorized,
      Self::DuplicateRegistration => ErrorKind::DuplicateRegistration,
      Self::InsufficientData(_) => ErrorKind::InsufficientData,
      Self::Storage(_) => ErrorKind::Storage,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
