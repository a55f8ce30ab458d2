//! Payload validation and ownership checks.
//!
//! Every check here is pure and runs before the engine writes anything, so a
//! rejected operation never leaves a partial write behind.

use crate::{
  Error, Principal, Result,
  record::{AuthorPatch, AuthorPayload, CollectorPayload, QuotePatch, QuotePayload, RecordKind},
};

/// Rejects blank text. Accepted values are stored exactly as given, surrounding
/// whitespace included.
fn require_text(field: &str, value: &str) -> Result<()> {
  if value.trim().is_empty() {
    tracing::debug!(field, "rejected empty field");
    return Err(Error::Validation(format!("`{field}` must not be empty")));
  }
  Ok(())
}

fn require_year(value: u64) -> Result<()> {
  if value == 0 {
    return Err(Error::Validation("`birth_year` must be greater than zero".into()));
  }
  Ok(())
}

pub fn author_payload(payload: &AuthorPayload) -> Result<()> {
  require_text("name", &payload.name)?;
  require_year(payload.birth_year)
}

/// Fields absent from a patch are kept as stored; present ones must still
/// be valid.
pub fn author_patch(patch: &AuthorPatch) -> Result<()> {
  if let Some(name) = &patch.name {
    require_text("name", name)?;
  }
  if let Some(year) = patch.birth_year {
    require_year(year)?;
  }
  Ok(())
}

pub fn collector_payload(payload: &CollectorPayload) -> Result<()> {
  require_text("collector_name", &payload.collector_name)
}

pub fn quote_payload(payload: &QuotePayload) -> Result<()> {
  require_text("content", &payload.content)?;
  require_text("author_id", &payload.author_id)?;
  require_text("collector_id", &payload.collector_id)
}

pub fn quote_patch(patch: &QuotePatch) -> Result<()> {
  for (field, value) in [
    ("content", &patch.content),
    ("author_id", &patch.author_id),
    ("collector_id", &patch.collector_id),
  ] {
    if let Some(value) = value {
      require_text(field, value)?;
    }
  }
  Ok(())
}

/// Succeed iff `caller` is the identity stored in the record's ownership
/// field.
pub fn ensure_owner(
  kind: RecordKind,
  action: &'static str,
  owner: &Principal,
  caller: &Principal,
) -> Result<()> {
  if owner != caller {
    tracing::warn!(%kind, action, %caller, "ownership check failed");
    return Err(Error::Unauthorized { kind, action });
  }
  Ok(())
}
