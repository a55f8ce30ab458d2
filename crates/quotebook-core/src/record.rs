//! Record types — the three entities held by the store — plus the payloads
//! accepted when creating and updating them.
//!
//! Records are never mutated in place. An update builds a new record with
//! one of the `merged` functions and the store overwrites the old one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::principal::Principal;

// ─── Record kind ─────────────────────────────────────────────────────────────

/// Which collection a record lives in.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RecordKind {
  Author,
  Collector,
  Quote,
}

/// Implemented by every type stored in a [`crate::store::Collection`].
pub trait Record:
  Clone + Send + Sync + Serialize + DeserializeOwned + 'static
{
  const KIND: RecordKind;

  /// The key under which the record is stored.
  fn id(&self) -> &str;
}

// ─── Author ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
  pub id:         String,
  pub name:       String,
  pub birth_year: u64,
  /// Identity that created the record; only it may update or delete it.
  pub creator:    Principal,
  pub created_at: DateTime<Utc>,
  pub updated_at: Option<DateTime<Utc>>,
}

/// Input to [`crate::QuoteBook::create_author`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorPayload {
  #[serde(default)]
  pub name:       String,
  #[serde(default)]
  pub birth_year: u64,
}

/// Input to [`crate::QuoteBook::update_author`]; absent fields are kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorPatch {
  pub name:       Option<String>,
  pub birth_year: Option<u64>,
}

impl Author {
  pub fn merged(&self, patch: AuthorPatch, at: DateTime<Utc>) -> Self {
    Self {
      id:         self.id.clone(),
      name:       patch.name.unwrap_or_else(|| self.name.clone()),
      birth_year: patch.birth_year.unwrap_or(self.birth_year),
      creator:    self.creator.clone(),
      created_at: self.created_at,
      updated_at: Some(at),
    }
  }
}

impl Record for Author {
  const KIND: RecordKind = RecordKind::Author;

  fn id(&self) -> &str { &self.id }
}

// ─── Collector ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collector {
  pub id:             String,
  /// At most one collector exists per principal.
  pub principal:      Principal,
  pub collector_name: String,
  pub created_at:     DateTime<Utc>,
  pub updated_at:     Option<DateTime<Utc>>,
}

/// Input to both registering and renaming a collector.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectorPayload {
  #[serde(default)]
  pub collector_name: String,
}

impl Collector {
  pub fn merged(&self, payload: CollectorPayload, at: DateTime<Utc>) -> Self {
    Self {
      id:             self.id.clone(),
      principal:      self.principal.clone(),
      collector_name: payload.collector_name,
      created_at:     self.created_at,
      updated_at:     Some(at),
    }
  }
}

impl Record for Collector {
  const KIND: RecordKind = RecordKind::Collector;

  fn id(&self) -> &str { &self.id }
}

// ─── Quote ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
  pub id:           String,
  pub content:      String,
  pub author_id:    String,
  /// Caller-supplied and informational only. Never checked against the
  /// collector table or used for authorization.
  pub collector_id: String,
  /// Identity of the uploader; the ownership field.
  pub collector:    Principal,
  pub created_at:   DateTime<Utc>,
  pub updated_at:   Option<DateTime<Utc>>,
}

/// Input to [`crate::QuoteBook::upload_quote`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuotePayload {
  #[serde(default)]
  pub content:      String,
  #[serde(default)]
  pub author_id:    String,
  #[serde(default)]
  pub collector_id: String,
}

/// Input to [`crate::QuoteBook::update_quote`]; absent fields are kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuotePatch {
  pub content:      Option<String>,
  pub author_id:    Option<String>,
  pub collector_id: Option<String>,
}

impl Quote {
  pub fn merged(&self, patch: QuotePatch, at: DateTime<Utc>) -> Self {
    Self {
      id:           self.id.clone(),
      content:      patch.content.unwrap_or_else(|| self.content.clone()),
      author_id:    patch.author_id.unwrap_or_else(|| self.author_id.clone()),
      collector_id: patch
        .collector_id
        .unwrap_or_else(|| self.collector_id.clone()),
      collector:    self.collector.clone(),
      created_at:   self.created_at,
      updated_at:   Some(at),
    }
  }
}

impl Record for Quote {
  const KIND: RecordKind = RecordKind::Quote;

  fn id(&self) -> &str { &self.id }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone as _;

  use super::*;

  fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).single().unwrap()
  }

  fn quote() -> Quote {
    Quote {
      id:           "q1".into(),
      content:      "Luck is what happens when preparation meets opportunity.".into(),
      author_id:    "a1".into(),
      collector_id: "c1".into(),
      collector:    Principal::new("alice"),
      created_at:   at(10),
      updated_at:   None,
    }
  }

  #[test]
  fn record_kind_displays_lowercase() {
    assert_eq!(RecordKind::Author.to_string(), "author");
    assert_eq!(RecordKind::Collector.to_string(), "collector");
    assert_eq!(RecordKind::Quote.to_string(), "quote");
  }

  #[test]
  fn quote_merge_keeps_unspecified_fields() {
    let original = quote();
    let merged = original.merged(
      QuotePatch { content: Some("new".into()), ..Default::default() },
      at(20),
    );

    assert_eq!(merged.content, "new");
    assert_eq!(merged.author_id, original.author_id);
    assert_eq!(merged.collector_id, original.collector_id);
    assert_eq!(merged.updated_at, Some(at(20)));
    // The source record is untouched.
    assert_eq!(original.content, quote().content);
    assert!(original.updated_at.is_none());
  }

  #[test]
  fn quote_merge_never_touches_identity_fields() {
    let original = quote();
    let merged = original.merged(
      QuotePatch {
        content:      Some("x".into()),
        author_id:    Some("a2".into()),
        collector_id: Some("c9".into()),
      },
      at(30),
    );

    assert_eq!(merged.id, original.id);
    assert_eq!(merged.created_at, original.created_at);
    assert_eq!(merged.collector, original.collector);
    assert_eq!(merged.author_id, "a2");
    assert_eq!(merged.collector_id, "c9");
  }

  #[test]
  fn author_merge_applies_partial_patch() {
    let author = Author {
      id:         "a1".into(),
      name:       "Seneca".into(),
      birth_year: 4,
      creator:    Principal::new("alice"),
      created_at: at(1),
      updated_at: None,
    };

    let merged = author.merged(
      AuthorPatch { birth_year: Some(5), ..Default::default() },
      at(2),
    );
    assert_eq!(merged.name, "Seneca");
    assert_eq!(merged.birth_year, 5);
    assert_eq!(merged.creator, author.creator);
    assert_eq!(merged.updated_at, Some(at(2)));
  }

  #[test]
  fn missing_payload_fields_deserialize_empty() {
    let payload: QuotePayload =
      serde_json::from_str(r#"{"content":"hi"}"#).unwrap();
    assert_eq!(payload.content, "hi");
    assert!(payload.author_id.is_empty());
    assert!(payload.collector_id.is_empty());
  }
}
