//! Ambient collaborators injected into [`crate::QuoteBook`]: the clock and
//! the id generator.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of the timestamps stamped on records.
pub trait Clock: Send + Sync {
  fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> { Utc::now() }
}

/// Source of fresh record ids. Ids must never repeat within a store.
pub trait IdGenerator: Send + Sync {
  fn next_id(&self) -> String;
}

/// Random (v4) UUIDs in hyphenated lowercase form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
  fn next_id(&self) -> String { Uuid::new_v4().hyphenated().to_string() }
}
