//! The keyed-collection abstraction and its in-memory implementation.
//!
//! Storage backends (e.g. `quotebook-store-sqlite`) implement
//! [`Collection`] once per record type and bundle the three collections
//! behind [`RecordStore`]. [`crate::QuoteBook`] depends on this abstraction,
//! not on any concrete backend.

use std::{collections::BTreeMap, convert::Infallible, future::Future};

use tokio::sync::RwLock;

use crate::record::{Author, Collector, Quote, Record};

// ─── Traits ──────────────────────────────────────────────────────────────────

/// An ordered key → record map.
///
/// All methods return `Send` futures so a collection can be shared across a
/// multi-threaded async runtime (e.g. tokio with `axum`).
pub trait Collection<R: Record>: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Fetch a record by id. Returns `None` if absent.
  fn get<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<R>, Self::Error>> + Send + 'a;

  /// Store `record` under `id`, replacing any record already there.
  fn insert<'a>(
    &'a self,
    id: &'a str,
    record: R,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Remove the record under `id`, returning it if it existed.
  fn remove<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<R>, Self::Error>> + Send + 'a;

  /// Every record, in ascending key order.
  fn values(&self) -> impl Future<Output = Result<Vec<R>, Self::Error>> + Send + '_;
}

/// The three collections the engine operates on.
pub trait RecordStore: Send + Sync + 'static {
  type Authors: Collection<Author>;
  type Collectors: Collection<Collector>;
  type Quotes: Collection<Quote>;

  fn authors(&self) -> &Self::Authors;
  fn collectors(&self) -> &Self::Collectors;
  fn quotes(&self) -> &Self::Quotes;
}

// ─── In-memory backend ───────────────────────────────────────────────────────

/// A [`Collection`] held in a `BTreeMap`. State lives as long as the value.
#[derive(Debug)]
pub struct MemoryCollection<R> {
  records: RwLock<BTreeMap<String, R>>,
}

impl<R> Default for MemoryCollection<R> {
  fn default() -> Self { Self { records: RwLock::new(BTreeMap::new()) } }
}

impl<R: Record> Collection<R> for MemoryCollection<R> {
  type Error = Infallible;

  async fn get(&self, id: &str) -> Result<Option<R>, Infallible> {
    Ok(self.records.read().await.get(id).cloned())
  }

  async fn insert(&self, id: &str, record: R) -> Result<(), Infallible> {
    self.records.write().await.insert(id.to_owned(), record);
    Ok(())
  }

  async fn remove(&self, id: &str) -> Result<Option<R>, Infallible> {
    Ok(self.records.write().await.remove(id))
  }

  async fn values(&self) -> Result<Vec<R>, Infallible> {
    Ok(self.records.read().await.values().cloned().collect())
  }
}

/// In-memory [`RecordStore`] — useful for tests and ephemeral instances.
#[derive(Debug, Default)]
pub struct MemoryStore {
  authors:    MemoryCollection<Author>,
  collectors: MemoryCollection<Collector>,
  quotes:     MemoryCollection<Quote>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }
}

impl RecordStore for MemoryStore {
  type Authors = MemoryCollection<Author>;
  type Collectors = MemoryCollection<Collector>;
  type Quotes = MemoryCollection<Quote>;

  fn authors(&self) -> &Self::Authors { &self.authors }

  fn collectors(&self) -> &Self::Collectors { &self.collectors }

  fn quotes(&self) -> &Self::Quotes { &self.quotes }
}

#[cfg(test)]
mod tests {
  use chrono::Utc;

  use super::*;
  use crate::Principal;

  fn collector(id: &str, name: &str) -> Collector {
    Collector {
      id:             id.into(),
      principal:      Principal::new(name),
      collector_name: name.into(),
      created_at:     Utc::now(),
      updated_at:     None,
    }
  }

  #[tokio::test]
  async fn insert_overwrites_existing_key() {
    let c = MemoryCollection::<Collector>::default();
    c.insert("k", collector("k", "first")).await.unwrap();
    c.insert("k", collector("k", "second")).await.unwrap();

    let all = c.values().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].collector_name, "second");
  }

  #[tokio::test]
  async fn values_are_in_key_order() {
    let c = MemoryCollection::<Collector>::default();
    for id in ["b", "c", "a"] {
      c.insert(id, collector(id, id)).await.unwrap();
    }

    let ids: Vec<_> =
      c.values().await.unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, ["a", "b", "c"]);
  }

  #[tokio::test]
  async fn remove_returns_old_record() {
    let c = MemoryCollection::<Collector>::default();
    c.insert("k", collector("k", "x")).await.unwrap();

    assert!(c.remove("k").await.unwrap().is_some());
    assert!(c.remove("k").await.unwrap().is_none());
    assert!(c.get("k").await.unwrap().is_none());
  }
}
