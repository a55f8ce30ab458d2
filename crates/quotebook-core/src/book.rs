//! [`QuoteBook`] — the record lifecycle manager.
//!
//! Every mutating operation follows the same shape: validate the payload,
//! take the write side of the operation gate, look the record up, check
//! ownership, build the new record, and write it back with a single
//! `insert`/`remove`. Nothing is written until every check has passed.
//!
//! The read-only query engine lives in [`crate::query`] as a second `impl`
//! block on the same type.

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::{
  Error, Principal, Result,
  context::{Clock, IdGenerator, SystemClock, UuidGenerator},
  record::{
    Author, AuthorPatch, AuthorPayload, Collector, CollectorPayload, Quote,
    QuotePatch, QuotePayload, Record, RecordKind,
  },
  store::{Collection, RecordStore},
  validate,
};

// ─── Collection helpers ──────────────────────────────────────────────────────

/// Fetch a record or fail with [`Error::NotFound`].
pub(crate) async fn fetch<R, C>(collection: &C, id: &str) -> Result<R>
where
  R: Record,
  C: Collection<R>,
{
  collection
    .get(id)
    .await
    .map_err(Error::storage)?
    .ok_or_else(|| Error::not_found(R::KIND, id))
}

/// Every record in `collection`.
pub(crate) async fn snapshot<R, C>(collection: &C) -> Result<Vec<R>>
where
  R: Record,
  C: Collection<R>,
{
  collection.values().await.map_err(Error::storage)
}

async fn put<R, C>(collection: &C, record: R) -> Result<()>
where
  R: Record,
  C: Collection<R>,
{
  let id = record.id().to_owned();
  collection.insert(&id, record).await.map_err(Error::storage)
}

async fn discard<R, C>(collection: &C, id: &str) -> Result<()>
where
  R: Record,
  C: Collection<R>,
{
  collection
    .remove(id)
    .await
    .map_err(Error::storage)?
    .ok_or_else(|| Error::not_found(R::KIND, id))?;
  Ok(())
}

// ─── QuoteBook ───────────────────────────────────────────────────────────────

/// The record-store engine over a [`RecordStore`] backend.
///
/// Operations are serialised through an internal reader/writer gate: reads
/// may overlap each other, but a write never interleaves with any other
/// operation.
pub struct QuoteBook<S: RecordStore> {
  store:           S,
  clock:           Box<dyn Clock>,
  ids:             Box<dyn IdGenerator>,
  pub(crate) gate: RwLock<()>,
}

impl<S: RecordStore> QuoteBook<S> {
  /// A book stamping wall-clock time and random UUIDs.
  pub fn new(store: S) -> Self {
    Self::with_context(store, SystemClock, UuidGenerator)
  }

  pub fn with_context(
    store: S,
    clock: impl Clock + 'static,
    ids: impl IdGenerator + 'static,
  ) -> Self {
    Self {
      store,
      clock: Box::new(clock),
      ids: Box::new(ids),
      gate: RwLock::new(()),
    }
  }

  pub fn store(&self) -> &S { &self.store }

  // ── Authors ───────────────────────────────────────────────────────────────

  /// Create an author owned by `caller`. Any identity may add authors.
  pub async fn create_author(
    &self,
    caller: &Principal,
    payload: AuthorPayload,
  ) -> Result<Author> {
    validate::author_payload(&payload)?;
    let _gate = self.gate.write().await;

    let author = Author {
      id:         self.ids.next_id(),
      name:       payload.name,
      birth_year: payload.birth_year,
      creator:    caller.clone(),
      created_at: self.clock.now(),
      updated_at: None,
    };
    put(self.store.authors(), author.clone()).await?;

    info!(id = %author.id, name = %author.name, "author created");
    Ok(author)
  }

  pub async fn update_author(
    &self,
    caller: &Principal,
    id: &str,
    patch: AuthorPatch,
  ) -> Result<Author> {
    validate::author_patch(&patch)?;
    let _gate = self.gate.write().await;

    let current: Author = fetch(self.store.authors(), id).await?;
    validate::ensure_owner(RecordKind::Author, "update", &current.creator, caller)?;

    let updated = current.merged(patch, self.clock.now());
    put(self.store.authors(), updated.clone()).await?;

    info!(%id, "author updated");
    Ok(updated)
  }

  /// Delete an author. Quotes referring to it are left in place and keep
  /// the now-dangling `author_id`.
  pub async fn delete_author(&self, caller: &Principal, id: &str) -> Result<()> {
    let _gate = self.gate.write().await;

    let current: Author = fetch(self.store.authors(), id).await?;
    validate::ensure_owner(RecordKind::Author, "delete", &current.creator, caller)?;
    discard::<Author, _>(self.store.authors(), id).await?;

    info!(%id, "author deleted");
    Ok(())
  }

  // ── Collectors ────────────────────────────────────────────────────────────

  /// Register `caller` as a collector. Each identity may register once.
  pub async fn register_collector(
    &self,
    caller: &Principal,
    payload: CollectorPayload,
  ) -> Result<Collector> {
    validate::collector_payload(&payload)?;
    let _gate = self.gate.write().await;

    let existing: Vec<Collector> = snapshot(self.store.collectors()).await?;
    if existing.iter().any(|c| &c.principal == caller) {
      debug!(%caller, "duplicate collector registration");
      return Err(Error::DuplicateRegistration);
    }

    let collector = Collector {
      id:             self.ids.next_id(),
      principal:      caller.clone(),
      collector_name: payload.collector_name,
      created_at:     self.clock.now(),
      updated_at:     None,
    };
    put(self.store.collectors(), collector.clone()).await?;

    info!(id = %collector.id, %caller, "collector registered");
    Ok(collector)
  }

  pub async fn update_collector(
    &self,
    caller: &Principal,
    id: &str,
    payload: CollectorPayload,
  ) -> Result<Collector> {
    validate::collector_payload(&payload)?;
    let _gate = self.gate.write().await;

    let current: Collector = fetch(self.store.collectors(), id).await?;
    validate::ensure_owner(
      RecordKind::Collector,
      "update",
      &current.principal,
      caller,
    )?;

    let updated = current.merged(payload, self.clock.now());
    put(self.store.collectors(), updated.clone()).await?;

    info!(%id, "collector updated");
    Ok(updated)
  }

  // ── Quotes ────────────────────────────────────────────────────────────────

  /// Store a new quote owned by `caller`. Fails with [`Error::NotFound`]
  /// unless `author_id` names an existing author. `collector_id` is stored
  /// as given.
  pub async fn upload_quote(
    &self,
    caller: &Principal,
    payload: QuotePayload,
  ) -> Result<Quote> {
    validate::quote_payload(&payload)?;
    let _gate = self.gate.write().await;

    self.ensure_author_exists(&payload.author_id).await?;

    let quote = Quote {
      id:           self.ids.next_id(),
      content:      payload.content,
      author_id:    payload.author_id,
      collector_id: payload.collector_id,
      collector:    caller.clone(),
      created_at:   self.clock.now(),
      updated_at:   None,
    };
    put(self.store.quotes(), quote.clone()).await?;

    info!(id = %quote.id, author_id = %quote.author_id, "quote uploaded");
    Ok(quote)
  }

  /// Merge `patch` into a quote owned by `caller`.
  ///
  /// A new `author_id` is applied without checking that the author exists;
  /// only upload enforces the reference.
  pub async fn update_quote(
    &self,
    caller: &Principal,
    id: &str,
    patch: QuotePatch,
  ) -> Result<Quote> {
    validate::quote_patch(&patch)?;
    let _gate = self.gate.write().await;

    let current: Quote = fetch(self.store.quotes(), id).await?;
    validate::ensure_owner(RecordKind::Quote, "update", &current.collector, caller)?;

    let updated = current.merged(patch, self.clock.now());
    put(self.store.quotes(), updated.clone()).await?;

    info!(%id, "quote updated");
    Ok(updated)
  }

  pub async fn delete_quote(&self, caller: &Principal, id: &str) -> Result<()> {
    let _gate = self.gate.write().await;

    let current: Quote = fetch(self.store.quotes(), id).await?;
    validate::ensure_owner(RecordKind::Quote, "delete", &current.collector, caller)?;
    discard::<Quote, _>(self.store.quotes(), id).await?;

    info!(%id, "quote deleted");
    Ok(())
  }

  /// Referential check for uploads: scan the author collection for `author_id`.
  async fn ensure_author_exists(&self, author_id: &str) -> Result<()> {
    let authors: Vec<Author> = snapshot(self.store.authors()).await?;
    if authors.iter().any(|a| a.id == author_id) {
      Ok(())
    } else {
      debug!(%author_id, "upload refers to unknown author");
      Err(Error::not_found(RecordKind::Author, author_id))
    }
  }
}
