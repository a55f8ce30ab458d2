//! The query engine: read-only operations on [`QuoteBook`].
//!
//! Every query takes a full snapshot of the relevant collection(s) and scans
//! it linearly. There are no secondary indexes; the store is meant for small
//! datasets. Results come back in the collection's enumeration order unless a
//! query sorts explicitly.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::{
  Error, Principal, Result,
  book::{QuoteBook, fetch, snapshot},
  record::{Author, Collector, Quote},
  store::RecordStore,
};

/// An author paired with every quote that references it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorWithQuotes {
  pub author: Author,
  pub quotes: Vec<Quote>,
}

/// The earliest- and latest-created quotes in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteSpan {
  pub oldest: Quote,
  pub newest: Quote,
}

impl<S: RecordStore> QuoteBook<S> {
  // ── Listing and lookup ────────────────────────────────────────────────────

  pub async fn list_authors(&self) -> Result<Vec<Author>> {
    let _gate = self.gate.read().await;
    snapshot(self.store().authors()).await
  }

  pub async fn list_collectors(&self) -> Result<Vec<Collector>> {
    let _gate = self.gate.read().await;
    snapshot(self.store().collectors()).await
  }

  pub async fn list_quotes(&self) -> Result<Vec<Quote>> {
    let _gate = self.gate.read().await;
    snapshot(self.store().quotes()).await
  }

  pub async fn get_author(&self, id: &str) -> Result<Author> {
    let _gate = self.gate.read().await;
    fetch(self.store().authors(), id).await
  }

  pub async fn get_collector(&self, id: &str) -> Result<Collector> {
    let _gate = self.gate.read().await;
    fetch(self.store().collectors(), id).await
  }

  pub async fn get_quote(&self, id: &str) -> Result<Quote> {
    let _gate = self.gate.read().await;
    fetch(self.store().quotes(), id).await
  }

  // ── Filters ───────────────────────────────────────────────────────────────

  /// Quotes uploaded by `principal`, matched on the ownership field. Pass
  /// the caller's own identity for "my quotes".
  pub async fn quotes_by_collector(&self, principal: &Principal) -> Result<Vec<Quote>> {
    let _gate = self.gate.read().await;
    self.scan_quotes(|q| &q.collector == principal).await
  }

  /// Quotes whose caller-supplied `collector_id` equals `collector_id`.
  pub async fn quotes_by_collector_id(&self, collector_id: &str) -> Result<Vec<Quote>> {
    let _gate = self.gate.read().await;
    self.scan_quotes(|q| q.collector_id == collector_id).await
  }

  pub async fn quotes_by_author_id(&self, author_id: &str) -> Result<Vec<Quote>> {
    let _gate = self.gate.read().await;
    self.scan_quotes(|q| q.author_id == author_id).await
  }

  /// Quotes by the first author whose name matches `name` ignoring case.
  ///
  /// Fails with [`Error::AuthorNameNotFound`] when no author matches, rather
  /// than returning an empty list.
  pub async fn quotes_by_author_name(&self, name: &str) -> Result<Vec<Quote>> {
    let _gate = self.gate.read().await;

    let needle = name.to_lowercase();
    let authors: Vec<Author> = snapshot(self.store().authors()).await?;
    let author = authors
      .into_iter()
      .find(|a| a.name.to_lowercase() == needle)
      .ok_or_else(|| Error::AuthorNameNotFound(name.to_owned()))?;

    debug!(%name, author_id = %author.id, "resolved author name");
    self.scan_quotes(|q| q.author_id == author.id).await
  }

  // ── Aggregates ────────────────────────────────────────────────────────────

  /// Every author with the quotes that reference it.
  pub async fn authors_with_quotes(&self) -> Result<Vec<AuthorWithQuotes>> {
    let _gate = self.gate.read().await;

    let authors: Vec<Author> = snapshot(self.store().authors()).await?;
    let quotes: Vec<Quote> = snapshot(self.store().quotes()).await?;

    Ok(
      authors
        .into_iter()
        .map(|author| {
          let quotes = quotes
            .iter()
            .filter(|q| q.author_id == author.id)
            .cloned()
            .collect();
          AuthorWithQuotes { author, quotes }
        })
        .collect(),
    )
  }

  pub async fn total_quote_count(&self) -> Result<usize> {
    let _gate = self.gate.read().await;
    let quotes: Vec<Quote> = snapshot(self.store().quotes()).await?;
    Ok(quotes.len())
  }

  /// The oldest and newest quotes by `created_at`. Needs at least two
  /// quotes; ties keep enumeration order.
  pub async fn oldest_and_newest_quotes(&self) -> Result<QuoteSpan> {
    let _gate = self.gate.read().await;

    let mut quotes: Vec<Quote> = snapshot(self.store().quotes()).await?;
    quotes.sort_by_key(|q| q.created_at);

    match quotes.as_slice() {
      [oldest, .., newest] => Ok(QuoteSpan {
        oldest: oldest.clone(),
        newest: newest.clone(),
      }),
      _ => Err(Error::InsufficientData(quotes.len())),
    }
  }

  /// Distinct author names, in order of first occurrence. Names are compared
  /// exactly.
  pub async fn unique_author_names(&self) -> Result<Vec<String>> {
    let _gate = self.gate.read().await;

    let authors: Vec<Author> = snapshot(self.store().authors()).await?;
    let mut seen = HashSet::new();
    Ok(
      authors
        .into_iter()
        .map(|a| a.name)
        .filter(|name| seen.insert(name.clone()))
        .collect(),
    )
  }

  /// Scan all quotes with `keep`. The caller must already hold the gate.
  async fn scan_quotes<F>(&self, keep: F) -> Result<Vec<Quote>>
  where
    F: Fn(&Quote) -> bool + Send,
  {
    let mut quotes: Vec<Quote> = snapshot(self.store().quotes()).await?;
    quotes.retain(|q| keep(q));
    Ok(quotes)
  }
}
