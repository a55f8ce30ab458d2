//! JSON REST API for Quotebook.
//!
//! Exposes an axum [`Router`] backed by a [`QuoteBook`] over any
//! [`RecordStore`]. Authentication, TLS, and transport concerns are the
//! caller's responsibility; this router only reads the already-established
//! caller identity from a request header (see [`identity`]).
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", quotebook_api::api_router(book.clone(), header))
//! ```

pub mod authors;
pub mod collectors;
pub mod error;
pub mod extract;
pub mod identity;
pub mod quotes;
pub mod reports;

use std::sync::Arc;

use axum::{Router, http::HeaderName, routing::get};
use quotebook_core::{QuoteBook, store::RecordStore};

pub use error::ApiError;
pub use identity::{Caller, DEFAULT_IDENTITY_HEADER};

/// Shared state threaded through all handlers.
pub struct ApiState<S: RecordStore> {
  pub book:            Arc<QuoteBook<S>>,
  /// Request header carrying the caller's identity.
  pub identity_header: HeaderName,
}

impl<S: RecordStore> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    Self {
      book:            Arc::clone(&self.book),
      identity_header: self.identity_header.clone(),
    }
  }
}

/// Build a fully-materialised API router for `book`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S: RecordStore>(
  book: Arc<QuoteBook<S>>,
  identity_header: HeaderName,
) -> Router<()> {
  Router::new()
    // Authors
    .route("/authors", get(authors::list::<S>).post(authors::create::<S>))
    .route(
      "/authors/{id}",
      get(authors::get_one::<S>)
        .patch(authors::update::<S>)
        .delete(authors::delete::<S>),
    )
    // Collectors
    .route(
      "/collectors",
      get(collectors::list::<S>).post(collectors::register::<S>),
    )
    .route(
      "/collectors/{id}",
      get(collectors::get_one::<S>).patch(collectors::update::<S>),
    )
    // Quotes
    .route("/quotes", get(quotes::list::<S>).post(quotes::upload::<S>))
    .route("/quotes/mine", get(quotes::mine::<S>))
    .route(
      "/quotes/{id}",
      get(quotes::get_one::<S>)
        .patch(quotes::update::<S>)
        .delete(quotes::delete::<S>),
    )
    // Reports
    .route("/reports/authors-with-quotes", get(reports::authors_with_quotes::<S>))
    .route("/reports/quote-count", get(reports::quote_count::<S>))
    .route("/reports/oldest-newest", get(reports::oldest_newest::<S>))
    .route("/reports/author-names", get(reports::author_names::<S>))
    .with_state(ApiState { book, identity_header })
}
