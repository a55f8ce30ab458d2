//! Core types, storage traits, and the record-store engine for Quotebook.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! storage backend is injected through [`store::RecordStore`]; the caller's
//! identity, the clock, and id generation are injected too, so every
//! operation on [`book::QuoteBook`] is deterministic under test.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod book;
pub mod context;
pub mod error;
pub mod principal;
pub mod query;
pub mod record;
pub mod store;
pub mod validate;

pub use book::QuoteBook;
pub use error::{Error, ErrorKind, Result};
pub use principal::Principal;
