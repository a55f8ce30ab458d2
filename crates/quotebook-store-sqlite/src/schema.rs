//! SQL schema for the Quotebook SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

use quotebook_core::record::RecordKind;

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One table per collection. Rows are whole records; an update rewrites
-- record_json in place, a delete removes the row.
CREATE TABLE IF NOT EXISTS authors (
    id          TEXT PRIMARY KEY,
    record_json TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS collectors (
    id          TEXT PRIMARY KEY,
    record_json TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS quotes (
    id          TEXT PRIMARY KEY,
    record_json TEXT NOT NULL
);

PRAGMA user_version = 1;
";

/// The table backing the collection for `kind`.
pub fn table_for(kind: RecordKind) -> &'static str {
  match kind {
    RecordKind::Author => "authors",
    RecordKind::Collector => "collectors",
    RecordKind::Quote => "quotes",
  }
}
