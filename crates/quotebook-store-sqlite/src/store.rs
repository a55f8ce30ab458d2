//! [`SqliteStore`] — the SQLite implementation of [`RecordStore`].

use std::{marker::PhantomData, path::Path};

use rusqlite::OptionalExtension as _;

use quotebook_core::{
  record::{Author, Collector, Quote, Record},
  store::{Collection, RecordStore},
};

use crate::{
  Result,
  encode::{decode_record, encode_record},
  schema::{SCHEMA, table_for},
};

// ─── Collection ──────────────────────────────────────────────────────────────

/// One keyed collection stored in its own table.
///
/// Cloning is cheap — the inner connection is reference-counted.
pub struct SqliteCollection<R> {
  conn:    tokio_rusqlite::Connection,
  table:   &'static str,
  _record: PhantomData<fn() -> R>,
}

impl<R: Record> SqliteCollection<R> {
  fn new(conn: tokio_rusqlite::Connection) -> Self {
    Self { conn, table: table_for(R::KIND), _record: PhantomData }
  }
}

impl<R> Clone for SqliteCollection<R> {
  fn clone(&self) -> Self {
    Self { conn: self.conn.clone(), table: self.table, _record: PhantomData }
  }
}

impl<R: Record> Collection<R> for SqliteCollection<R> {
  type Error = crate::Error;

  async fn get(&self, id: &str) -> Result<Option<R>> {
    let id  = id.to_owned();
    let sql = format!("SELECT record_json FROM {} WHERE id = ?1", self.table);

    let json: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id], |row| row.get(0))
            .optional()?,
        )
      })
      .await?;

    json.as_deref().map(decode_record).transpose()
  }

  async fn insert(&self, id: &str, record: R) -> Result<()> {
    let id   = id.to_owned();
    let json = encode_record(&record)?;
    let sql  = format!(
      "INSERT INTO {} (id, record_json) VALUES (?1, ?2)
       ON CONFLICT(id) DO UPDATE SET record_json = excluded.record_json",
      self.table
    );

    self
      .conn
      .call(move |conn| {
        conn.execute(&sql, rusqlite::params![id, json])?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn remove(&self, id: &str) -> Result<Option<R>> {
    let id     = id.to_owned();
    let select = format!("SELECT record_json FROM {} WHERE id = ?1", self.table);
    let delete = format!("DELETE FROM {} WHERE id = ?1", self.table);

    let json: Option<String> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let json: Option<String> = tx
          .query_row(&select, rusqlite::params![id], |row| row.get(0))
          .optional()?;
        if json.is_some() {
          tx.execute(&delete, rusqlite::params![id])?;
        }
        tx.commit()?;
        Ok(json)
      })
      .await?;

    json.as_deref().map(decode_record).transpose()
  }

  async fn values(&self) -> Result<Vec<R>> {
    let sql = format!("SELECT record_json FROM {} ORDER BY id", self.table);

    let raws: Vec<String> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(rows)
      })
      .await?;

    raws.iter().map(|json| decode_record(json)).collect()
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Quotebook record store backed by a single SQLite file.
///
/// Cloning is cheap — every collection shares one reference-counted
/// connection.
#[derive(Clone)]
pub struct SqliteStore {
  authors:    SqliteCollection<Author>,
  collectors: SqliteCollection<Collector>,
  quotes:     SqliteCollection<Quote>,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let conn = tokio_rusqlite::Connection::open(path).await?;
    tracing::debug!(path = %path.display(), "opened sqlite store");
    Self::init(conn).await
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    Self::init(conn).await
  }

  async fn init(conn: tokio_rusqlite::Connection) -> Result<Self> {
    conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;

    Ok(Self {
      authors:    SqliteCollection::new(conn.clone()),
      collectors: SqliteCollection::new(conn.clone()),
      quotes:     SqliteCollection::new(conn),
    })
  }
}

impl RecordStore for SqliteStore {
  type Authors = SqliteCollection<Author>;
  type Collectors = SqliteCollection<Collector>;
  type Quotes = SqliteCollection<Quote>;

  fn authors(&self) -> &Self::Authors { &self.authors }

  fn collectors(&self) -> &Self::Collectors { &self.collectors }

  fn quotes(&self) -> &Self::Quotes { &self.quotes }
}
