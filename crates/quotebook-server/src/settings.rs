//! Runtime server configuration.
//!
//! Read from a TOML file layered with `QUOTEBOOK_`-prefixed environment
//! variables. Every field has a default, so an absent file is fine.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use axum::http::HeaderName;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub host:            String,
  pub port:            u16,
  /// SQLite database file; a leading `~/` expands to `$HOME`.
  pub store_path:      PathBuf,
  /// Request header an upstream proxy uses to assert the caller identity.
  pub identity_header: String,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:            "127.0.0.1".to_string(),
      port:            8080,
      store_path:      PathBuf::from("quotebook.db"),
      identity_header: quotebook_api::DEFAULT_IDENTITY_HEADER.to_string(),
    }
  }
}

impl ServerConfig {
  /// Load from `path` (optional) then the environment.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("QUOTEBOOK"))
      .build()
      .context("failed to read config file")?;

    settings
      .try_deserialize()
      .context("failed to deserialise ServerConfig")
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// The database file, with a `~/` prefix resolved against `$HOME`.
  pub fn store_path(&self) -> PathBuf {
    match (self.store_path.strip_prefix("~"), std::env::var_os("HOME")) {
      (Ok(relative), Some(home)) => PathBuf::from(home).join(relative),
      _ => self.store_path.clone(),
    }
  }

  pub fn identity_header(&self) -> anyhow::Result<HeaderName> {
    HeaderName::try_from(self.identity_header.as_str())
      .with_context(|| format!("invalid identity_header {:?}", self.identity_header))
  }
}
