//! Encoding between records and the `record_json` column.
//!
//! Records are stored as compact JSON; timestamps inside them are RFC 3339
//! strings (chrono's serde form) and principals are bare strings.

use serde::{Serialize, de::DeserializeOwned};

use crate::Result;

pub fn encode_record<R: Serialize>(record: &R) -> Result<String> {
  Ok(serde_json::to_string(record)?)
}

pub fn decode_record<R: DeserializeOwned>(json: &str) -> Result<R> {
  Ok(serde_json::from_str(json)?)
}
