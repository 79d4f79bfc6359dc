//! Error types for the kinship-table codec.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("table header has no {0} column")]
  MissingColumn(String),

  #[error("malformed table: {0}")]
  Csv(#[from] csv::Error),

  #[error("{0}")]
  Core(#[from] kinship_core::Error),

  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
