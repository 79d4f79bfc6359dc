//! Error types for `kinship-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A record has an empty identifier. Raised before any inference runs.
  #[error("person record at position {position} has no identifier")]
  MissingIdentifier { position: usize },

  /// An identifier could not be parsed as an integer when ordering edges.
  #[error("identifier is not an integer: {0:?}")]
  NonNumericIdentifier(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
