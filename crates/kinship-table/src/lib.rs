//! Pipe-delimited table codec for kinship.
//!
//! Reads the person table into [`kinship_core`] records and renders inferred
//! relationships as the fixed-width `family_tree.txt` table or as JSON. Pure
//! synchronous; the inference itself lives in `kinship-core`.
//!
//! # Quick start
//!
//! ```no_run
//! use kinship_table::{OutputFormat, parse_table, render};
//!
//! let table = "Person_Id|Gender|Father_Id|Mother_Id|Spouse_Id\n1|M|||2\n2|F|||\n";
//! let persons = parse_table(table).unwrap();
//! let tree = kinship_core::build_family_tree(persons).unwrap();
//! print!("{}", render(&tree.relationships, OutputFormat::Text).unwrap());
//! ```

pub mod error;
mod parse;
mod serialize;

use std::path::Path;

pub use error::{Error, Result};
use kinship_core::{person::PersonRecord, relation::Relationship};
pub use parse::parse_table;
use serde::{Deserialize, Serialize};
pub use serialize::{HEADER, render_json, render_text};
use strum::{Display, EnumString};

// ─── Public types
// ─────────────────────────────────────────────────────────────

/// How the relationship list is written out.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
  Display,
  EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
  /// The fixed-width `Person_Id | Relative_Id | Connection_Type` table.
  #[default]
  Text,
  /// A JSON array of `{person_id, relative_id, connection_type}` objects.
  Json,
}

// ─── Public API
// ───────────────────────────────────────────────────────────────

/// Read and parse the person table at `path`.
///
/// Input that is not valid UTF-8 is decoded as Windows-1252, which covers
/// tables exported from spreadsheet tools.
pub fn read_table(path: &Path) -> Result<Vec<PersonRecord>> {
  let bytes = std::fs::read(path)?;
  parse_table(&parse::decode(bytes))
}

/// Render `relationships` in the given format.
pub fn render(
  relationships: &[Relationship],
  format: OutputFormat,
) -> Result<String> {
  match format {
    OutputFormat::Text => Ok(render_text(relationships)),
    OutputFormat::Json => render_json(relationships),
  }
}

/// Render `relationships` and write them to `path`, replacing any existing
/// file.
pub fn write_table(
  path: &Path,
  relationships: &[Relationship],
  format: OutputFormat,
) -> Result<()> {
  std::fs::write(path, render(relationships, format)?)?;
  Ok(())
}

// ─── File round-trip tests ───────────────────────────────────────────────────
