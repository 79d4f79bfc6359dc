//! Relationship-table writers.
//!
//! The text form is a fixed-width table: person ids right-justified to the
//! width of the `Person_Id` heading, relative ids to `Relative_Id`, followed
//! by the relationship label.

use std::fmt::Write as _;

use kinship_core::relation::Relationship;
use serde::Serialize;

use crate::Result;

/// The first line of the text table.
pub const HEADER: &str = "Person_Id | Relative_Id | Connection_Type";

const PERSON_WIDTH: usize = "Person_Id".len();
const RELATIVE_WIDTH: usize = "Relative_Id".len();

/// Render the fixed-width text table, header included. Ids wider than their
/// column are written in full.
pub fn render_text(relationships: &[Relationship]) -> String {
  let mut out = String::with_capacity((relationships.len() + 1) * 48);
  out.push_str(HEADER);
  out.push('\n');
  for r in relationships {
    // Writing to a String cannot fail.
    let _ = writeln!(
      out,
      "{:>PERSON_WIDTH$} | {:>RELATIVE_WIDTH$} | {}",
      r.person_id, r.relative_id, r.kind
    );
  }
  out
}

/// One row of the JSON output.
#[derive(Serialize)]
struct JsonRow<'a> {
  person_id:       &'a str,
  relative_id:     &'a str,
  connection_type: &'static str,
}

/// Render a pretty-printed JSON array, one object per relationship.
pub fn render_json(relationships: &[Relationship]) -> Result<String> {
  let rows: Vec<JsonRow<'_>> = relationships
    .iter()
    .map(|r| JsonRow {
      person_id:       r.person_id.as_str(),
      relative_id:     r.relative_id.as_str(),
      connection_type: r.kind.label(),
    })
    .collect();
  Ok(serde_json::to_string_pretty(&rows)?)
}

#[cfg(test)]
mod tests {
  use kinship_core::{person::PersonId, relation::RelationKind};

  use super::*;

  fn edge(person: &str, relative: &str, kind: RelationKind) -> Relationship {
    Relationship::new(PersonId::new(person), PersonId::new(relative), kind)
  }

  #[test]
  fn empty_list_renders_header_only() {
    assert_eq!(render_text(&[]), format!("{HEADER}\n"));
  }

  #[test]
  fn ids_are_right_justified() {
    let text = render_text(&[
      edge("1", "2", RelationKind::FemalePartner),
      edge("123", "45678", RelationKind::Daughter),
    ]);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, [
      "Person_Id | Relative_Id | Connection_Type",
      "        1 |           2 | Female partner",
      "      123 |       45678 | Daughter",
    ]);
  }

  #[test]
  fn long_ids_are_not_truncated() {
    let text = render_text(&[edge("12345678901", "1", RelationKind::Father)]);
    assert!(text.ends_with("12345678901 |           1 | Father\n"));
  }

  #[test]
  fn json_uses_display_labels() {
    let json = render_json(&[edge("4", "3", RelationKind::MalePartner)]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
      value,
      serde_json::json!([{
        "person_id": "4",
        "relative_id": "3",
        "connection_type": "Male partner",
      }])
    );
  }
}
