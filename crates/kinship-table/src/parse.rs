//! Person-table parser.
//!
//! Pipeline:
//!   raw bytes
//!     └─ decode()               → String (UTF-8, else Windows-1252)
//!          └─ csv::Reader ('|')  → trimmed StringRecords
//!               └─ Columns::locate() → header positions
//!                    └─ to_person()  → PersonRecord

use csv::{ReaderBuilder, StringRecord, Trim};
use kinship_core::{
  Error as CoreError,
  person::{Gender, PersonId, PersonRecord},
};

use crate::error::{Error, Result};

const DELIMITER: u8 = b'|';

// ─── Low-level helpers
// ────────────────────────────────────────────────────────

/// Decode file bytes, falling back to Windows-1252 when they are not UTF-8.
pub(crate) fn decode(bytes: Vec<u8>) -> String {
  match String::from_utf8(bytes) {
    Ok(s) => s,
    Err(e) => {
      let bytes = e.into_bytes();
      let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
      decoded.into_owned()
    }
  }
}

/// A trimmed cell, or `None` when the cell is empty or absent (short row).
fn cell(record: &StringRecord, index: usize) -> Option<&str> {
  record.get(index).filter(|v| !v.is_empty())
}

// ─── Header mapping ──────────────────────────────────────────────────────────

/// Positions of the known columns in the header row.
struct Columns {
  id:          usize,
  given_name:  Option<usize>,
  family_name: Option<usize>,
  gender:      usize,
  father_id:   usize,
  mother_id:   usize,
  spouse_id:   usize,
}

impl Columns {
  fn locate(headers: &StringRecord) -> Result<Self> {
    let find = |name: &str| {
      headers.iter().position(|h| h.eq_ignore_ascii_case(name))
    };
    let require =
      |name: &str| find(name).ok_or_else(|| Error::MissingColumn(name.into()));

    Ok(Self {
      id:          require("Person_Id")?,
      given_name:  find("Person_Name"),
      family_name: find("Family_Name"),
      gender:      require("Gender")?,
      father_id:   require("Father_Id")?,
      mother_id:   require("Mother_Id")?,
      spouse_id:   require("Spouse_Id")?,
    })
  }

  fn to_person(
    &self,
    record: &StringRecord,
    position: usize,
  ) -> Result<PersonRecord> {
    let id = cell(record, self.id)
      .ok_or(CoreError::MissingIdentifier { position })?;
    let optional = |index: Option<usize>| {
      index.and_then(|i| cell(record, i)).map(str::to_string)
    };
    let reference = |index: usize| cell(record, index).map(PersonId::from);

    Ok(PersonRecord {
      id:          PersonId::from(id),
      given_name:  optional(self.given_name),
      family_name: optional(self.family_name),
      gender:      Gender::from_code(cell(record, self.gender)),
      father_id:   reference(self.father_id),
      mother_id:   reference(self.mother_id),
      spouse_id:   reference(self.spouse_id),
    })
  }
}

// ─── Entry point ─────────────────────────────────────────────────────────────

/// Parse a `|`-delimited person table with a header row.
///
/// Header names and cell values are trimmed; empty cells become `None`.
/// Header names match case-insensitively. Rows whose cells are all empty are
/// skipped. A row without a `Person_Id` fails with
/// [`kinship_core::Error::MissingIdentifier`], whose position counts the
/// records returned before it.
pub fn parse_table(input: &str) -> Result<Vec<PersonRecord>> {
  let mut reader = ReaderBuilder::new()
    .delimiter(DELIMITER)
    .trim(Trim::All)
    .flexible(true)
    .from_reader(input.as_bytes());

  let columns = Columns::locate(reader.headers()?)?;

  let mut persons = Vec::new();
  for result in reader.records() {
    let record = result?;
    if record.iter().all(str::is_empty) {
      continue;
    }
    persons.push(columns.to_person(&record, persons.len())?);
  }

  Ok(persons)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  const HEADER: &str =
    "Person_Id|Person_Name|Family_Name|Gender|Father_Id|Mother_Id|Spouse_Id\n";

  fn parse(rows: &str) -> Result<Vec<PersonRecord>> {
    parse_table(&format!("{HEADER}{rows}"))
  }

  #[test]
  fn full_row_maps_every_column() {
    let persons = parse("7|Rivka|Levi|F|3|4|8\n").unwrap();
    assert_eq!(persons, vec![PersonRecord {
      id:          PersonId::new("7"),
      given_name:  Some("Rivka".into()),
      family_name: Some("Levi".into()),
      gender:      Gender::Female,
      father_id:   Some(PersonId::new("3")),
      mother_id:   Some(PersonId::new("4")),
      spouse_id:   Some(PersonId::new("8")),
    }]);
  }

  #[test]
  fn whitespace_is_trimmed_and_blanks_become_none() {
    let persons = parse_table(
      " Person_Id | Gender | Father_Id | Mother_Id | Spouse_Id \n  12  |  M  \
       |    |   5  |   \n",
    )
    .unwrap();

    let p = &persons[0];
    assert_eq!(p.id.as_str(), "12");
    assert_eq!(p.gender, Gender::Male);
    assert_eq!(p.father_id, None);
    assert_eq!(p.mother_id, Some(PersonId::new("5")));
    assert_eq!(p.spouse_id, None);
    assert_eq!(p.given_name, None);
  }

  #[test]
  fn short_rows_leave_trailing_columns_empty() {
    let persons = parse("1|Moshe|Katz|M\n").unwrap();
    assert_eq!(persons[0].father_id, None);
    assert_eq!(persons[0].spouse_id, None);
  }

  #[test]
  fn headers_match_case_insensitively() {
    let persons =
      parse_table("person_id|GENDER|father_id|mother_id|spouse_id\n1|M|||\n")
        .unwrap();
    assert_eq!(persons.len(), 1);
  }

  #[test]
  fn columns_may_appear_in_any_order() {
    let persons =
      parse_table("Spouse_Id|Mother_Id|Father_Id|Gender|Person_Id\n9|8|7|M|1\n")
        .unwrap();
    let p = &persons[0];
    assert_eq!(p.id.as_str(), "1");
    assert_eq!(p.father_id, Some(PersonId::new("7")));
    assert_eq!(p.mother_id, Some(PersonId::new("8")));
    assert_eq!(p.spouse_id, Some(PersonId::new("9")));
  }

  #[test]
  fn unknown_gender_codes_are_female() {
    let persons = parse("1|||X|||\n2|||||||\n").unwrap();
    assert!(persons.iter().all(|p| p.gender == Gender::Female));
  }

  #[test]
  fn missing_required_column_is_reported() {
    let err = parse_table("Person_Id|Gender|Father_Id|Mother_Id\n1|M||\n")
      .unwrap_err();
    assert!(matches!(err, Error::MissingColumn(ref c) if c == "Spouse_Id"));
  }

  #[test]
  fn missing_identifier_is_fatal() {
    let err = parse("1||||||\n|Dana||F|||\n").unwrap_err();
    assert!(matches!(
      err,
      Error::Core(CoreError::MissingIdentifier { position: 1 })
    ));
  }

  #[test]
  fn blank_rows_are_skipped() {
    let persons = parse("1|||M|||\n   \n||||||\n2|||F|||\n").unwrap();
    let ids: Vec<_> = persons.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["1", "2"]);
  }

  #[test]
  fn header_only_table_is_empty() {
    assert!(parse("").unwrap().is_empty());
  }
}
