//! Person records — the rows of the input table.
//!
//! A record carries its own identifier plus up to three optional foreign keys
//! (father, mother, spouse). A referenced id does not have to exist as a
//! record of its own.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Identifier ──────────────────────────────────────────────────────────────

/// The identifier of a person, kept as the raw string from the table.
///
/// Identifiers are compared as strings everywhere except when ordering the
/// final edge list, where they must parse as integers.
#[derive(
  Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
  pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }

  pub fn as_str(&self) -> &str { &self.0 }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  /// The integer value used to order edges.
  pub fn sort_key(&self) -> Result<i64> {
    self
      .0
      .parse()
      .map_err(|_| Error::NonNumericIdentifier(self.0.clone()))
  }
}

impl fmt::Display for PersonId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(&self.0)
  }
}

impl From<&str> for PersonId {
  fn from(id: &str) -> Self { Self(id.to_string()) }
}

impl From<String> for PersonId {
  fn from(id: String) -> Self { Self(id) }
}

// ─── Gender ──────────────────────────────────────────────────────────────────

/// Gender as used for choosing relationship labels.
///
/// Only two values are modelled. The table code `"M"` is male; every other
/// code, including a missing one, is treated as female.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
  Male,
  #[default]
  Female,
}

impl Gender {
  pub fn from_code(code: Option<&str>) -> Self {
    match code {
      Some("M") => Self::Male,
      _ => Self::Female,
    }
  }

  pub fn is_male(self) -> bool { matches!(self, Self::Male) }
}

// ─── PersonRecord ────────────────────────────────────────────────────────────

/// One row of the person table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
  pub id:          PersonId,
  /// Informational only; never consulted by inference.
  pub given_name:  Option<String>,
  pub family_name: Option<String>,
  pub gender:      Gender,
  pub father_id:   Option<PersonId>,
  pub mother_id:   Option<PersonId>,
  pub spouse_id:   Option<PersonId>,
}

impl PersonRecord {
  /// A record with no names and no relations.
  pub fn new(id: impl Into<PersonId>, gender: Gender) -> Self {
    Self {
      id: id.into(),
      given_name: None,
      family_name: None,
      gender,
      father_id: None,
      mother_id: None,
      spouse_id: None,
    }
  }

  pub fn with_father(mut self, id: impl Into<PersonId>) -> Self {
    self.father_id = Some(id.into());
    self
  }

  pub fn with_mother(mut self, id: impl Into<PersonId>) -> Self {
    self.mother_id = Some(id.into());
    self
  }

  pub fn with_spouse(mut self, id: impl Into<PersonId>) -> Self {
    self.spouse_id = Some(id.into());
    self
  }

  /// Both parent ids, when both are known.
  pub fn parents(&self) -> Option<(&PersonId, &PersonId)> {
    Some((self.father_id.as_ref()?, self.mother_id.as_ref()?))
  }
}
