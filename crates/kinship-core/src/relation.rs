//! Relationship edges — the output of inference.
//!
//! An edge reads "`person_id` has `kind` `relative_id`": the edge
//! `(1, 2, Father)` says that person 2 is person 1's father.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::person::{Gender, PersonId};

// ─── Kind ────────────────────────────────────────────────────────────────────

/// The closed set of relationship labels. The display form is the label
/// written to the output table.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumIter,
  EnumString,
  IntoStaticStr,
)]
pub enum RelationKind {
  Father,
  Mother,
  Brother,
  Sister,
  Son,
  Daughter,
  #[serde(rename = "Male partner")]
  #[strum(serialize = "Male partner")]
  MalePartner,
  #[serde(rename = "Female partner")]
  #[strum(serialize = "Female partner")]
  FemalePartner,
}

impl RelationKind {
  /// The label for a subject's spouse. Chosen from the *subject's* gender
  /// only; the spouse's own record is not consulted.
  pub fn partner_of(subject: Gender) -> Self {
    if subject.is_male() {
      Self::FemalePartner
    } else {
      Self::MalePartner
    }
  }

  /// The label for a sibling, chosen from the sibling's gender.
  pub fn sibling(sibling: Gender) -> Self {
    if sibling.is_male() { Self::Brother } else { Self::Sister }
  }

  /// The label for a child, chosen from the child's gender.
  pub fn child(child: Gender) -> Self {
    if child.is_male() { Self::Son } else { Self::Daughter }
  }

  pub fn label(self) -> &'static str { self.into() }
}

// ─── Relationship ────────────────────────────────────────────────────────────

/// A directed, typed edge between two person ids. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
  pub person_id:   PersonId,
  pub relative_id: PersonId,
  pub kind:        RelationKind,
}

impl Relationship {
  pub fn new(
    person_id: PersonId,
    relative_id: PersonId,
    kind: RelationKind,
  ) -> Self {
    Self {
      person_id,
      relative_id,
      kind,
    }
  }
}
