//! Spouse reconciliation — the pre-pass that makes spouse links symmetric.
//!
//! Input tables often record a marriage on only one side. Before any edge is
//! derived, every record whose spouse is present in the table gets that
//! spouse's record pointed back at it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::person::{PersonId, PersonRecord};

/// A spouse id that was filled in where the record had none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpouseBackfill {
  /// The record that was updated.
  pub person: PersonId,
  pub spouse: PersonId,
}

/// A spouse id that was overwritten because it named a third person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpouseConflict {
  /// The record that was updated.
  pub person:   PersonId,
  pub spouse:   PersonId,
  /// The spouse id the record held before the overwrite.
  pub replaced: PersonId,
}

/// Every change made by [`reconcile_spouses`], in the order it was made.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileReport {
  pub backfilled: Vec<SpouseBackfill>,
  pub conflicts:  Vec<SpouseConflict>,
}

impl ReconcileReport {
  pub fn is_empty(&self) -> bool {
    self.backfilled.is_empty() && self.conflicts.is_empty()
  }
}

/// Make spouse links symmetric, in place.
///
/// Records are visited in table order. For a record `R` naming spouse `S`,
/// the record for `S` (the last one, if the id repeats) is set to name `R`.
/// A spouse id that is not in the table is left alone. A spouse id on `S`
/// naming some third person is overwritten and reported as a conflict, so the
/// most recently visited record wins.
pub fn reconcile_spouses(persons: &mut [PersonRecord]) -> ReconcileReport {
  let index: HashMap<PersonId, usize> = persons
    .iter()
    .enumerate()
    .map(|(i, p)| (p.id.clone(), i))
    .collect();

  let mut report = ReconcileReport::default();

  for i in 0..persons.len() {
    let Some(spouse_id) = persons[i].spouse_id.as_ref() else {
      continue;
    };
    let Some(&j) = index.get(spouse_id) else {
      continue;
    };

    let person_id = persons[i].id.clone();
    let spouse = &mut persons[j];
    if spouse.spouse_id.as_ref() == Some(&person_id) {
      continue;
    }

    match spouse.spouse_id.replace(person_id.clone()) {
      None => report.backfilled.push(SpouseBackfill {
        person: spouse.id.clone(),
        spouse: person_id,
      }),
      Some(replaced) => report.conflicts.push(SpouseConflict {
        person: spouse.id.clone(),
        spouse: person_id,
        replaced,
      }),
    }
  }

  report
}
