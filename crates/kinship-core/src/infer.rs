//! The relationship inference engine.
//!
//! Pipeline:
//!   Vec<PersonRecord>
//!     └─ validate_identifiers()   → MissingIdentifier on an empty id
//!          └─ reconcile_spouses()  → symmetric spouse links
//!               └─ direct_edges()  → Father / Mother / partner
//!               └─ sibling_edges() → Brother / Sister
//!               └─ child_edges()   → Son / Daughter
//!                    └─ sort_by_ids() → ordered by (person, relative)

use std::collections::HashMap;

use crate::{
  Error, Result,
  person::{PersonId, PersonRecord},
  reconcile::{ReconcileReport, reconcile_spouses},
  relation::{RelationKind, Relationship},
};

/// The result of [`build_family_tree`].
#[derive(Debug, Clone)]
pub struct FamilyTree {
  /// The input table after spouse reconciliation.
  pub persons:       Vec<PersonRecord>,
  /// All inferred edges, sorted by (person id, relative id) as integers.
  pub relationships: Vec<Relationship>,
  pub report:        ReconcileReport,
}

/// Reconcile spouse links in `persons`, then infer every relationship edge.
pub fn build_family_tree(mut persons: Vec<PersonRecord>) -> Result<FamilyTree> {
  validate_identifiers(&persons)?;
  let report = reconcile_spouses(&mut persons);
  let relationships = derive(&persons)?;

  Ok(FamilyTree {
    persons,
    relationships,
    report,
  })
}

/// Infer every relationship edge from an already-reconciled table.
///
/// Running this twice on the same table yields the same list.
pub fn derive_relationships(
  persons: &[PersonRecord],
) -> Result<Vec<Relationship>> {
  validate_identifiers(persons)?;
  derive(persons)
}

fn derive(persons: &[PersonRecord]) -> Result<Vec<Relationship>> {
  let mut edges = Vec::new();
  direct_edges(persons, &mut edges);
  sibling_edges(persons, &mut edges);
  child_edges(persons, &mut edges);
  sort_by_ids(edges)
}

fn validate_identifiers(persons: &[PersonRecord]) -> Result<()> {
  match persons.iter().position(|p| p.id.is_empty()) {
    Some(position) => Err(Error::MissingIdentifier { position }),
    None => Ok(()),
  }
}

// ─── Edge derivation ─────────────────────────────────────────────────────────

/// Parent and spouse edges, in table order. Dangling ids are emitted as-is.
fn direct_edges(persons: &[PersonRecord], edges: &mut Vec<Relationship>) {
  for person in persons {
    if let Some(father) = &person.father_id {
      edges.push(Relationship::new(
        person.id.clone(),
        father.clone(),
        RelationKind::Father,
      ));
    }
    if let Some(mother) = &person.mother_id {
      edges.push(Relationship::new(
        person.id.clone(),
        mother.clone(),
        RelationKind::Mother,
      ));
    }
    if let Some(spouse) = &person.spouse_id {
      edges.push(Relationship::new(
        person.id.clone(),
        spouse.clone(),
        RelationKind::partner_of(person.gender),
      ));
    }
  }
}

/// Two people are siblings when they share the same known father *and* the
/// same known mother. Each pair yields one edge in each direction, labelled
/// by the relative's gender.
fn sibling_edges(persons: &[PersonRecord], edges: &mut Vec<Relationship>) {
  let mut by_parents: HashMap<(&PersonId, &PersonId), Vec<&PersonRecord>> =
    HashMap::new();
  for person in persons {
    if let Some(parents) = person.parents() {
      by_parents.entry(parents).or_default().push(person);
    }
  }

  for person in persons {
    let Some(siblings) = person.parents().and_then(|p| by_parents.get(&p))
    else {
      continue;
    };
    for sibling in siblings.iter().filter(|s| s.id != person.id) {
      edges.push(Relationship::new(
        person.id.clone(),
        sibling.id.clone(),
        RelationKind::sibling(sibling.gender),
      ));
    }
  }
}

/// Every record whose id appears as a child's father or mother id gets an
/// edge to that child, labelled by the child's gender.
fn child_edges(persons: &[PersonRecord], edges: &mut Vec<Relationship>) {
  let mut by_parent: HashMap<&PersonId, Vec<&PersonRecord>> = HashMap::new();
  for child in persons {
    if let Some(father) = &child.father_id {
      by_parent.entry(father).or_default().push(child);
    }
    // A child naming the same id twice is still only one child of it.
    if let Some(mother) = &child.mother_id
      && child.father_id.as_ref() != Some(mother)
    {
      by_parent.entry(mother).or_default().push(child);
    }
  }

  for parent in persons {
    let Some(children) = by_parent.get(&parent.id) else {
      continue;
    };
    for child in children {
      edges.push(Relationship::new(
        parent.id.clone(),
        child.id.clone(),
        RelationKind::child(child.gender),
      ));
    }
  }
}

// ─── Ordering ────────────────────────────────────────────────────────────────

/// Stable sort by (person id, relative id) parsed as integers. Keys are
/// computed in construction order; the first non-numeric id aborts.
fn sort_by_ids(edges: Vec<Relationship>) -> Result<Vec<Relationship>> {
  let mut keyed = edges
    .into_iter()
    .map(|edge| {
      let key = (edge.person_id.sort_key()?, edge.relative_id.sort_key()?);
      Ok((key, edge))
    })
    .collect::<Result<Vec<_>>>()?;

  keyed.sort_by_key(|(key, _)| *key);
  Ok(keyed.into_iter().map(|(_, edge)| edge).collect())
}
