//! Core types and the relationship inference engine for kinship.
//!
//! This crate is deliberately free of file-format and logging dependencies.
//! It consumes an in-memory table of [`person::PersonRecord`]s and produces a
//! sorted list of [`relation::Relationship`] edges; reading the table and
//! rendering the edges live in `kinship-table`.

pub mod error;
pub mod infer;
pub mod person;
pub mod reconcile;
pub mod relation;

pub use error::{Error, Result};
pub use infer::{FamilyTree, build_family_tree, derive_relationships};
