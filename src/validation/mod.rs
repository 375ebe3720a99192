//! Manifest field validation.
//!
//! Two layers: [`primitives`] holds the shared length and character-class
//! rules, and [`rules`] composes them into per-field validators. Both
//! layers are pure and stateless; entities delegate to [`rules`] from
//! their `validate()` methods.

pub mod primitives;
pub mod rules;

pub use rules::{IdentifierRules, StartRule};
