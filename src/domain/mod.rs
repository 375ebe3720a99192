//! Domain model for module manifests.
//!
//! Data-holding entities with a `validate()` contract. Entities own their
//! fields by value, hold no shared or mutable internal state, and delegate
//! field checks to [`crate::validation::rules`].

mod dependency;
mod module;
mod version;

pub use dependency::{DependencyDirection, ModuleDependency};
pub use module::Module;
pub use version::ModuleVersion;
