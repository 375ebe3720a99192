//! Modspec: structural validation for module-manifest identities.
//!
//! This crate decides whether a declared module identity (namespace, name,
//! type, version, annotations, dependencies) is well-formed before a
//! manifest is accepted by downstream tooling such as registries,
//! dependency resolvers, and build systems. Manifest parsing, persistence,
//! and transport are external collaborators that construct the entities
//! and call `validate()`.
//!
//! # Architecture
//!
//! Two pure, synchronous layers:
//!
//! - **Domain**: data-holding entities ([`domain::Module`],
//!   [`domain::ModuleVersion`], [`domain::ModuleDependency`]) with a
//!   `validate()` contract and no infrastructure dependencies.
//! - **Validation**: composable field rules ([`validation::rules`]) built
//!   on shared length and character-class primitives
//!   ([`validation::primitives`]).
//!
//! # Example
//!
//! ```
//! use modspec::domain::{DependencyDirection, Module, ModuleDependency, ModuleVersion};
//!
//! let module = Module::new(
//!     "com.example",
//!     "product",
//!     "library",
//!     ModuleVersion::new("v1.0.0"),
//! )
//! .with_annotation("com.example.team", "platform")
//! .with_dependency(ModuleDependency::new(
//!     "com.example",
//!     "runtime",
//!     "library",
//!     "2021-08-30",
//!     DependencyDirection::Upstream,
//! ));
//!
//! module.validate().expect("well-formed module identity");
//! ```

pub mod domain;
pub mod error;
pub mod validation;

#[cfg(test)]
mod tests;
