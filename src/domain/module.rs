//! The top-level module entity of a manifest.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::rules;

use super::{ModuleDependency, ModuleVersion};

/// A named, versioned, typed unit declared by a module manifest.
///
/// Entities are constructed by an external manifest decoder (or in code via
/// [`Module::new`]) and validated once before use. All fields are public
/// and owned by value; [`Module::validate`] is a pure, repeatable read with
/// no side effects, so a validated entity should be treated as immutable
/// thereafter.
///
/// Annotations use a `BTreeMap` so validation order, and therefore the
/// first reported failure, is deterministic.
///
/// # Examples
///
/// ```
/// use modspec::domain::{Module, ModuleVersion};
///
/// let module = Module::new(
///     "com.example",
///     "product",
///     "library",
///     ModuleVersion::new("v1.0.0"),
/// );
/// assert!(module.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// The organisational prefix scoping the module's name.
    pub namespace: String,
    /// The module's name within its namespace.
    pub name: String,
    /// The module's type.
    #[serde(rename = "type")]
    pub module_type: String,
    /// The declared version. Required for a valid module.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<ModuleVersion>,
    /// Free-form key/value metadata. Optional; empty means none.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    /// Declared relationships to other modules. Optional; empty means none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<ModuleDependency>,
}

impl Module {
    /// Creates a module with the required identity fields and version.
    #[must_use]
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        module_type: impl Into<String>,
        version: ModuleVersion,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            module_type: module_type.into(),
            version: Some(version),
            annotations: BTreeMap::new(),
            dependencies: Vec::new(),
        }
    }

    /// Attaches an annotation.
    #[must_use]
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }

    /// Appends a dependency entry.
    #[must_use]
    pub fn with_dependency(mut self, dependency: ModuleDependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    /// Validates the module's fields in a fixed order: namespace, name,
    /// type, version, annotations, dependencies. Pure and idempotent; a
    /// single failing field invalidates the whole entity.
    ///
    /// # Errors
    ///
    /// Returns the first field violation encountered.
    pub fn validate(&self) -> Result<(), ValidationError> {
        rules::validate_module_namespace(&self.namespace)?;
        rules::validate_module_name(&self.name)?;
        rules::validate_module_type(&self.module_type)?;
        rules::validate_module_version(self.version.as_ref())?;
        rules::validate_module_annotations(&self.annotations)?;
        rules::validate_module_dependencies(&self.dependencies)?;
        Ok(())
    }
}
