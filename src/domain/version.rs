//! The version entity of a module manifest.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::rules;

/// A declared module version.
///
/// The name accepts semantic-version-like forms (`1.0.0`, `v1.0.0-abc`)
/// and date-like forms (`20210830`, `2021-08-30`, `2021.08.30`) through a
/// single permissive rule. The optional schema reference follows the
/// stricter identifier rule and must start with a letter.
///
/// # Examples
///
/// ```
/// use modspec::domain::ModuleVersion;
///
/// let version = ModuleVersion::new("v1.1.0")
///     .with_schema("my-version-schema")
///     .with_replaces(vec!["v1.0.0".to_owned()]);
/// assert!(version.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleVersion {
    /// The version name.
    pub name: String,
    /// Optional reference to the version schema the name follows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Version names this version supersedes. Optional; empty means none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replaces: Vec<String>,
}

impl ModuleVersion {
    /// Creates a version with the given name and no schema or replaces.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
            replaces: Vec::new(),
        }
    }

    /// Sets the version schema reference.
    #[must_use]
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Sets the list of superseded version names.
    #[must_use]
    pub fn with_replaces(mut self, replaces: Vec<String>) -> Self {
        self.replaces = replaces;
        self
    }

    /// Validates the version's fields in a fixed order: name, schema,
    /// replaces entries. Pure and idempotent.
    ///
    /// # Errors
    ///
    /// Returns the first field violation encountered.
    pub fn validate(&self) -> Result<(), ValidationError> {
        rules::validate_version_name(&self.name)?;
        if let Some(schema) = self.schema.as_deref() {
            rules::validate_version_schema(schema)?;
        }
        rules::validate_replaced_versions(&self.replaces)?;
        Ok(())
    }
}
