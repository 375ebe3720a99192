//! Field-level validators for manifest entities.
//!
//! Each identifier-shaped field is validated by a fixed pipeline of the
//! shared primitives: length, then character set, then start character,
//! then end character. The pipelines are expressed as [`IdentifierRules`]
//! values so per-field behaviour stays data, not inheritance.

use std::collections::BTreeMap;

use crate::domain::{DependencyDirection, ModuleDependency, ModuleVersion};
use crate::error::ValidationError;
use crate::validation::primitives;

/// Minimum length of every identifier-shaped field.
pub const IDENTIFIER_MIN_LENGTH: i64 = 1;

/// Maximum length of every identifier-shaped field.
pub const IDENTIFIER_MAX_LENGTH: i64 = 63;

/// Maximum length of an annotation value. Values have no minimum length
/// and no character-set restriction.
pub const ANNOTATION_VALUE_MAX_LENGTH: i64 = 253;

/// Which characters a field may begin with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartRule {
    /// The first character must be in `[a-z]`.
    LowercaseAlphabetic,
    /// The first character must be in `[a-z0-9]`.
    LowercaseAlphanumeric,
}

/// A fixed validation pipeline for an identifier-shaped field.
///
/// Runs length, character-set, start, and (optionally) end checks in that
/// order, returning the first failure. The two shipped pipelines,
/// [`IdentifierRules::IDENTIFIER`] and [`IdentifierRules::VERSION_NAME`],
/// differ only in their start rule.
///
/// # Examples
///
/// ```
/// use modspec::validation::rules::IdentifierRules;
///
/// assert!(IdentifierRules::IDENTIFIER.apply("name", "my-module").is_ok());
/// assert!(IdentifierRules::VERSION_NAME.apply("version name", "2021-08-30").is_ok());
/// assert!(IdentifierRules::IDENTIFIER.apply("name", "2021-08-30").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierRules {
    /// Minimum permitted length.
    pub min_length: i64,
    /// Maximum permitted length.
    pub max_length: i64,
    /// The start-character rule.
    pub start: StartRule,
    /// Whether the final character must be in `[a-z0-9]`.
    pub require_alphanumeric_end: bool,
}

impl IdentifierRules {
    /// Pipeline for namespaces, names, types, version schemas, and
    /// annotation keys: must start with a lowercase letter.
    pub const IDENTIFIER: Self = Self {
        min_length: IDENTIFIER_MIN_LENGTH,
        max_length: IDENTIFIER_MAX_LENGTH,
        start: StartRule::LowercaseAlphabetic,
        require_alphanumeric_end: true,
    };

    /// Pipeline for version names and dependency versions: may start with
    /// a letter or a digit, which admits semantic-version-like forms
    /// (`1.0.0`, `v1.0.0-abc`) and date-like forms (`2021-08-30`) alike.
    pub const VERSION_NAME: Self = Self {
        min_length: IDENTIFIER_MIN_LENGTH,
        max_length: IDENTIFIER_MAX_LENGTH,
        start: StartRule::LowercaseAlphanumeric,
        require_alphanumeric_end: true,
    };

    /// Runs the pipeline against `value`, reporting failures under `field`.
    ///
    /// # Errors
    ///
    /// Returns the first rule violation: a length failure, then
    /// `InvalidCharacter`, then `InvalidStart`, then `InvalidEnd`.
    pub fn apply(self, field: &str, value: &str) -> Result<(), ValidationError> {
        primitives::must_have_min_max_length(field, value, self.min_length, self.max_length)?;
        primitives::must_be_lowercase_alphanumeric_dash_dot(field, value)?;
        match self.start {
            StartRule::LowercaseAlphabetic => {
                primitives::must_start_with_lowercase_alphabetic(field, value)?;
            }
            StartRule::LowercaseAlphanumeric => {
                primitives::must_start_with_lowercase_alphanumeric(field, value)?;
            }
        }
        if self.require_alphanumeric_end {
            primitives::must_end_with_lowercase_alphanumeric(field, value)?;
        }
        Ok(())
    }
}

/// Validates a module namespace.
///
/// # Errors
///
/// Returns the first [`IdentifierRules::IDENTIFIER`] violation.
pub fn validate_module_namespace(namespace: &str) -> Result<(), ValidationError> {
    IdentifierRules::IDENTIFIER.apply("namespace", namespace)
}

/// Validates a module name.
///
/// # Errors
///
/// Returns the first [`IdentifierRules::IDENTIFIER`] violation.
pub fn validate_module_name(name: &str) -> Result<(), ValidationError> {
    IdentifierRules::IDENTIFIER.apply("name", name)
}

/// Validates a module type.
///
/// # Errors
///
/// Returns the first [`IdentifierRules::IDENTIFIER`] violation.
pub fn validate_module_type(module_type: &str) -> Result<(), ValidationError> {
    IdentifierRules::IDENTIFIER.apply("type", module_type)
}

/// Validates the presence and content of a module's version.
///
/// # Errors
///
/// Returns `Required` when the version is absent, otherwise any failure
/// from [`ModuleVersion::validate`].
pub fn validate_module_version(version: Option<&ModuleVersion>) -> Result<(), ValidationError> {
    version.map_or_else(
        || Err(ValidationError::required("version")),
        ModuleVersion::validate,
    )
}

/// Validates a version name.
///
/// Accepts plain semantic versions (`1.0.0`), prerelease forms
/// (`1.0.0-abc`), `v`-prefixed forms (`v1.0.0`), and bare or separated
/// dates (`20210830`, `2021-08-30`, `2021.08.30`). The generality comes
/// from the permissive character set and relaxed start rule; there is no
/// date-specific logic.
///
/// # Errors
///
/// Returns the first [`IdentifierRules::VERSION_NAME`] violation.
pub fn validate_version_name(name: &str) -> Result<(), ValidationError> {
    IdentifierRules::VERSION_NAME.apply("version name", name)
}

/// Validates a version schema reference.
///
/// # Errors
///
/// Returns the first [`IdentifierRules::IDENTIFIER`] violation.
pub fn validate_version_schema(schema: &str) -> Result<(), ValidationError> {
    IdentifierRules::IDENTIFIER.apply("version schema", schema)
}

/// Validates every entry of a version's replaces list.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidReplacedVersion`] wrapping the first
/// failing entry's version-name violation.
pub fn validate_replaced_versions(replaces: &[String]) -> Result<(), ValidationError> {
    for (index, name) in replaces.iter().enumerate() {
        validate_version_name(name)
            .map_err(|source| ValidationError::invalid_replaced_version(index, source))?;
    }
    Ok(())
}

/// Validates a module's annotations. An empty mapping succeeds.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidAnnotation`] wrapping the first
/// failing key or value violation, tagged with the offending key.
pub fn validate_module_annotations(
    annotations: &BTreeMap<String, String>,
) -> Result<(), ValidationError> {
    for (key, value) in annotations {
        validate_annotation_key(key)
            .map_err(|source| ValidationError::invalid_annotation(key, source))?;
        validate_annotation_value(value)
            .map_err(|source| ValidationError::invalid_annotation(key, source))?;
    }
    Ok(())
}

/// Validates an annotation key.
///
/// Dot-separated namespaced keys such as `com.example.key` are valid: dots
/// are already part of the identifier character set.
///
/// # Errors
///
/// Returns the first [`IdentifierRules::IDENTIFIER`] violation.
pub fn validate_annotation_key(key: &str) -> Result<(), ValidationError> {
    IdentifierRules::IDENTIFIER.apply("annotation key", key)
}

/// Validates an annotation value: at most
/// [`ANNOTATION_VALUE_MAX_LENGTH`] characters, no character-set
/// restriction, empty allowed.
///
/// # Errors
///
/// Returns `TooLong` when the value exceeds the maximum length.
pub fn validate_annotation_value(value: &str) -> Result<(), ValidationError> {
    primitives::must_have_min_max_length("annotation value", value, 0, ANNOTATION_VALUE_MAX_LENGTH)
}

/// Validates a module's dependency list. An empty list succeeds.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDependency`] wrapping the first
/// failing entry's violation, tagged with the entry's position.
pub fn validate_module_dependencies(
    dependencies: &[ModuleDependency],
) -> Result<(), ValidationError> {
    for (index, dependency) in dependencies.iter().enumerate() {
        dependency
            .validate()
            .map_err(|source| ValidationError::invalid_dependency(index, source))?;
    }
    Ok(())
}

/// Validates that a dependency's direction is present.
///
/// Absence and an unrecognised value are distinct outcomes: an absent
/// direction fails here with `Required`, while an unrecognised string is
/// rejected as `InvalidEnum` when parsed via
/// [`DependencyDirection::from_str`](std::str::FromStr).
///
/// # Errors
///
/// Returns `Required` when the direction is `None`.
pub fn validate_dependency_direction(
    direction: Option<DependencyDirection>,
) -> Result<(), ValidationError> {
    direction.map_or_else(|| Err(ValidationError::required("direction")), |_| Ok(()))
}
