//! Dependency entries and the dependency direction enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::rules;

/// Whether a related module is consumed by this module or depends on it.
///
/// Serialises with the wire names `UPSTREAM` and `DOWNSTREAM`. Absence is
/// modelled as `Option::None` on [`ModuleDependency`] and fails validation
/// as a missing field; an unrecognised string is a distinct failure,
/// surfaced by [`FromStr`] as [`ValidationError::InvalidEnum`].
///
/// # Examples
///
/// ```
/// use modspec::domain::DependencyDirection;
///
/// let direction: DependencyDirection = "UPSTREAM".parse().expect("recognised direction");
/// assert_eq!(direction, DependencyDirection::Upstream);
/// assert!("SIDEWAYS".parse::<DependencyDirection>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DependencyDirection {
    /// The related module is consumed by this module.
    Upstream,
    /// The related module depends on this module.
    Downstream,
}

impl DependencyDirection {
    /// Returns the canonical wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upstream => "UPSTREAM",
            Self::Downstream => "DOWNSTREAM",
        }
    }
}

impl fmt::Display for DependencyDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DependencyDirection {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "UPSTREAM" => Ok(Self::Upstream),
            "DOWNSTREAM" => Ok(Self::Downstream),
            other => Err(ValidationError::InvalidEnum {
                field: "direction".to_owned(),
                value: other.to_owned(),
            }),
        }
    }
}

impl TryFrom<&str> for DependencyDirection {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A declared relationship to another module.
///
/// The identity fields follow the same rules as the owning [`Module`]'s;
/// the version follows the version-name rule, so both semantic-version and
/// date-like forms are accepted.
///
/// [`Module`]: super::Module
///
/// # Examples
///
/// ```
/// use modspec::domain::{DependencyDirection, ModuleDependency};
///
/// let dependency = ModuleDependency::new(
///     "com.example",
///     "product",
///     "library",
///     "v1.0.0",
///     DependencyDirection::Upstream,
/// );
/// assert!(dependency.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDependency {
    /// The organisational prefix scoping the related module's name.
    pub namespace: String,
    /// The related module's name.
    pub name: String,
    /// The related module's type.
    #[serde(rename = "type")]
    pub module_type: String,
    /// The related module's version name.
    pub version: String,
    /// The direction of the relationship. Required for a valid entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<DependencyDirection>,
}

impl ModuleDependency {
    /// Creates a dependency entry with all required fields set.
    #[must_use]
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        module_type: impl Into<String>,
        version: impl Into<String>,
        direction: DependencyDirection,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            module_type: module_type.into(),
            version: version.into(),
            direction: Some(direction),
        }
    }

    /// Validates the entry's fields in a fixed order: namespace, name,
    /// type, version, direction. Pure and idempotent.
    ///
    /// # Errors
    ///
    /// Returns the first field violation encountered.
    pub fn validate(&self) -> Result<(), ValidationError> {
        rules::validate_module_namespace(&self.namespace)?;
        rules::validate_module_name(&self.name)?;
        rules::validate_module_type(&self.module_type)?;
        rules::validate_version_name(&self.version)?;
        rules::validate_dependency_direction(self.direction)?;
        Ok(())
    }
}
