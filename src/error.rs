//! Error types for manifest field validation.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers. A single failing field invalidates
//! the whole entity; validators return the first failure encountered.

use thiserror::Error;

/// Errors returned while validating manifest entities and their fields.
///
/// Every variant identifies the field that failed and the rule that was
/// violated. Collection entries (annotations, dependencies, replaced
/// versions) are wrapped with the offending key or index so the caller can
/// point at the exact manifest element.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A mandatory field is absent.
    #[error("{field} is required")]
    Required {
        /// The missing field.
        field: String,
    },

    /// The value is shorter than the configured minimum length.
    #[error("{field} must be at least {min} characters, found {actual}")]
    TooShort {
        /// The field holding the value.
        field: String,
        /// The minimum permitted length.
        min: i64,
        /// The actual length of the value.
        actual: i64,
    },

    /// The value is longer than the configured maximum length.
    #[error("{field} must be at most {max} characters, found {actual}")]
    TooLong {
        /// The field holding the value.
        field: String,
        /// The maximum permitted length.
        max: i64,
        /// The actual length of the value.
        actual: i64,
    },

    /// The value contains a character outside the permitted set.
    #[error("{field} contains invalid character {character:?}")]
    InvalidCharacter {
        /// The field holding the value.
        field: String,
        /// The first offending character.
        character: char,
    },

    /// The value begins with a character the field does not permit.
    #[error("{field} starts with invalid character {character:?}")]
    InvalidStart {
        /// The field holding the value.
        field: String,
        /// The offending leading character.
        character: char,
    },

    /// The value ends with a character the field does not permit.
    #[error("{field} ends with invalid character {character:?}")]
    InvalidEnd {
        /// The field holding the value.
        field: String,
        /// The offending trailing character.
        character: char,
    },

    /// The value is not one of the recognised enumeration members.
    #[error("{field} has unrecognised value {value:?}")]
    InvalidEnum {
        /// The field holding the value.
        field: String,
        /// The unrecognised value as written.
        value: String,
    },

    /// A length rule was configured with a negative bound.
    ///
    /// This is a caller configuration error, not a judgement on the value;
    /// it fails regardless of the value under validation.
    #[error("invalid length bounds: minimum {min}, maximum {max}")]
    InvalidBounds {
        /// The configured minimum length.
        min: i64,
        /// The configured maximum length.
        max: i64,
    },

    /// An annotation entry failed validation.
    #[error("invalid annotation {key:?}: {source}")]
    InvalidAnnotation {
        /// The key of the offending annotation.
        key: String,
        /// The underlying key or value failure.
        source: Box<Self>,
    },

    /// A dependency entry failed validation.
    #[error("invalid dependency at index {index}: {source}")]
    InvalidDependency {
        /// The position of the offending entry.
        index: usize,
        /// The underlying field failure.
        source: Box<Self>,
    },

    /// A replaced-version entry failed validation.
    #[error("invalid replaces entry at index {index}: {source}")]
    InvalidReplacedVersion {
        /// The position of the offending entry.
        index: usize,
        /// The underlying version-name failure.
        source: Box<Self>,
    },
}

impl ValidationError {
    /// Creates a missing-field error.
    #[must_use]
    pub fn required(field: impl Into<String>) -> Self {
        Self::Required {
            field: field.into(),
        }
    }

    /// Wraps a key or value failure with the offending annotation key.
    #[must_use]
    pub fn invalid_annotation(key: impl Into<String>, source: Self) -> Self {
        Self::InvalidAnnotation {
            key: key.into(),
            source: Box::new(source),
        }
    }

    /// Wraps a dependency entry failure with its position in the list.
    #[must_use]
    pub fn invalid_dependency(index: usize, source: Self) -> Self {
        Self::InvalidDependency {
            index,
            source: Box::new(source),
        }
    }

    /// Wraps a replaced-version entry failure with its position.
    #[must_use]
    pub fn invalid_replaced_version(index: usize, source: Self) -> Self {
        Self::InvalidReplacedVersion {
            index,
            source: Box::new(source),
        }
    }

    /// Returns the wrapped failure for collection-entry errors.
    ///
    /// Returns `None` for scalar field failures.
    #[must_use]
    pub fn entry_source(&self) -> Option<&Self> {
        match self {
            Self::InvalidAnnotation { source, .. }
            | Self::InvalidDependency { source, .. }
            | Self::InvalidReplacedVersion { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
