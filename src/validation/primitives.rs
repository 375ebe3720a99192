//! Shared length and character-class primitives.
//!
//! Each primitive is a pure, stateless predicate over plain ASCII text.
//! Rules return `Ok(())` on success or a specific [`ValidationError`] on
//! failure. An empty value always satisfies the character-class rules;
//! absence is the length rule's concern.

use crate::error::ValidationError;

const fn is_lowercase_alphanumeric(character: char) -> bool {
    character.is_ascii_lowercase() || character.is_ascii_digit()
}

const fn is_lowercase_alphanumeric_dash_dot(character: char) -> bool {
    is_lowercase_alphanumeric(character) || character == '-' || character == '.'
}

/// Validates that the value's length falls within `[min_len, max_len]`.
///
/// Bounds are signed so that a misconfigured negative bound is expressible:
/// it fails with [`ValidationError::InvalidBounds`] regardless of the value.
///
/// # Errors
///
/// Returns `InvalidBounds` if either bound is negative, `TooShort` if the
/// value has fewer than `min_len` characters, or `TooLong` if it has more
/// than `max_len`.
///
/// # Examples
///
/// ```
/// use modspec::validation::primitives::must_have_min_max_length;
///
/// assert!(must_have_min_max_length("name", "abc", 1, 63).is_ok());
/// assert!(must_have_min_max_length("name", "", 1, 63).is_err());
/// ```
pub fn must_have_min_max_length(
    field: &str,
    value: &str,
    min_len: i64,
    max_len: i64,
) -> Result<(), ValidationError> {
    if min_len < 0 || max_len < 0 {
        return Err(ValidationError::InvalidBounds {
            min: min_len,
            max: max_len,
        });
    }

    let actual = i64::try_from(value.chars().count()).unwrap_or(i64::MAX);
    if actual < min_len {
        return Err(ValidationError::TooShort {
            field: field.to_owned(),
            min: min_len,
            actual,
        });
    }
    if actual > max_len {
        return Err(ValidationError::TooLong {
            field: field.to_owned(),
            max: max_len,
            actual,
        });
    }

    Ok(())
}

/// Validates that every character is in `[a-z0-9.-]`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidCharacter`] naming the first character
/// outside the permitted set.
pub fn must_be_lowercase_alphanumeric_dash_dot(
    field: &str,
    value: &str,
) -> Result<(), ValidationError> {
    value
        .chars()
        .find(|character| !is_lowercase_alphanumeric_dash_dot(*character))
        .map_or(Ok(()), |character| {
            Err(ValidationError::InvalidCharacter {
                field: field.to_owned(),
                character,
            })
        })
}

/// Validates that the first character is in `[a-z]`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidStart`] if the value begins with a
/// digit, an uppercase letter, a separator, or any other character.
pub fn must_start_with_lowercase_alphabetic(
    field: &str,
    value: &str,
) -> Result<(), ValidationError> {
    value
        .chars()
        .next()
        .filter(|character| !character.is_ascii_lowercase())
        .map_or(Ok(()), |character| {
            Err(ValidationError::InvalidStart {
                field: field.to_owned(),
                character,
            })
        })
}

/// Validates that the first character is in `[a-z0-9]`.
///
/// Used where a leading digit is semantically valid, such as version names
/// that may be bare dates.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidStart`] if the value begins with a
/// character outside `[a-z0-9]`.
pub fn must_start_with_lowercase_alphanumeric(
    field: &str,
    value: &str,
) -> Result<(), ValidationError> {
    value
        .chars()
        .next()
        .filter(|character| !is_lowercase_alphanumeric(*character))
        .map_or(Ok(()), |character| {
            Err(ValidationError::InvalidStart {
                field: field.to_owned(),
                character,
            })
        })
}

/// Validates that the last character is in `[a-z0-9]`.
///
/// Separators are not allowed as terminators: a trailing dash or dot fails.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidEnd`] if the value ends with a
/// character outside `[a-z0-9]`.
pub fn must_end_with_lowercase_alphanumeric(
    field: &str,
    value: &str,
) -> Result<(), ValidationError> {
    value
        .chars()
        .next_back()
        .filter(|character| !is_lowercase_alphanumeric(*character))
        .map_or(Ok(()), |character| {
            Err(ValidationError::InvalidEnd {
                field: field.to_owned(),
                character,
            })
        })
}
