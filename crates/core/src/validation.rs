//! Field rules shared by create and patch payloads.
//!
//! Each check returns a `CoreError::Validation` naming the offending field so
//! the HTTP layer can report it verbatim.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Maximum length of an actor or movie name, in characters.
pub const MAX_NAME_LEN: usize = 120;
/// Maximum length of a movie genre, in characters.
pub const MAX_GENRE_LEN: usize = 60;
/// Oldest age accepted for an actor.
pub const MAX_AGE: i32 = 150;

/// `name` must contain something other than whitespace and fit the column.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("name must not be empty".into()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_age(age: i32) -> Result<(), CoreError> {
    if !(0..=MAX_AGE).contains(&age) {
        return Err(CoreError::Validation(format!(
            "age must be between 0 and {MAX_AGE}, got {age}"
        )));
    }
    Ok(())
}

pub fn validate_salary(salary: i64) -> Result<(), CoreError> {
    if salary < 0 {
        return Err(CoreError::Validation(format!(
            "salary must not be negative, got {salary}"
        )));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "email '{email}' is not a valid address"
        )));
    }
    Ok(())
}

/// Movie length is a running time in minutes.
pub fn validate_length(length: f64) -> Result<(), CoreError> {
    if !length.is_finite() || length <= 0.0 {
        return Err(CoreError::Validation(format!(
            "length must be a positive number of minutes, got {length}"
        )));
    }
    Ok(())
}

pub fn validate_genre(genre: &str) -> Result<(), CoreError> {
    if genre.chars().count() > MAX_GENRE_LEN {
        return Err(CoreError::Validation(format!(
            "genre must be at most {MAX_GENRE_LEN} characters"
        )));
    }
    Ok(())
}

/// Run `check` only when an optional value is set.
pub fn validate_optional<T: ?Sized>(
    value: Option<&T>,
    check: impl FnOnce(&T) -> Result<(), CoreError>,
) -> Result<(), CoreError> {
    value.map_or(Ok(()), check)
}
