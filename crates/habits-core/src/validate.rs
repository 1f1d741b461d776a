//! Input validation for user-supplied fields.

use crate::CoreError;
use crate::error::Result;

use std::panic::Location;

use error_location::ErrorLocation;

pub const MAX_NAME_LENGTH: usize = 100;

/// Validate and normalize a habit name.
///
/// Surrounding whitespace is stripped before the length checks, so a blank
/// string and a whitespace-only string fail the same way. Returns the
/// trimmed name.
pub fn validate_habit_name(name: &str) -> Result<String> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(CoreError::Validation {
            message: "name must not be empty".to_string(),
            field: Some("name".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation {
            message: format!("name must be at most {} characters", MAX_NAME_LENGTH),
            field: Some("name".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(trimmed.to_string())
}
