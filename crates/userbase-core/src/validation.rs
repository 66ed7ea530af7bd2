//! Validation utilities.

use crate::UserbaseError;
use tracing::debug;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns an `UserbaseError` on failure.
    ///
    /// Field details are logged; the client only ever sees the fixed
    /// "Incorrect Parameters" message.
    fn validate_request(&self) -> Result<(), UserbaseError> {
        self.validate().map_err(|e| {
            debug!("Request validation failed: {}", describe_validation_errors(&e));
            UserbaseError::incorrect_parameters()
        })
    }
}

impl<T: Validate> ValidateExt for T {}

/// Renders `validator::ValidationErrors` as `field: code` pairs.
#[must_use]
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                format!("{}: {}", field, message)
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
