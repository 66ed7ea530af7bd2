//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Message returned for any request whose id or body fails the presence checks.
pub const INCORRECT_PARAMETERS: &str = "Incorrect Parameters";

/// Message returned when the target of a read, update or delete is missing.
pub const USER_DOES_NOT_EXIST: &str = "User Does Not Exist";

/// Message returned in place of store faults that are not the caller's doing.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Unified error type for all layers of Userbase.
///
/// Caller-input problems (`Validation`, `Constraint`) map to 400, a missing
/// target to 404, and every other store or runtime fault to 5xx.
#[derive(Error, Debug)]
pub enum UserbaseError {
    // ============ Caller Errors ============
    /// Missing or malformed request parameters.
    #[error("{0}")]
    Validation(String),

    /// No user row with the given id.
    #[error("User Does Not Exist")]
    NotFound { id: i64 },

    /// The store rejected a write because of a constraint (duplicate id, NOT NULL).
    #[error("{0}")]
    Constraint(String),

    // ============ Infrastructure Errors ============
    /// Any other failure raised by the store.
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A store call exceeded its time budget.
    #[error("Operation timed out: {0}")]
    Timeout(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UserbaseError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::Constraint(_) => 400,
            Self::NotFound { .. } => 404,
            Self::Timeout(_) => 503,
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code, used in logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Constraint(_) => "CONSTRAINT_VIOLATION",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the message that may be shown to the client.
    ///
    /// Constraint violations carry the store's own text; store faults and
    /// internal errors are replaced by a generic message.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(_) | Self::NotFound { .. } | Self::Constraint(_) | Self::Timeout(_) => {
                self.to_string()
            }
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => {
                INTERNAL_SERVER_ERROR.to_string()
            }
        }
    }

    /// Creates a not found error for a user id.
    #[must_use]
    pub const fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }

    /// Creates the standard validation error.
    #[must_use]
    pub fn incorrect_parameters() -> Self {
        Self::Validation(INCORRECT_PARAMETERS.to_string())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error was caused by the caller's input.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for UserbaseError {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;

        match &err {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => Self::Constraint(db_err.message().to_string()),
                _ => Self::Database(err.to_string()),
            },
            _ => Self::Database(err.to_string()),
        }
    }
}

/// Error body returned by the HTTP boundary: `{ "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new error response with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// Creates a new error response from a `UserbaseError`.
    #[must_use]
    pub fn from_error(error: &UserbaseError) -> Self {
        Self::new(error.public_message())
    }
}
