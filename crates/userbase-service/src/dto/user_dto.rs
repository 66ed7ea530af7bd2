//! User-related DTOs.

use serde::{Deserialize, Serialize};
use userbase_core::{User, UserId};
use utoipa::ToSchema;
use validator::Validate;

/// Confirmation message for a successful create.
pub const USER_CREATED: &str = "User Successfully Created";
/// Confirmation message for a successful update.
pub const USER_UPDATED: &str = "User Successfully Updated";
/// Confirmation message for a successful delete.
pub const USER_DELETED: &str = "User Successfully Deleted";

/// Body of a create or update request.
///
/// `name` is optional at the type level so that a missing field reaches
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
}

impl UserRequest {
    /// Creates a request carrying the given name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// User response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}

/// Generic message response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
