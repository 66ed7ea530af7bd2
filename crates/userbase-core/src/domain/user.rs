//! User entity.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// A persisted user record.
///
/// Serializes to exactly the columns of the `user` table: `{ "id": .., "name": .. }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Caller-supplied primary key.
    pub id: UserId,

    /// Display name.
    pub name: String,
}

impl User {
    /// Creates a new user.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
