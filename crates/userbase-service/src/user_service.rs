//! User service trait definition.

use crate::dto::{MessageResponse, UserRequest, UserResponse};
use async_trait::async_trait;
use userbase_core::{UserId, UserbaseResult};

/// User record service.
///
/// Every operation is one stateless round trip to the store. Invalid input
/// fails before any store call is made.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Gets a user by ID. A missing user is `UserbaseError::NotFound`.
    async fn get_user(&self, id: UserId) -> UserbaseResult<UserResponse>;

    /// Lists every user. An empty store yields an empty list.
    async fn list_users(&self) -> UserbaseResult<Vec<UserResponse>>;

    /// Creates a user with a caller-supplied id.
    async fn create_user(&self, id: UserId, request: UserRequest) -> UserbaseResult<MessageResponse>;

    /// Renames an existing user.
    async fn update_user(&self, id: UserId, request: UserRequest) -> UserbaseResult<MessageResponse>;

    /// Deletes an existing user.
    async fn delete_user(&self, id: UserId) -> UserbaseResult<MessageResponse>;
}
