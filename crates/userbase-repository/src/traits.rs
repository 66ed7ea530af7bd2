//! Repository trait definitions.

use async_trait::async_trait;
use userbase_core::{User, UserId, UserbaseResult};

/// User repository trait.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> UserbaseResult<Option<User>>;

    /// Returns every user, ordered by id.
    async fn find_all(&self) -> UserbaseResult<Vec<User>>;

    /// Inserts a new user. A duplicate id fails with a constraint error.
    async fn insert(&self, user: &User) -> UserbaseResult<()>;

    /// Probes for the user, then renames it.
    ///
    /// Returns `false` when no row with `id` exists.
    async fn update_name(&self, id: UserId, name: &str) -> UserbaseResult<bool>;

    /// Probes for the user, then deletes it.
    ///
    /// Returns `false` when no row with `id` exists.
    async fn delete(&self, id: UserId) -> UserbaseResult<bool>;
}
