//! SQLite user repository implementation.

use crate::{traits::UserRepository, DatabasePool};
use async_trait::async_trait;
use sqlx::{FromRow, SqliteConnection};
use std::sync::Arc;
use tracing::{debug, warn};
use userbase_core::{User, UserId, UserbaseError, UserbaseResult};

/// SQLite user repository implementation.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: Arc<DatabasePool>,
}

impl SqliteUserRepository {
    /// Creates a new SQLite user repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        // The column is nullable; rows written outside this service may lack a name.
        User::new(UserId(row.id), row.name.unwrap_or_default())
    }
}

/// Takes the write lock up front so concurrent probe-then-mutate pairs
/// queue on the busy timeout instead of failing the lock upgrade.
const BEGIN_IMMEDIATE: &str = "BEGIN IMMEDIATE";

/// Existence probe run on the connection that will perform the mutation.
async fn probe(conn: &mut SqliteConnection, id: UserId) -> UserbaseResult<Option<User>> {
    let row = sqlx::query_as::<_, UserRow>("SELECT id, name FROM user WHERE id = ?")
        .bind(id.into_inner())
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            warn!("Existence probe failed for user {}: {}", id, e);
            UserbaseError::from(e)
        })?;

    Ok(row.map(User::from))
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_id(&self, id: UserId) -> UserbaseResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>("SELECT id, name FROM user WHERE id = ?")
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row.map(User::from))
    }

    async fn find_all(&self) -> UserbaseResult<Vec<User>> {
        debug!("Finding all users");

        let rows = sqlx::query_as::<_, UserRow>("SELECT id, name FROM user ORDER BY id")
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn insert(&self, user: &User) -> UserbaseResult<()> {
        debug!("Inserting user: {}", user.id);

        sqlx::query("INSERT INTO user (id, name) VALUES (?, ?)")
            .bind(user.id.into_inner())
            .bind(&user.name)
            .execute(self.pool.inner())
            .await?;

        Ok(())
    }

    async fn update_name(&self, id: UserId, name: &str) -> UserbaseResult<bool> {
        debug!("Updating user: {}", id);

        let mut tx = self.pool.inner().begin_with(BEGIN_IMMEDIATE).await?;

        if probe(&mut *tx, id).await?.is_none() {
            tx.rollback().await?;
            return Ok(false);
        }

        let result = sqlx::query("UPDATE user SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: UserId) -> UserbaseResult<bool> {
        debug!("Deleting user: {}", id);

        let mut tx = self.pool.inner().begin_with(BEGIN_IMMEDIATE).await?;

        if probe(&mut *tx, id).await?.is_none() {
            tx.rollback().await?;
            return Ok(false);
        }

        let result = sqlx::query("DELETE FROM user WHERE id = ?")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for SqliteUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteUserRepository").finish_non_exhaustive()
    }
}
