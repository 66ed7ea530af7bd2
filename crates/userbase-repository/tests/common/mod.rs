//! Common test infrastructure for database integration tests.

use std::sync::Arc;
use userbase_config::DatabaseConfig;
use userbase_repository::{create_pool, DatabasePool};

/// Test database wrapper.
///
/// Each instance owns a private in-memory SQLite database with the `user`
/// table already created.
pub struct TestDatabase {
    pool: Arc<DatabasePool>,
    _dir: Option<tempfile::TempDir>,
}

impl TestDatabase {
    /// Creates a new, empty test database.
    pub async fn new() -> Self {
        let pool = create_pool(&DatabaseConfig::in_memory())
            .await
            .expect("Failed to create in-memory database");

        Self { pool, _dir: None }
    }

    /// Creates an empty file-backed database served by several connections.
    pub async fn file_backed(max_connections: u32) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("users.db").display()),
            max_connections,
            ..DatabaseConfig::default()
        };
        let pool = create_pool(&config)
            .await
            .expect("Failed to create file-backed database");

        Self {
            pool,
            _dir: Some(dir),
        }
    }

    /// Returns a reference to the database pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }

    /// Counts rows with the given id, bypassing the repository.
    pub async fn count_rows(&self, id: i64) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM user WHERE id = ?")
            .bind(id)
            .fetch_one(self.pool.inner())
            .await
            .expect("Count query failed")
    }
}
