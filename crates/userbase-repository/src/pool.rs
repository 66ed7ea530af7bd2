//! Database connection pool management.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};
use userbase_config::DatabaseConfig;
use userbase_core::{UserbaseError, UserbaseResult};

/// Schema of the only table this service touches.
const CREATE_USER_TABLE: &str = "CREATE TABLE IF NOT EXISTS user (id INTEGER PRIMARY KEY, name TEXT)";

/// Database pool wrapper.
#[derive(Clone)]
pub struct DatabasePool {
    pool: SqlitePool,
}

impl DatabasePool {
    /// Creates a new database pool from configuration.
    pub async fn new(config: &DatabaseConfig) -> UserbaseResult<Self> {
        info!("Connecting to SQLite database...");

        let connect_options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| UserbaseError::Configuration(format!("Invalid database URL: {}", e)))?
            .create_if_missing(config.create_if_missing)
            .busy_timeout(config.busy_timeout());

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout());

        // An in-memory database lives only as long as its connection.
        if config.url.contains(":memory:") {
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                UserbaseError::Database(format!("Failed to connect: {}", e))
            })?;

        info!("Connected to database {}", config.url);
        Ok(Self { pool })
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub fn inner(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the `user` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> UserbaseResult<()> {
        sqlx::query(CREATE_USER_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| UserbaseError::Database(format!("Schema bootstrap failed: {}", e)))?;
        info!("User table ready");
        Ok(())
    }

    /// Checks if the database connection is healthy.
    pub async fn health_check(&self) -> UserbaseResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| UserbaseError::Database(format!("Health check failed: {}", e)))?;
        Ok(())
    }

    /// Closes the database pool.
    pub async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}

/// Creates a shared database pool, bootstrapping the schema when configured.
pub async fn create_pool(config: &DatabaseConfig) -> UserbaseResult<Arc<DatabasePool>> {
    let pool = DatabasePool::new(config).await?;
    if config.bootstrap_schema {
        pool.ensure_schema().await?;
    }
    Ok(Arc::new(pool))
}
