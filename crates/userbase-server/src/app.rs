//! Application builder.

use crate::startup::{print_startup_info, shutdown_signal};
use axum::Router;
use std::sync::Arc;
use tracing::info;
use userbase_config::AppConfig;
use userbase_core::{UserbaseError, UserbaseResult};
use userbase_repository::{create_pool, DatabasePool, SqliteUserRepository, UserRepository};
use userbase_rest::{create_router, AppState};
use userbase_service::{UserService, UserServiceImpl};

/// Application builder for constructing the server.
pub struct AppBuilder {
    config: Option<AppConfig>,
}

impl AppBuilder {
    /// Creates a new application builder.
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Connects to the store and wires every layer together.
    pub async fn build(self) -> UserbaseResult<Application> {
        let config = self.config.unwrap_or_default();

        let db_pool = create_pool(&config.database).await?;

        let user_repository: Arc<dyn UserRepository> =
            Arc::new(SqliteUserRepository::new(Arc::clone(&db_pool)));
        let user_service: Arc<dyn UserService> =
            Arc::new(UserServiceImpl::from_config(user_repository, &config.database));

        let state = AppState::new(user_service, Arc::clone(&db_pool));
        let router = create_router(state, &config.server);

        Ok(Application {
            config,
            router,
            db_pool,
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully wired application, ready to serve.
pub struct Application {
    config: AppConfig,
    router: Router,
    db_pool: Arc<DatabasePool>,
}

impl Application {
    /// Returns the HTTP router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Returns the database pool.
    pub fn db_pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.db_pool)
    }

    /// Serves HTTP until a shutdown signal is received, then closes the pool.
    pub async fn run(self) -> UserbaseResult<()> {
        let addr = self.config.server.addr();
        info!("Starting REST server on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| UserbaseError::Internal(format!("Failed to bind REST: {}", e)))?;

        print_startup_info(&addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| UserbaseError::Internal(format!("REST server error: {}", e)))?;

        self.db_pool.close().await;
        info!("Server shutdown complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;
    use userbase_config::DatabaseConfig;

    fn in_memory_config() -> AppConfig {
        AppConfig {
            database: DatabaseConfig::in_memory(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_app_builder_new() {
        let builder = AppBuilder::new();
        assert!(builder.config.is_none());
    }

    #[test]
    fn test_app_builder_with_config() {
        let builder = AppBuilder::new().with_config(in_memory_config());
        assert!(builder.config.is_some());
    }

    #[tokio::test]
    async fn test_built_app_answers_requests() {
        let app = AppBuilder::new().with_config(in_memory_config()).build().await.unwrap();

        let request = Request::builder().uri("/api/v1/users").body(Body::empty()).unwrap();
        let response = app.router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let request = Request::builder().uri("/ready").body(Body::empty()).unwrap();
        let response = app.router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_build_fails_on_unreachable_store() {
        let mut config = in_memory_config();
        config.database = DatabaseConfig {
            url: "sqlite:///nonexistent-dir/users.db".to_string(),
            create_if_missing: false,
            connect_timeout_secs: 1,
            ..DatabaseConfig::default()
        };

        assert!(AppBuilder::new().with_config(config).build().await.is_err());
    }
}
