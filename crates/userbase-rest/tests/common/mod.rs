//! Shared harness for router tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use userbase_config::{DatabaseConfig, ServerConfig};
use userbase_repository::{create_pool, DatabasePool, SqliteUserRepository, UserRepository};
use userbase_rest::{create_router, AppState};
use userbase_service::UserServiceImpl;

/// Router wired to a private in-memory database.
pub struct TestApp {
    pub router: Router,
    pub pool: Arc<DatabasePool>,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = create_pool(&DatabaseConfig::in_memory())
            .await
            .expect("Failed to create in-memory database");
        let repository: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(Arc::clone(&pool)));

        Self::with_repository(repository, pool, Duration::from_secs(5))
    }

    pub fn with_repository(
        repository: Arc<dyn UserRepository>,
        pool: Arc<DatabasePool>,
        query_timeout: Duration,
    ) -> Self {
        let service = Arc::new(UserServiceImpl::new(repository, query_timeout));
        let state = AppState::new(service, Arc::clone(&pool));
        let router = create_router(state, &ServerConfig::default());

        Self { router, pool }
    }

    /// Sends one request and returns status plus raw body.
    pub async fn send(&self, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header("content-type", "application/json");
        }
        let request = builder
            .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        (status, bytes.to_vec())
    }

    /// Sends one request and parses the body as JSON.
    pub async fn send_json(&self, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let (status, bytes) = self.send(method, uri, body).await;
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    pub async fn create(&self, id: i64, name: &str) {
        let body = serde_json::json!({ "name": name }).to_string();
        let (status, _) = self.send("POST", &format!("/api/v1/users/{id}"), Some(&body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }
}
