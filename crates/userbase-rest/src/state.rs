//! Application state for Axum handlers.

use std::sync::Arc;
use userbase_repository::DatabasePool;
use userbase_service::UserService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub db_pool: Arc<DatabasePool>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(user_service: Arc<dyn UserService>, db_pool: Arc<DatabasePool>) -> Self {
        Self {
            user_service,
            db_pool,
        }
    }
}
