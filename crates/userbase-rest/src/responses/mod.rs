//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, warn};
use userbase_core::{ErrorResponse, UserbaseError};

/// Application error type for Axum.
///
/// Every error is logged here, once, before it becomes a response.
#[derive(Debug)]
pub struct AppError(pub UserbaseError);

impl From<UserbaseError> for AppError {
    fn from(err: UserbaseError) -> Self {
        Self(err)
    }
}

impl AppError {
    /// Returns the HTTP status for the wrapped error.
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn log(&self) {
        let code = self.0.error_code();
        if self.0.is_client_error() {
            warn!(error_code = code, "Request rejected: {}", self.0);
        } else {
            error!(error_code = code, "Request failed: {}", self.0);
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status();
        let body = Json(ErrorResponse::from_error(&self.0));

        (status, body).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

/// Helper to create a created (201) response.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}
