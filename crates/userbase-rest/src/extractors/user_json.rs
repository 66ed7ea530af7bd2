//! Lenient JSON body extractor.
//!
//! `UserJson<T>` reads the raw body and deserializes it without requiring a
//! `Content-Type` header. An empty or malformed body is rejected with the
//! standard `Incorrect Parameters` error, so body problems and field
//! validation problems look the same to the caller. A body over the size
//! limit keeps its 413.

use crate::responses::AppError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use tracing::debug;
use userbase_core::UserbaseError;

/// JSON extractor that maps body failures to `Incorrect Parameters`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserJson<T>(pub T);

/// Decodes a request body, treating empty input as a parameter error.
pub fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, UserbaseError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        debug!("Rejected request with empty body");
        return Err(UserbaseError::incorrect_parameters());
    }

    serde_json::from_slice(bytes).map_err(|e| {
        debug!("Rejected request body: {}", e);
        UserbaseError::incorrect_parameters()
    })
}

#[async_trait]
impl<T, S> FromRequest<S> for UserJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            debug!("Failed to read request body: {}", rejection);
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                rejection.into_response()
            } else {
                AppError(UserbaseError::incorrect_parameters()).into_response()
            }
        })?;

        decode_body(&bytes)
            .map(UserJson)
            .map_err(|e| AppError(e).into_response())
    }
}
