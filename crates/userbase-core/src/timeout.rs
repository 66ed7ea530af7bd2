//! Timeout boundary for store calls.

use crate::UserbaseError;
use std::future::Future;
use std::time::Duration;

/// Wraps an async operation with a timeout.
///
/// An expired budget surfaces as [`UserbaseError::Timeout`]; the inner
/// future is dropped.
pub async fn with_timeout<F, Fut, T>(duration: Duration, f: F) -> Result<T, UserbaseError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, UserbaseError>>,
{
    tokio::time::timeout(duration, f())
        .await
        .map_err(|_| UserbaseError::Timeout(format!("store call exceeded {:?}", duration)))?
}
