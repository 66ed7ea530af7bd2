//! User record controller.

use crate::{
    extractors::UserJson,
    responses::{created, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::debug;
use userbase_core::{ErrorResponse, UserId, UserbaseError};
use userbase_service::{MessageResponse, UserRequest, UserResponse};

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route(
            "/:id",
            get(get_user)
                .post(create_user)
                .put(update_user)
                .delete(delete_user),
        )
}

/// List every user, ordered by id.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 500, description = "Store failure", body = ErrorResponse),
        (status = 503, description = "Store call timed out", body = ErrorResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<UserResponse>> {
    debug!("List users request");

    let users = state.user_service.list_users().await?;
    ok(users)
}

/// Get a user by id.
///
/// A missing user, or an id that cannot name one, answers 404 with no body.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found"),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response, AppError> {
    debug!("Get user request: {}", id);

    let Some(user_id) = UserId::parse(&id) else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    match state.user_service.get_user(user_id).await {
        Ok(user) => Ok(Json(user).into_response()),
        Err(UserbaseError::NotFound { .. }) => Ok(StatusCode::NOT_FOUND.into_response()),
        Err(e) => Err(e.into()),
    }
}

/// Create a user with the given id.
#[utoipa::path(
    post,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = MessageResponse),
        (status = 400, description = "Incorrect parameters or duplicate id", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    UserJson(request): UserJson<UserRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    debug!("Create user request: {}", id);

    let user_id = parse_user_id(&id)?;
    let response = state.user_service.create_user(user_id, request).await?;
    Ok(created(response))
}

/// Rename an existing user.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 400, description = "Incorrect parameters", body = ErrorResponse),
        (status = 404, description = "User does not exist", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    UserJson(request): UserJson<UserRequest>,
) -> ApiResult<MessageResponse> {
    debug!("Update user request: {}", id);

    let user_id = parse_user_id(&id)?;
    let response = state.user_service.update_user(user_id, request).await?;
    ok(response)
}

/// Delete an existing user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Incorrect parameters", body = ErrorResponse),
        (status = 404, description = "User does not exist", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn delete_user(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<MessageResponse> {
    debug!("Delete user request: {}", id);

    let user_id = parse_user_id(&id)?;
    let response = state.user_service.delete_user(user_id).await?;
    ok(response)
}

/// Helper to parse user ID from path parameter.
fn parse_user_id(id: &str) -> Result<UserId, AppError> {
    UserId::parse(id).ok_or_else(|| AppError(UserbaseError::incorrect_parameters()))
}
