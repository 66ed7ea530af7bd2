//! OpenAPI documentation configuration.

use crate::controllers::HealthResponse;
use userbase_core::{ErrorResponse, UserId};
use userbase_service::{MessageResponse, UserRequest, UserResponse};
use utoipa::OpenApi;

/// OpenAPI documentation for the Userbase API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Userbase API",
        version = "0.1.0",
        description = "CRUD service for user records",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::create_user,
        crate::controllers::user_controller::update_user,
        crate::controllers::user_controller::delete_user,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            UserId,
            ErrorResponse,
            UserRequest,
            UserResponse,
            MessageResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "users", description = "User record endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_user_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/users"));
        assert!(doc.paths.paths.contains_key("/users/{id}"));
        assert!(doc.paths.paths.contains_key("/ready"));
    }
}
