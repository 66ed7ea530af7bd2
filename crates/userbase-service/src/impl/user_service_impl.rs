//! User service implementation.

use crate::dto::{MessageResponse, UserRequest, UserResponse, USER_CREATED, USER_DELETED, USER_UPDATED};
use crate::user_service::UserService;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use userbase_config::DatabaseConfig;
use userbase_core::{with_timeout, User, UserId, UserbaseError, UserbaseResult, ValidateExt};
use userbase_repository::UserRepository;

/// User service backed by a [`UserRepository`].
///
/// Each repository call is bounded by `query_timeout`.
pub struct UserServiceImpl {
    user_repository: Arc<dyn UserRepository>,
    query_timeout: Duration,
}

impl UserServiceImpl {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<dyn UserRepository>, query_timeout: Duration) -> Self {
        Self {
            user_repository,
            query_timeout,
        }
    }

    /// Creates a new user service using the database call budget from configuration.
    pub fn from_config(user_repository: Arc<dyn UserRepository>, config: &DatabaseConfig) -> Self {
        Self::new(user_repository, config.query_timeout())
    }

    /// Validates the body and returns the name it carries.
    fn require_name(request: UserRequest) -> UserbaseResult<String> {
        request.validate_request()?;
        request.name.ok_or_else(UserbaseError::incorrect_parameters)
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn get_user(&self, id: UserId) -> UserbaseResult<UserResponse> {
        debug!("Getting user: {}", id);

        let user = with_timeout(self.query_timeout, || self.user_repository.find_by_id(id))
            .await?
            .ok_or_else(|| UserbaseError::not_found(id.into_inner()))?;

        Ok(UserResponse::from(user))
    }

    async fn list_users(&self) -> UserbaseResult<Vec<UserResponse>> {
        debug!("Listing users");

        let users = with_timeout(self.query_timeout, || self.user_repository.find_all()).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn create_user(&self, id: UserId, request: UserRequest) -> UserbaseResult<MessageResponse> {
        debug!("Creating user: {}", id);

        let name = Self::require_name(request)?;
        let user = User::new(id, name);

        with_timeout(self.query_timeout, || self.user_repository.insert(&user)).await?;

        info!("User created: {}", id);
        Ok(MessageResponse::new(USER_CREATED))
    }

    async fn update_user(&self, id: UserId, request: UserRequest) -> UserbaseResult<MessageResponse> {
        debug!("Updating user: {}", id);

        let name = Self::require_name(request)?;

        let updated =
            with_timeout(self.query_timeout, || self.user_repository.update_name(id, &name)).await?;
        if !updated {
            return Err(UserbaseError::not_found(id.into_inner()));
        }

        info!("User updated: {}", id);
        Ok(MessageResponse::new(USER_UPDATED))
    }

    async fn delete_user(&self, id: UserId) -> UserbaseResult<MessageResponse> {
        debug!("Deleting user: {}", id);

        let deleted = with_timeout(self.query_timeout, || self.user_repository.delete(id)).await?;
        if !deleted {
            return Err(UserbaseError::not_found(id.into_inner()));
        }

        info!("User deleted: {}", id);
        Ok(MessageResponse::new(USER_DELETED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn find_by_id(&self, id: UserId) -> UserbaseResult<Option<User>>;
            async fn find_all(&self) -> UserbaseResult<Vec<User>>;
            async fn insert(&self, user: &User) -> UserbaseResult<()>;
            async fn update_name(&self, id: UserId, name: &str) -> UserbaseResult<bool>;
            async fn delete(&self, id: UserId) -> UserbaseResult<bool>;
        }
    }

    fn service(repo: MockUserRepo) -> UserServiceImpl {
        UserServiceImpl::new(Arc::new(repo), Duration::from_secs(1))
    }

    fn store_fault() -> UserbaseError {
        UserbaseError::Database("disk I/O error".to_string())
    }

    // =============================================================================
    // Reads
    // =============================================================================

    #[tokio::test]
    async fn test_get_user_found() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_id()
            .withf(|id| *id == UserId(1))
            .returning(|id| Ok(Some(User::new(id, "Alice"))));

        let response = service(repo).get_user(UserId(1)).await.unwrap();
        assert_eq!(response, UserResponse { id: UserId(1), name: "Alice".to_string() });
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(repo).get_user(UserId(2)).await;
        assert!(matches!(result, Err(UserbaseError::NotFound { id: 2 })));
    }

    #[tokio::test]
    async fn test_get_user_store_fault_is_not_a_not_found() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_id().returning(|_| Err(store_fault()));

        let result = service(repo).get_user(UserId(2)).await;
        assert!(matches!(result, Err(UserbaseError::Database(_))));
    }

    #[tokio::test]
    async fn test_list_users_empty() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_all().returning(|| Ok(Vec::new()));

        let users = service(repo).list_users().await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_list_users_maps_every_row() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_all()
            .returning(|| Ok(vec![User::new(UserId(1), "Alice"), User::new(UserId(2), "Bob")]));

        let users = service(repo).list_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].name, "Bob");
    }

    // =============================================================================
    // Create
    // =============================================================================

    #[tokio::test]
    async fn test_create_user_success() {
        let mut repo = MockUserRepo::new();
        repo.expect_insert()
            .withf(|user| user.id == UserId(1) && user.name == "Alice")
            .times(1)
            .returning(|_| Ok(()));

        let response = service(repo).create_user(UserId(1), UserRequest::named("Alice")).await.unwrap();
        assert_eq!(response.message, USER_CREATED);
    }

    #[tokio::test]
    async fn test_create_user_missing_name_never_reaches_store() {
        let mut repo = MockUserRepo::new();
        repo.expect_insert().never();

        let result = service(repo).create_user(UserId(1), UserRequest::default()).await;
        assert!(matches!(result, Err(UserbaseError::Validation(ref m)) if m == "Incorrect Parameters"));
    }

    #[tokio::test]
    async fn test_create_user_empty_name_never_reaches_store() {
        let mut repo = MockUserRepo::new();
        repo.expect_insert().never();

        let result = service(repo).create_user(UserId(1), UserRequest::named("")).await;
        assert!(matches!(result, Err(UserbaseError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_user_duplicate_id_surfaces_constraint() {
        let mut repo = MockUserRepo::new();
        repo.expect_insert()
            .returning(|_| Err(UserbaseError::Constraint("UNIQUE constraint failed: user.id".to_string())));

        let err = service(repo).create_user(UserId(1), UserRequest::named("Alice")).await.unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.public_message(), "UNIQUE constraint failed: user.id");
    }

    // =============================================================================
    // Update
    // =============================================================================

    #[tokio::test]
    async fn test_update_user_success() {
        let mut repo = MockUserRepo::new();
        repo.expect_update_name()
            .withf(|id, name| *id == UserId(1) && name.to_string() == "Alicia")
            .times(1)
            .returning(|_, _| Ok(true));

        let response = service(repo).update_user(UserId(1), UserRequest::named("Alicia")).await.unwrap();
        assert_eq!(response.message, USER_UPDATED);
    }

    #[tokio::test]
    async fn test_update_user_missing_target() {
        let mut repo = MockUserRepo::new();
        repo.expect_update_name().returning(|_, _| Ok(false));

        let result = service(repo).update_user(UserId(3), UserRequest::named("Carol")).await;
        assert!(matches!(result, Err(UserbaseError::NotFound { id: 3 })));
    }

    #[tokio::test]
    async fn test_update_user_empty_name_never_reaches_store() {
        let mut repo = MockUserRepo::new();
        repo.expect_update_name().never();

        let result = service(repo).update_user(UserId(1), UserRequest::named("")).await;
        assert!(matches!(result, Err(UserbaseError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_user_probe_fault_is_internal() {
        let mut repo = MockUserRepo::new();
        repo.expect_update_name().returning(|_, _| Err(store_fault()));

        let err = service(repo).update_user(UserId(1), UserRequest::named("Alicia")).await.unwrap_err();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.public_message(), "Internal Server Error");
    }

    // =============================================================================
    // Delete
    // =============================================================================

    #[tokio::test]
    async fn test_delete_user_success() {
        let mut repo = MockUserRepo::new();
        repo.expect_delete()
            .withf(|id| *id == UserId(4))
            .times(1)
            .returning(|_| Ok(true));

        let response = service(repo).delete_user(UserId(4)).await.unwrap();
        assert_eq!(response.message, USER_DELETED);
    }

    #[tokio::test]
    async fn test_delete_user_missing_target() {
        let mut repo = MockUserRepo::new();
        repo.expect_delete().returning(|_| Ok(false));

        let result = service(repo).delete_user(UserId(4)).await;
        assert!(matches!(result, Err(UserbaseError::NotFound { id: 4 })));
    }

    #[tokio::test]
    async fn test_delete_user_probe_fault_is_internal() {
        let mut repo = MockUserRepo::new();
        repo.expect_delete().returning(|_| Err(store_fault()));

        let err = service(repo).delete_user(UserId(4)).await.unwrap_err();
        assert_eq!(err.status_code(), 500);
    }

    // =============================================================================
    // Timeout boundary
    // =============================================================================

    struct StalledRepository;

    #[async_trait]
    impl UserRepository for StalledRepository {
        async fn find_by_id(&self, _id: UserId) -> UserbaseResult<Option<User>> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(None)
        }

        async fn find_all(&self) -> UserbaseResult<Vec<User>> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(Vec::new())
        }

        async fn insert(&self, _user: &User) -> UserbaseResult<()> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        }

        async fn update_name(&self, _id: UserId, _name: &str) -> UserbaseResult<bool> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(true)
        }

        async fn delete(&self, _id: UserId) -> UserbaseResult<bool> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(true)
        }
    }

    #[tokio::test]
    async fn test_stalled_store_times_out() {
        let service = UserServiceImpl::new(Arc::new(StalledRepository), Duration::from_millis(20));

        let result = service.get_user(UserId(1)).await;
        assert!(matches!(result, Err(UserbaseError::Timeout(_))));

        let result = service.delete_user(UserId(1)).await;
        assert!(matches!(result, Err(UserbaseError::Timeout(_))));
    }
}
