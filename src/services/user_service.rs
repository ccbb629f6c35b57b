//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles the create-user use case only.
//! DDD: Orchestrates domain operations via the repository port.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{CreateUser, User};
use crate::errors::{AppError, AppResult};
use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a new user from a validated request.
    ///
    /// Fails with [`AppError::Validation`] when the request is malformed and
    /// with [`AppError::DuplicateEmail`] when the repository already knows
    /// the address. Callers map the returned entity to
    /// [`crate::domain::UserResponse`] at the boundary.
    async fn create_user(&self, request: CreateUser) -> AppResult<User>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, request: CreateUser) -> AppResult<User> {
        request.validate()?;

        // Check if email already exists
        if self.repo.find_by_email(&request.email).await?.is_some() {
            tracing::warn!(email = %request.email, "rejected duplicate email");
            return Err(AppError::DuplicateEmail);
        }

        let user = User::new(request.name, request.email, request.age);
        let created = self.repo.create(user).await?;

        tracing::info!(user_id = %created.id, "user created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;

    fn leo_request() -> CreateUser {
        CreateUser {
            name: "Leo".to_string(),
            email: "leo@gmail.com".to_string(),
            age: 30,
        }
    }

    #[tokio::test]
    async fn test_create_user_with_existing_email_fails() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "leo@gmail.com")
            .returning(|email| Ok(Some(User::new("Leo", email, 30))));

        let service = UserManager::new(Arc::new(repo));
        let err = service.create_user(leo_request()).await.unwrap_err();

        assert!(matches!(err, AppError::DuplicateEmail));
        assert_eq!(err.to_string(), "email already in use");
    }

    #[tokio::test]
    async fn test_create_user_success_preserves_request_fields() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create().returning(Ok);

        let service = UserManager::new(Arc::new(repo));
        let user = service.create_user(leo_request()).await.unwrap();

        assert_eq!(user.name, "Leo");
        assert_eq!(user.email, "leo@gmail.com");
        assert_eq!(user.age, 30);
        assert!(!user.id.is_empty());
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected_before_repository() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().never();
        repo.expect_create().never();

        let service = UserManager::new(Arc::new(repo));
        let err = service
            .create_user(CreateUser {
                name: String::new(),
                email: "leo@gmail.com".to_string(),
                age: 30,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_malformed_email_is_rejected_before_repository() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().never();
        repo.expect_create().never();

        let service = UserManager::new(Arc::new(repo));
        let err = service
            .create_user(CreateUser {
                name: "João".to_string(),
                email: "joaoexample.com".to_string(),
                age: 30,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }
}
