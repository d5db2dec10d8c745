//! User use case - the entry point for user operations.
//!
//! Sequences validation before persistence and turns repository misses into
//! `DomainError::NotFound`.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use domain::{DomainError, DomainResult, User, Violation};

use crate::repository::UserRepository;
use crate::service::UserValidator;

/// User use case trait for dependency injection.
#[async_trait]
pub trait UserUseCase: Send + Sync {
    /// Validate and store a new user
    async fn create_user(&self, user: User) -> DomainResult<User>;

    /// Get user by ID
    async fn find_by_id(&self, id: Option<Uuid>) -> DomainResult<User>;

    /// Get user by email
    async fn find_by_email(&self, email: &str) -> DomainResult<User>;

    /// Validate and store the full new state of an existing user
    async fn update_user(&self, user: User) -> DomainResult<User>;

    /// Soft delete user, returning it marked inactive
    async fn delete_user_by_id(&self, id: Option<Uuid>) -> DomainResult<User>;
}

/// Concrete implementation of UserUseCase using a repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    validator: UserValidator,
}

impl UserManager {
    /// Create a use case whose validator shares the same repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        let validator = UserValidator::new(repo.clone());
        Self { repo, validator }
    }

    /// Create a use case with a preconfigured validator
    pub fn with_validator(repo: Arc<dyn UserRepository>, validator: UserValidator) -> Self {
        Self { repo, validator }
    }

    pub fn validator(&self) -> &UserValidator {
        &self.validator
    }
}

fn require_id(id: Option<Uuid>) -> DomainResult<Uuid> {
    id.ok_or_else(|| {
        DomainError::validation(Violation::MissingUserId, "El id del usuario es requerido")
    })
}

fn log_rejection(err: &DomainError, user: &User, what: &str) {
    if let Some(violation) = err.violation() {
        tracing::warn!(%violation, user_id = %user.id, email = %user.email, "{}", what);
    }
}

#[async_trait]
impl UserUseCase for UserManager {
    async fn create_user(&self, user: User) -> DomainResult<User> {
        if let Err(err) = self.validator.validate_for_creation(&user).await {
            log_rejection(&err, &user, "User creation rejected");
            return Err(err);
        }

        let saved = self.repo.save(user).await?;
        tracing::info!(user_id = %saved.id, "User created");
        Ok(saved)
    }

    async fn find_by_id(&self, id: Option<Uuid>) -> DomainResult<User> {
        let id = require_id(id)?;
        tracing::debug!(user_id = %id, "Looking up user by id");

        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(id.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<User> {
        self.validator.validate_email(email)?;
        tracing::debug!(email, "Looking up user by email");

        self.repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::not_found(email))
    }

    async fn update_user(&self, user: User) -> DomainResult<User> {
        if let Err(err) = self.validator.validate_for_update(&user) {
            log_rejection(&err, &user, "User update rejected");
            return Err(err);
        }

        let saved = self.repo.save(user).await?;
        tracing::info!(user_id = %saved.id, "User updated");
        Ok(saved)
    }

    async fn delete_user_by_id(&self, id: Option<Uuid>) -> DomainResult<User> {
        let id = require_id(id)?;

        let deleted = self
            .repo
            .soft_delete_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(id.to_string()))?;

        tracing::info!(user_id = %id, "User soft deleted");
        Ok(deleted)
    }
}
