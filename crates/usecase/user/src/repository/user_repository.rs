//! User repository port.

use async_trait::async_trait;
use uuid::Uuid;

use domain::{RepositoryError, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Result type for repository calls
pub type RepoResult<T> = Result<T, RepositoryError>;

/// User repository trait for dependency injection.
///
/// Absence is a valid outcome for every lookup and is reported as `None`.
/// Implementations own storage and concurrency; errors are returned as-is
/// and the core never reinterprets them.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert or replace a user, returning the stored representation
    async fn save(&self, user: User) -> RepoResult<User>;

    /// Find user by exact email address
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Mark user inactive, returning the updated record if it exists
    async fn soft_delete_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;
}
