//! In-memory user repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use domain::{RepositoryError, User};

use super::user_repository::{RepoResult, UserRepository};

/// `UserRepository` backed by a map guarded by an async lock.
///
/// Lookups see both active and soft-deleted users. Email uniqueness is
/// enforced on `save` while holding the write lock, so two racing creates
/// cannot both be stored.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with users.
    ///
    /// Seeding applies the same email constraint as `save`: a later user
    /// with the same id replaces an earlier one, but two ids sharing an
    /// email are rejected.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> RepoResult<Self> {
        let mut map = HashMap::new();
        for user in users {
            ensure_email_free(&map, &user)?;
            map.insert(user.id, user);
        }
        Ok(Self {
            users: RwLock::new(map),
        })
    }

    /// Number of stored users, active or not
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

fn ensure_email_free(users: &HashMap<Uuid, User>, user: &User) -> RepoResult<()> {
    let taken = users
        .values()
        .any(|existing| existing.id != user.id && existing.email == user.email);
    if taken {
        return Err(RepositoryError::constraint(format!(
            "email {} is already stored",
            user.email
        )));
    }
    Ok(())
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn save(&self, user: User) -> RepoResult<User> {
        let mut users = self.users.write().await;
        ensure_email_free(&users, &user)?;
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn soft_delete_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        let mut users = self.users.write().await;
        Ok(users.get_mut(&id).map(|user| {
            user.is_active = false;
            user.clone()
        }))
    }
}
