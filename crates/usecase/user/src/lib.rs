//! User use case library.
//!
//! Business-rule core for user management: validates users, checks email
//! uniqueness through a repository port and exposes create, lookup, update
//! and soft-delete operations. Storage is pluggable through
//! [`repository::UserRepository`]; an in-memory adapter is included.

pub mod config;
pub mod repository;
pub mod service;

use std::sync::Arc;

use crate::config::ValidationPolicy;
use crate::repository::UserRepository;
use crate::service::{UserManager, UserValidator};

/// Build the user use case over a repository with the given policy.
pub fn build_user_manager(repo: Arc<dyn UserRepository>, policy: ValidationPolicy) -> UserManager {
    let validator = UserValidator::with_policy(repo.clone(), policy);
    UserManager::with_validator(repo, validator)
}
