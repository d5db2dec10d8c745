//! Domain layer - Core business entities and error types.
//!
//! This crate contains pure domain data with no infrastructure dependencies.
//! Business rules that need a repository live in the `user-usecase` crate.

pub mod admin;
pub mod constants;
pub mod direction;
pub mod error;
pub mod ids;
pub mod role;
pub mod user;

pub use admin::Admin;
pub use constants::*;
pub use direction::Direction;
pub use error::{DomainError, DomainResult, RepositoryError, ValidationError, Violation};
pub use role::{Role, RoleType};
pub use user::{CreateUser, User};
