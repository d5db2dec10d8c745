//! User domain entity and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::direction::Direction;
use crate::ids::assign_id;
use crate::role::Role;

/// User domain entity
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub first_names: String,
    /// Not required: some people have a single name
    pub last_names: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub direction: Option<Direction>,
    pub phone: Option<String>,
    pub email: String,
    pub base_salary: Option<f64>,
    /// Plain text at the domain boundary; hashing happens outside the core
    #[serde(default, skip_serializing)]
    pub password: String,
    pub role: Option<Role>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl User {
    /// Check if user has admin role
    pub fn is_admin(&self) -> bool {
        self.role.as_ref().is_some_and(Role::is_admin)
    }

    /// Check if user has client role
    pub fn is_client(&self) -> bool {
        self.role.as_ref().is_some_and(Role::is_client)
    }

    /// First names followed by last names, when present
    pub fn full_name(&self) -> String {
        match self.last_names.as_deref().map(str::trim) {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_names.trim(), last),
            _ => self.first_names.trim().to_string(),
        }
    }

    /// Same user marked inactive
    pub fn deactivated(self) -> Self {
        Self {
            is_active: false,
            ..self
        }
    }
}

// Don't expose the password in debug output
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("first_names", &self.first_names)
            .field("last_names", &self.last_names)
            .field("birth_date", &self.birth_date)
            .field("direction", &self.direction)
            .field("phone", &self.phone)
            .field("email", &self.email)
            .field("base_salary", &self.base_salary)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .field("is_active", &self.is_active)
            .finish()
    }
}

/// User creation data transfer object.
///
/// Converting into a [`User`] is where identity is assigned: a supplied `id`
/// is kept, otherwise a fresh one is generated. New users start active.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateUser {
    pub id: Option<Uuid>,
    pub first_names: String,
    pub last_names: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub direction: Option<Direction>,
    pub phone: Option<String>,
    pub email: String,
    pub base_salary: Option<f64>,
    pub password: String,
    pub role: Option<Role>,
}

impl CreateUser {
    /// Build the user entity, assigning an identifier if none was supplied
    pub fn into_user(self) -> User {
        User {
            id: assign_id(self.id),
            first_names: self.first_names,
            last_names: self.last_names,
            birth_date: self.birth_date,
            direction: self.direction,
            phone: self.phone,
            email: self.email,
            base_salary: self.base_salary,
            password: self.password,
            role: self.role,
            is_active: true,
        }
    }
}

impl From<CreateUser> for User {
    fn from(input: CreateUser) -> Self {
        input.into_user()
    }
}
