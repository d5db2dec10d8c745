//! Role entity and the closed set of role types.

use serde::{Deserialize, Serialize};

use crate::constants::{ROLE_ADMIN_DISPLAY_NAME, ROLE_CLIENT_DISPLAY_NAME};

/// Role types enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleType {
    #[serde(alias = "CLIENTE")]
    Client,
    #[serde(alias = "ADMINISTRADOR")]
    Administrator,
}

impl RoleType {
    /// Human-readable role name
    pub fn display_name(&self) -> &'static str {
        match self {
            RoleType::Client => ROLE_CLIENT_DISPLAY_NAME,
            RoleType::Administrator => ROLE_ADMIN_DISPLAY_NAME,
        }
    }

    /// Default description of the role
    pub fn description(&self) -> &'static str {
        match self {
            RoleType::Client => "Usuario cliente del sistema",
            RoleType::Administrator => "Usuario administrador con privilegios completos",
        }
    }

    /// Check if this role type has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, RoleType::Administrator)
    }

    /// Check if this role type is a client
    pub fn is_client(&self) -> bool {
        matches!(self, RoleType::Client)
    }
}

impl std::fmt::Display for RoleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Role assigned to a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: Option<i64>,
    pub role_type: RoleType,
    pub description: Option<String>,
}

impl Role {
    /// Create a role of the given type using its default description
    pub fn new(id: Option<i64>, role_type: RoleType) -> Self {
        Self {
            id,
            role_type,
            description: Some(role_type.description().to_string()),
        }
    }

    /// Unpersisted client role
    pub fn client() -> Self {
        Self::new(None, RoleType::Client)
    }

    /// Unpersisted administrator role
    pub fn administrator() -> Self {
        Self::new(None, RoleType::Administrator)
    }

    pub fn is_admin(&self) -> bool {
        self.role_type.is_admin()
    }

    pub fn is_client(&self) -> bool {
        self.role_type.is_client()
    }

    pub fn display_name(&self) -> &'static str {
        self.role_type.display_name()
    }
}
