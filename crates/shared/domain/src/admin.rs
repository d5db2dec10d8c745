//! Administrative subject record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ids::assign_id;

/// Administrator record (plain data)
#[derive(Clone, Serialize, Deserialize)]
pub struct Admin {
    pub id: Uuid,
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Admin {
    /// Create an empty admin record, generating an id when none is supplied
    pub fn new(id: Option<Uuid>) -> Self {
        Self {
            id: assign_id(id),
            first_names: Vec::new(),
            last_names: Vec::new(),
            birth_date: None,
            phone: None,
            email: None,
            password: None,
        }
    }
}

// Don't expose the password in debug output
impl std::fmt::Debug for Admin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Admin")
            .field("id", &self.id)
            .field("first_names", &self.first_names)
            .field("last_names", &self.last_names)
            .field("birth_date", &self.birth_date)
            .field("phone", &self.phone)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
