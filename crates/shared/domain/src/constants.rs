//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Users
// =============================================================================

/// Minimum age (in whole years) a user must have to be registered
pub const MINIMUM_AGE: u32 = 18;

/// Lowest accepted base salary
pub const MINIMUM_SALARY: f64 = 0.0;

/// Highest accepted base salary (15 million)
pub const MAXIMUM_SALARY: f64 = 15_000_000.0;

/// Number of digits of a local phone number (3XX XXX XXXX)
pub const PHONE_DIGITS: usize = 10;

// =============================================================================
// Passwords
// =============================================================================

/// Minimum password length requirement, counted in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters that satisfy the "special character" password requirement
pub const PASSWORD_SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Check if a character counts as a password special character
pub fn is_password_special(c: char) -> bool {
    PASSWORD_SPECIAL_CHARACTERS.contains(c)
}

// =============================================================================
// Roles
// =============================================================================

/// Display name of the client role
pub const ROLE_CLIENT_DISPLAY_NAME: &str = "Cliente";

/// Display name of the administrator role
pub const ROLE_ADMIN_DISPLAY_NAME: &str = "Administrador";
