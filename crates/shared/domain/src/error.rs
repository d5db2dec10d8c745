//! Domain-level errors.
//!
//! These errors represent business rule violations and lookup misses.
//! They are independent of infrastructure concerns (HTTP, gRPC, database);
//! storage failures pass through untouched as [`RepositoryError`].

use std::fmt;

use thiserror::Error;

/// The business rule a user value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    MissingFirstNames,
    MissingSalary,
    SalaryOutOfRange,
    MissingBirthDate,
    MissingEmail,
    MissingPassword,
    MissingRole,
    InvalidEmail,
    DuplicateEmail,
    FutureBirthDate,
    Underage,
    PasswordTooShort,
    PasswordMissingUppercase,
    PasswordMissingLowercase,
    PasswordMissingDigit,
    PasswordMissingSpecial,
    InvalidPhone,
    MissingUserId,
}

impl Violation {
    /// Name of the user field the rule applies to
    pub fn field(&self) -> &'static str {
        match self {
            Violation::MissingFirstNames => "first_names",
            Violation::MissingSalary | Violation::SalaryOutOfRange => "base_salary",
            Violation::MissingBirthDate | Violation::FutureBirthDate | Violation::Underage => {
                "birth_date"
            }
            Violation::MissingEmail | Violation::InvalidEmail | Violation::DuplicateEmail => {
                "email"
            }
            Violation::MissingPassword
            | Violation::PasswordTooShort
            | Violation::PasswordMissingUppercase
            | Violation::PasswordMissingLowercase
            | Violation::PasswordMissingDigit
            | Violation::PasswordMissingSpecial => "password",
            Violation::MissingRole => "role",
            Violation::InvalidPhone => "phone",
            Violation::MissingUserId => "id",
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Violation::MissingFirstNames => "MISSING_FIRST_NAMES",
            Violation::MissingSalary => "MISSING_SALARY",
            Violation::SalaryOutOfRange => "SALARY_OUT_OF_RANGE",
            Violation::MissingBirthDate => "MISSING_BIRTH_DATE",
            Violation::MissingEmail => "MISSING_EMAIL",
            Violation::MissingPassword => "MISSING_PASSWORD",
            Violation::MissingRole => "MISSING_ROLE",
            Violation::InvalidEmail => "INVALID_EMAIL",
            Violation::DuplicateEmail => "DUPLICATE_EMAIL",
            Violation::FutureBirthDate => "FUTURE_BIRTH_DATE",
            Violation::Underage => "UNDERAGE",
            Violation::PasswordTooShort => "PASSWORD_TOO_SHORT",
            Violation::PasswordMissingUppercase => "PASSWORD_MISSING_UPPERCASE",
            Violation::PasswordMissingLowercase => "PASSWORD_MISSING_LOWERCASE",
            Violation::PasswordMissingDigit => "PASSWORD_MISSING_DIGIT",
            Violation::PasswordMissingSpecial => "PASSWORD_MISSING_SPECIAL",
            Violation::InvalidPhone => "INVALID_PHONE",
            Violation::MissingUserId => "MISSING_USER_ID",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A rejected user value: which rule failed and a human-readable message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub violation: Violation,
    pub message: String,
}

impl ValidationError {
    /// Create a validation error for the given rule
    pub fn new(violation: Violation, message: impl Into<String>) -> Self {
        Self {
            violation,
            message: message.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        self.violation.field()
    }
}

/// Errors reported by a user repository implementation.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The backing store could not be reached
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// A storage-level constraint rejected the write
    #[error("Constraint violated: {0}")]
    Constraint(String),

    /// Any other storage failure
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Create an unavailable error
    pub fn unavailable(msg: impl Into<String>) -> Self {
        RepositoryError::Unavailable(msg.into())
    }

    /// Create a constraint error
    pub fn constraint(msg: impl Into<String>) -> Self {
        RepositoryError::Constraint(msg.into())
    }
}

/// Failures surfaced by user use cases.
#[derive(Error, Debug)]
pub enum DomainError {
    /// A business rule was violated
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested user does not exist
    #[error("Usuario no encontrado: {0}")]
    NotFound(String),

    /// Persistence failure, propagated unchanged
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(violation: Violation, msg: impl Into<String>) -> Self {
        DomainError::Validation(ValidationError::new(violation, msg))
    }

    /// Create a not found error
    pub fn not_found(key: impl Into<String>) -> Self {
        DomainError::NotFound(key.into())
    }

    /// Check if this is a business rule violation
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }

    /// Check if this is a lookup miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }

    /// The violated rule, if this is a validation failure
    pub fn violation(&self) -> Option<Violation> {
        match self {
            DomainError::Validation(err) => Some(err.violation),
            _ => None,
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
