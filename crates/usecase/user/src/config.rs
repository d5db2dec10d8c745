//! Validation policy configuration.

use std::env;
use std::str::FromStr;

use domain::{MAXIMUM_SALARY, MINIMUM_AGE, MINIMUM_SALARY, MIN_PASSWORD_LENGTH};

/// Tunable limits applied by the user validator.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationPolicy {
    /// Minimum age in whole years
    pub minimum_age: u32,
    /// Minimum password length in characters
    pub min_password_length: usize,
    /// Lowest accepted base salary (inclusive)
    pub min_salary: f64,
    /// Highest accepted base salary (inclusive)
    pub max_salary: f64,
}

impl ValidationPolicy {
    /// Load the policy from environment variables, falling back to the
    /// business defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            minimum_age: env_or("USER_MIN_AGE", defaults.minimum_age),
            min_password_length: env_or("USER_MIN_PASSWORD_LENGTH", defaults.min_password_length),
            min_salary: env_or("USER_MIN_SALARY", defaults.min_salary),
            max_salary: env_or("USER_MAX_SALARY", defaults.max_salary),
        }
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            minimum_age: MINIMUM_AGE,
            min_password_length: MIN_PASSWORD_LENGTH,
            min_salary: MINIMUM_SALARY,
            max_salary: MAXIMUM_SALARY,
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
