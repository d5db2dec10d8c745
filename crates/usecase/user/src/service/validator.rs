//! User validator - business rules a user must satisfy.
//!
//! Every rule is a plain function returning `Result<(), ValidationError>`.
//! The creation and update pipelines run them in a fixed order and stop at
//! the first failure.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use domain::{
    is_password_special, DomainError, DomainResult, User, ValidationError, Violation,
    PHONE_DIGITS,
};

use crate::config::ValidationPolicy;
use crate::repository::UserRepository;

/// `local@domain.tld` with an ASCII local part and a TLD of 2+ letters
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

/// Local phone format: exactly ten ASCII digits, no prefix or separators
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^[0-9]{{{}}}$", PHONE_DIGITS)).unwrap());

type CheckResult = Result<(), ValidationError>;

/// Validates users before they are persisted.
#[derive(Clone)]
pub struct UserValidator {
    repo: Arc<dyn UserRepository>,
    policy: ValidationPolicy,
}

impl UserValidator {
    /// Create a validator with the default policy
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self::with_policy(repo, ValidationPolicy::default())
    }

    /// Create a validator with an explicit policy
    pub fn with_policy(repo: Arc<dyn UserRepository>, policy: ValidationPolicy) -> Self {
        Self { repo, policy }
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Validate a user before creation.
    ///
    /// Runs required fields, email format, email uniqueness, age, password
    /// and phone checks in that order. Uniqueness is the only step that
    /// reads from the repository.
    pub async fn validate_for_creation(&self, user: &User) -> DomainResult<()> {
        validate_required_fields(user, &self.policy)?;
        validate_email(&user.email)?;
        self.validate_email_uniqueness(&user.email).await?;
        self.validate_profile(user, today())?;
        Ok(())
    }

    /// Validate a user before update.
    ///
    /// Same as creation without the uniqueness check, so no repository call
    /// is made. Whether the email now collides with another user is left to
    /// the storage layer.
    pub fn validate_for_update(&self, user: &User) -> DomainResult<()> {
        Ok(self.validate_for_update_on(user, today())?)
    }

    /// Update validation against an explicit current date
    pub fn validate_for_update_on(&self, user: &User, today: NaiveDate) -> CheckResult {
        validate_required_fields(user, &self.policy)?;
        validate_email(&user.email)?;
        self.validate_profile(user, today)
    }

    /// Standalone email format check
    pub fn validate_email(&self, email: &str) -> CheckResult {
        validate_email(email)
    }

    async fn validate_email_uniqueness(&self, email: &str) -> DomainResult<()> {
        if self.repo.find_by_email(email).await?.is_some() {
            return Err(DomainError::validation(
                Violation::DuplicateEmail,
                format!("El correo electrónico ya está registrado: {}", email),
            ));
        }
        Ok(())
    }

    fn validate_profile(&self, user: &User, today: NaiveDate) -> CheckResult {
        validate_age_on(user.birth_date, today, self.policy.minimum_age)?;
        validate_password(&user.password, self.policy.min_password_length)?;
        validate_phone(user.phone.as_deref())
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Check that every required field is present. Last names are optional.
pub fn validate_required_fields(user: &User, policy: &ValidationPolicy) -> CheckResult {
    if is_blank(&user.first_names) {
        return Err(ValidationError::new(
            Violation::MissingFirstNames,
            "Los nombres son requeridos",
        ));
    }

    let salary = user.base_salary.ok_or_else(|| {
        ValidationError::new(Violation::MissingSalary, "El salario base es requerido")
    })?;
    if !(policy.min_salary..=policy.max_salary).contains(&salary) {
        return Err(ValidationError::new(
            Violation::SalaryOutOfRange,
            format!(
                "El salario debe estar entre {} y {}",
                policy.min_salary, policy.max_salary
            ),
        ));
    }

    if user.birth_date.is_none() {
        return Err(missing_birth_date());
    }

    if is_blank(&user.email) {
        return Err(ValidationError::new(
            Violation::MissingEmail,
            "El correo electrónico es requerido",
        ));
    }

    if is_blank(&user.password) {
        return Err(ValidationError::new(
            Violation::MissingPassword,
            "La contraseña es requerida",
        ));
    }

    if user.role.is_none() {
        return Err(ValidationError::new(Violation::MissingRole, "El rol es requerido"));
    }

    Ok(())
}

/// Check email format
pub fn validate_email(email: &str) -> CheckResult {
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::new(
            Violation::InvalidEmail,
            "Formato de correo electrónico inválido",
        ));
    }
    Ok(())
}

/// Check the user is old enough on `today`, in whole calendar years
pub fn validate_age_on(
    birth_date: Option<NaiveDate>,
    today: NaiveDate,
    minimum_age: u32,
) -> CheckResult {
    let birth_date = birth_date.ok_or_else(missing_birth_date)?;

    // years_since is None only when the birth date is after today
    let age = today.years_since(birth_date).ok_or_else(|| {
        ValidationError::new(
            Violation::FutureBirthDate,
            "La fecha de nacimiento no puede estar en el futuro",
        )
    })?;

    if age < minimum_age {
        return Err(ValidationError::new(
            Violation::Underage,
            format!("El usuario debe tener al menos {} años de edad", minimum_age),
        ));
    }
    Ok(())
}

/// Check password strength: length first, then uppercase, lowercase,
/// digit and special character, reporting the first missing class.
pub fn validate_password(password: &str, min_length: usize) -> CheckResult {
    if password.chars().count() < min_length {
        return Err(ValidationError::new(
            Violation::PasswordTooShort,
            format!("La contraseña debe tener al menos {} caracteres", min_length),
        ));
    }

    let classes: [(fn(char) -> bool, Violation, &str); 4] = [
        (
            |c: char| c.is_ascii_uppercase(),
            Violation::PasswordMissingUppercase,
            "La contraseña debe contener al menos una letra mayúscula",
        ),
        (
            |c: char| c.is_ascii_lowercase(),
            Violation::PasswordMissingLowercase,
            "La contraseña debe contener al menos una letra minúscula",
        ),
        (
            |c: char| c.is_ascii_digit(),
            Violation::PasswordMissingDigit,
            "La contraseña debe contener al menos un número",
        ),
        (
            is_password_special,
            Violation::PasswordMissingSpecial,
            "La contraseña debe contener al menos un carácter especial",
        ),
    ];

    for (has_class, violation, message) in classes {
        if !password.chars().any(has_class) {
            return Err(ValidationError::new(violation, message));
        }
    }
    Ok(())
}

/// Check phone format. A missing phone fails here as well, with the same
/// message as a malformed one.
pub fn validate_phone(phone: Option<&str>) -> CheckResult {
    match phone {
        Some(phone) if PHONE_PATTERN.is_match(phone) => Ok(()),
        _ => Err(ValidationError::new(
            Violation::InvalidPhone,
            format!("El número de teléfono debe tener {} dígitos", PHONE_DIGITS),
        )),
    }
}

fn missing_birth_date() -> ValidationError {
    ValidationError::new(
        Violation::MissingBirthDate,
        "La fecha de nacimiento es requerida",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Months;
    use domain::{CreateUser, Role};
    use mockall::predicate::eq;

    use crate::repository::MockUserRepository;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn years_ago(years: u32) -> NaiveDate {
        today().checked_sub_months(Months::new(years * 12)).unwrap()
    }

    fn valid_user() -> User {
        CreateUser {
            first_names: "Juan Carlos".to_string(),
            last_names: Some("Pérez Gómez".to_string()),
            birth_date: Some(years_ago(30)),
            phone: Some("3001234567".to_string()),
            email: "juan.perez@example.com".to_string(),
            base_salary: Some(3_000_000.0),
            password: "Abcdef1!".to_string(),
            role: Some(Role::client()),
            ..Default::default()
        }
        .into_user()
    }

    fn validator_with(repo: MockUserRepository) -> UserValidator {
        UserValidator::new(Arc::new(repo))
    }

    fn untouched_validator() -> UserValidator {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().never();
        repo.expect_save().never();
        validator_with(repo)
    }

    fn violation_of(user: &User) -> Violation {
        untouched_validator()
            .validate_for_update(user)
            .unwrap_err()
            .violation()
            .unwrap()
    }

    // -------------------------------------------------------------------------
    // Required fields
    // -------------------------------------------------------------------------

    #[test]
    fn test_required_fields_in_order() {
        let policy = ValidationPolicy::default();
        assert!(validate_required_fields(&valid_user(), &policy).is_ok());

        let cases: [(fn(&mut User), Violation, &str); 6] = [
            (|u: &mut User| u.first_names = "   ".into(), Violation::MissingFirstNames, "first_names"),
            (|u: &mut User| u.base_salary = None, Violation::MissingSalary, "base_salary"),
            (|u: &mut User| u.birth_date = None, Violation::MissingBirthDate, "birth_date"),
            (|u: &mut User| u.email = String::new(), Violation::MissingEmail, "email"),
            (|u: &mut User| u.password = " ".into(), Violation::MissingPassword, "password"),
            (|u: &mut User| u.role = None, Violation::MissingRole, "role"),
        ];

        for (mutate, violation, field) in cases {
            let mut user = valid_user();
            mutate(&mut user);
            let err = validate_required_fields(&user, &policy).unwrap_err();
            assert_eq!(err.violation, violation);
            assert_eq!(err.field(), field);
        }
    }

    #[test]
    fn test_first_missing_field_wins() {
        let mut user = valid_user();
        user.role = None;
        user.first_names = String::new();
        assert_eq!(violation_of(&user), Violation::MissingFirstNames);
    }

    #[test]
    fn test_last_names_not_required() {
        let mut user = valid_user();
        user.last_names = None;
        assert!(untouched_validator().validate_for_update(&user).is_ok());
    }

    #[test]
    fn test_salary_bounds_inclusive() {
        let policy = ValidationPolicy::default();
        for salary in [0.0, 15_000_000.0, 1.5] {
            let mut user = valid_user();
            user.base_salary = Some(salary);
            assert!(validate_required_fields(&user, &policy).is_ok(), "{salary}");
        }

        for salary in [-0.01, 15_000_000.01, f64::NAN] {
            let mut user = valid_user();
            user.base_salary = Some(salary);
            let err = validate_required_fields(&user, &policy).unwrap_err();
            assert_eq!(err.violation, Violation::SalaryOutOfRange);
            assert_eq!(err.message, "El salario debe estar entre 0 y 15000000");
        }
    }

    // -------------------------------------------------------------------------
    // Email
    // -------------------------------------------------------------------------

    #[test]
    fn test_email_format() {
        for ok in ["a@b.co", "juan.perez+loans@mail.example.com", "x_y-z@d-omain.org"] {
            assert!(validate_email(ok).is_ok(), "{ok}");
        }
        for bad in ["a@b", "a.com", "", "a@b.c", "a b@c.co", "a@b.c0", "ñ@b.co", "@b.co"] {
            let err = validate_email(bad).unwrap_err();
            assert_eq!(err.violation, Violation::InvalidEmail, "{bad}");
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_on_creation() {
        let user = valid_user();
        let existing = valid_user();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(eq("juan.perez@example.com"))
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        let err = validator_with(repo)
            .validate_for_creation(&user)
            .await
            .unwrap_err();

        assert_eq!(err.violation(), Some(Violation::DuplicateEmail));
        assert_eq!(
            err.to_string(),
            "El correo electrónico ya está registrado: juan.perez@example.com"
        );
    }

    #[tokio::test]
    async fn test_creation_and_update_fail_with_same_error_shape() {
        let mut user = valid_user();
        user.email = "juan.perez@example".to_string();
        let validator = untouched_validator();

        let on_create = validator.validate_for_creation(&user).await.unwrap_err();
        let on_update = validator.validate_for_update(&user).unwrap_err();

        assert!(on_create.is_validation());
        assert!(on_update.is_validation());
        assert_eq!(on_create.violation(), on_update.violation());
        assert_eq!(on_create.to_string(), on_update.to_string());
    }

    #[tokio::test]
    async fn test_uniqueness_runs_after_format_check() {
        let mut user = valid_user();
        user.email = "not-an-email".to_string();

        let err = untouched_validator()
            .validate_for_creation(&user)
            .await
            .unwrap_err();
        assert_eq!(err.violation(), Some(Violation::InvalidEmail));
    }

    #[tokio::test]
    async fn test_creation_passes_for_unique_valid_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().times(1).returning(|_| Ok(None));

        assert!(validator_with(repo)
            .validate_for_creation(&valid_user())
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_uniqueness_lookup_error_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Err(domain::RepositoryError::unavailable("down")));

        let err = validator_with(repo)
            .validate_for_creation(&valid_user())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Repository(_)));
    }

    // -------------------------------------------------------------------------
    // Age
    // -------------------------------------------------------------------------

    #[test]
    fn test_age_is_calendar_accurate() {
        let today = date(2024, 6, 15);
        assert!(validate_age_on(Some(date(2006, 6, 15)), today, 18).is_ok());

        let err = validate_age_on(Some(date(2006, 6, 16)), today, 18).unwrap_err();
        assert_eq!(err.violation, Violation::Underage);
        assert_eq!(err.message, "El usuario debe tener al menos 18 años de edad");
    }

    #[test]
    fn test_leap_day_birthday() {
        // Born on Feb 29: still 17 on Feb 28 of a common year, 18 on Mar 1
        let birth = Some(date(2008, 2, 29));
        assert!(validate_age_on(birth, date(2026, 2, 28), 18).is_err());
        assert!(validate_age_on(birth, date(2026, 3, 1), 18).is_ok());
    }

    #[test]
    fn test_future_and_missing_birth_date() {
        let today = date(2024, 6, 15);
        let err = validate_age_on(Some(date(2024, 6, 16)), today, 18).unwrap_err();
        assert_eq!(err.violation, Violation::FutureBirthDate);

        let err = validate_age_on(None, today, 18).unwrap_err();
        assert_eq!(err.violation, Violation::MissingBirthDate);

        // Born today is not in the future, just too young
        let err = validate_age_on(Some(today), today, 18).unwrap_err();
        assert_eq!(err.violation, Violation::Underage);
    }

    #[test]
    fn test_exactly_eighteen_today_passes() {
        let mut user = valid_user();
        user.birth_date = Some(years_ago(18));
        assert!(untouched_validator().validate_for_update(&user).is_ok());

        user.birth_date = user.birth_date.and_then(|d| d.succ_opt());
        assert_eq!(violation_of(&user), Violation::Underage);
    }

    // -------------------------------------------------------------------------
    // Password
    // -------------------------------------------------------------------------

    #[test]
    fn test_password_rules() {
        assert!(validate_password("Abcdef1!", 8).is_ok());

        let cases = [
            ("Abc1!", Violation::PasswordTooShort),
            ("abcdef1!", Violation::PasswordMissingUppercase),
            ("ABCDEF1!", Violation::PasswordMissingLowercase),
            ("Abcdefg!", Violation::PasswordMissingDigit),
            ("Abcdefg1", Violation::PasswordMissingSpecial),
            ("Abcdef1 ", Violation::PasswordMissingSpecial),
        ];
        for (password, violation) in cases {
            let err = validate_password(password, 8).unwrap_err();
            assert_eq!(err.violation, violation, "{password}");
        }
    }

    #[test]
    fn test_password_reports_first_missing_class() {
        // Missing everything but lowercase: uppercase is checked first
        let err = validate_password("abcdefgh", 8).unwrap_err();
        assert_eq!(err.violation, Violation::PasswordMissingUppercase);
        assert_eq!(
            err.message,
            "La contraseña debe contener al menos una letra mayúscula"
        );
    }

    #[test]
    fn test_password_length_counts_characters() {
        // Seven characters, some multi-byte
        let err = validate_password("Ñandú1!", 8).unwrap_err();
        assert_eq!(err.violation, Violation::PasswordTooShort);
    }

    // -------------------------------------------------------------------------
    // Phone
    // -------------------------------------------------------------------------

    #[test]
    fn test_phone_format() {
        assert!(validate_phone(Some("3001234567")).is_ok());
        let bad_phones = [
            "30012345",
            "300-123-4567",
            "+573001234567",
            "30012345678",
            "300123456a",
            "３００１２３４５６７",
        ];
        for bad in bad_phones {
            let err = validate_phone(Some(bad)).unwrap_err();
            assert_eq!(err.violation, Violation::InvalidPhone, "{bad}");
        }
    }

    #[test]
    fn test_missing_phone_fails_at_format_step() {
        let err = validate_phone(None).unwrap_err();
        assert_eq!(err.violation, Violation::InvalidPhone);
        assert_eq!(err.message, "El número de teléfono debe tener 10 dígitos");

        let mut user = valid_user();
        user.phone = None;
        assert_eq!(violation_of(&user), Violation::InvalidPhone);
    }

    // -------------------------------------------------------------------------
    // Policy
    // -------------------------------------------------------------------------

    #[test]
    fn test_custom_policy_is_applied() {
        let repo = MockUserRepository::new();
        let policy = ValidationPolicy {
            minimum_age: 21,
            min_password_length: 12,
            ..Default::default()
        };
        let validator = UserValidator::with_policy(Arc::new(repo), policy);

        let mut user = valid_user();
        user.birth_date = Some(years_ago(20));
        let err = validator.validate_for_update(&user).unwrap_err();
        assert_eq!(err.violation(), Some(Violation::Underage));

        user.birth_date = Some(years_ago(25));
        let err = validator.validate_for_update(&user).unwrap_err();
        assert_eq!(err.violation(), Some(Violation::PasswordTooShort));
        assert_eq!(validator.policy().min_password_length, 12);
    }
}
