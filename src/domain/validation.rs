//! Authentication form state and field validation.
//!
//! Each field has its own check. A submission collects the first failing
//! message per field into a [`FormErrors`] value that the UI renders inline.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("valid name pattern"));
static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("valid username pattern"));

pub const MIN_AGE: i64 = 13;
pub const MAX_AGE: i64 = 120;
pub const MIN_PASSWORD_LEN: usize = 6;

/// Aggregate message shown when any required field is blank.
pub const ALL_FIELDS_REQUIRED: &str = "All fields should be filled";

/// Whether the form signs in an existing user or registers a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AuthField {
    Name,
    Username,
    Email,
    Age,
    Password,
    ConfirmPassword,
}

impl AuthField {
    pub fn label(&self) -> &'static str {
        match self {
            AuthField::Name => "Full Name",
            AuthField::Username => "Username",
            AuthField::Email => "Email",
            AuthField::Age => "Age",
            AuthField::Password => "Password",
            AuthField::ConfirmPassword => "Confirm Password",
        }
    }

    /// Fields shown for a mode, in display order.
    pub fn fields_for(mode: FormMode) -> &'static [AuthField] {
        match mode {
            FormMode::Login => &[AuthField::Username, AuthField::Email, AuthField::Password],
            FormMode::Register => &[
                AuthField::Name,
                AuthField::Username,
                AuthField::Email,
                AuthField::Age,
                AuthField::Password,
                AuthField::ConfirmPassword,
            ],
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, AuthField::Password | AuthField::ConfirmPassword)
    }
}

/// The login / registration form as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthForm {
    pub mode: FormMode,
    pub name: String,
    pub username: String,
    pub email: String,
    pub age: String,
    pub password: String,
    pub confirm_password: String,
}

impl AuthForm {
    pub fn new(mode: FormMode) -> Self {
        Self { mode, ..Self::default() }
    }

    pub fn field(&self, field: AuthField) -> &str {
        match field {
            AuthField::Name => &self.name,
            AuthField::Username => &self.username,
            AuthField::Email => &self.email,
            AuthField::Age => &self.age,
            AuthField::Password => &self.password,
            AuthField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn field_mut(&mut self, field: AuthField) -> &mut String {
        match field {
            AuthField::Name => &mut self.name,
            AuthField::Username => &mut self.username,
            AuthField::Email => &mut self.email,
            AuthField::Age => &mut self.age,
            AuthField::Password => &mut self.password,
            AuthField::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// Runs every check for the current mode.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();

        for &field in AuthField::fields_for(self.mode) {
            let value = self.field(field);
            if value.trim().is_empty() {
                errors.missing_required = true;
                errors.fields.insert(field, format!("{} is required", field.label()));
                continue;
            }
            if let Some(message) = self.check_format(field, value) {
                errors.fields.insert(field, message.to_string());
            }
        }

        errors
    }

    fn check_format(&self, field: AuthField, value: &str) -> Option<&'static str> {
        match (self.mode, field) {
            (_, AuthField::Email) => validate_email(value),
            (FormMode::Register, AuthField::Name) => validate_name(value),
            (FormMode::Register, AuthField::Username) => validate_username(value),
            (FormMode::Register, AuthField::Age) => validate_age(value),
            (FormMode::Register, AuthField::Password) => validate_password(value),
            (FormMode::Register, AuthField::ConfirmPassword) => {
                validate_confirmation(&self.password, value)
            }
            _ => None,
        }
    }
}

pub fn validate_email(value: &str) -> Option<&'static str> {
    (!EMAIL_RE.is_match(value)).then_some("Please enter a valid email address")
}

pub fn validate_name(value: &str) -> Option<&'static str> {
    if value.chars().count() < 2 {
        Some("Name must be at least 2 characters")
    } else if !NAME_RE.is_match(value) {
        Some("Name should only contain letters and spaces")
    } else {
        None
    }
}

pub fn validate_username(value: &str) -> Option<&'static str> {
    if value.chars().count() < 3 {
        Some("Username must be at least 3 characters")
    } else if !USERNAME_RE.is_match(value) {
        Some("Username can only contain letters, numbers, and underscores")
    } else {
        None
    }
}

/// Accepts only a whole number of years; `"25.7"` and `"25abc"` are rejected.
pub fn validate_age(value: &str) -> Option<&'static str> {
    match value.trim().parse::<i64>() {
        Ok(age) if (MIN_AGE..=MAX_AGE).contains(&age) => None,
        Ok(_) => Some("You must be between 13 and 120 years old"),
        Err(_) => Some("Age must be a whole number"),
    }
}

pub fn validate_password(value: &str) -> Option<&'static str> {
    (value.chars().count() < MIN_PASSWORD_LEN).then_some("Password must be at least 6 characters")
}

pub fn validate_confirmation(password: &str, confirmation: &str) -> Option<&'static str> {
    (password != confirmation).then_some("Passwords do not match")
}

/// Per-field messages plus the "all fields should be filled" flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<AuthField, String>,
    missing_required: bool,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && !self.missing_required
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, field: AuthField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn clear_field(&mut self, field: AuthField) {
        self.fields.remove(&field);
    }

    pub fn all_fields_required(&self) -> bool {
        self.missing_required
    }

    pub fn general_message(&self) -> Option<&'static str> {
        self.missing_required.then_some(ALL_FIELDS_REQUIRED)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AuthField, &str)> {
        self.fields.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_registration() -> AuthForm {
        AuthForm {
            mode: FormMode::Register,
            name: "Jane Doe".to_string(),
            username: "jane_doe".to_string(),
            email: "jane@example.com".to_string(),
            age: "29".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_empty_login_form_reports_every_required_field() {
        let errors = AuthForm::new(FormMode::Login).validate();

        assert!(errors.all_fields_required());
        assert_eq!(errors.general_message(), Some(ALL_FIELDS_REQUIRED));
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(AuthField::Username), Some("Username is required"));
        assert_eq!(errors.get(AuthField::Email), Some("Email is required"));
        assert_eq!(errors.get(AuthField::Password), Some("Password is required"));
    }

    #[test]
    fn test_empty_registration_form_reports_every_required_field() {
        let errors = AuthForm::new(FormMode::Register).validate();

        assert!(errors.all_fields_required());
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get(AuthField::Name), Some("Full Name is required"));
        assert_eq!(errors.get(AuthField::ConfirmPassword), Some("Confirm Password is required"));
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut form = AuthForm::new(FormMode::Login);
        form.username = "   ".to_string();
        form.email = "a@b.co".to_string();
        form.password = "password".to_string();

        let errors = form.validate();
        assert!(errors.all_fields_required());
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_valid_registration_passes() {
        assert!(valid_registration().validate().is_empty());
    }

    #[test]
    fn test_bad_email_is_reported_regardless_of_other_fields() {
        let mut form = valid_registration();
        form.email = "not-an-email".to_string();
        let errors = form.validate();
        assert_eq!(errors.get(AuthField::Email), Some("Please enter a valid email address"));
        assert_eq!(errors.len(), 1);
        assert!(!errors.all_fields_required());

        let mut form = AuthForm::new(FormMode::Register);
        form.email = "not-an-email".to_string();
        assert_eq!(
            form.validate().get(AuthField::Email),
            Some("Please enter a valid email address")
        );

        let mut login = AuthForm::new(FormMode::Login);
        login.email = "not-an-email".to_string();
        assert_eq!(
            login.validate().get(AuthField::Email),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_name_rules() {
        assert_eq!(validate_name("J"), Some("Name must be at least 2 characters"));
        assert_eq!(validate_name("R2D2"), Some("Name should only contain letters and spaces"));
        assert_eq!(validate_name("Mary Ann"), None);
    }

    #[test]
    fn test_username_rules() {
        assert_eq!(validate_username("ab"), Some("Username must be at least 3 characters"));
        assert_eq!(
            validate_username("jane.doe"),
            Some("Username can only contain letters, numbers, and underscores")
        );
        assert_eq!(validate_username("jane_99"), None);
    }

    #[test]
    fn test_age_bounds() {
        assert!(validate_age("12").is_some());
        assert!(validate_age("13").is_none());
        assert!(validate_age("120").is_none());
        assert!(validate_age("121").is_some());
        assert_eq!(validate_age("abc"), Some("Age must be a whole number"));
        assert_eq!(validate_age("25.7"), Some("Age must be a whole number"));
        assert_eq!(validate_age("25abc"), Some("Age must be a whole number"));
        assert_eq!(validate_age("121"), Some("You must be between 13 and 120 years old"));
    }

    #[test]
    fn test_password_rules() {
        let mut form = valid_registration();
        form.password = "abc".to_string();
        form.confirm_password = "abd".to_string();

        let errors = form.validate();
        assert_eq!(errors.get(AuthField::Password), Some("Password must be at least 6 characters"));
        assert_eq!(errors.get(AuthField::ConfirmPassword), Some("Passwords do not match"));
    }

    #[test]
    fn test_login_mode_skips_registration_only_rules() {
        let form = AuthForm {
            mode: FormMode::Login,
            username: "jd".to_string(),
            email: "jd@example.com".to_string(),
            password: "abc".to_string(),
            ..AuthForm::default()
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_clear_field() {
        let mut errors = AuthForm::new(FormMode::Login).validate();
        errors.clear_field(AuthField::Email);
        assert!(errors.get(AuthField::Email).is_none());
        assert_eq!(errors.len(), 2);
    }
}
