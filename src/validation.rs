//! Client-side field checks run before any request is sent.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$").expect("Invalid email regex")
});

/// A form failed local validation. The display text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter both username and password.")]
    MissingCredentials,

    #[error("Please fill in all fields.")]
    MissingFields,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Invalid email address.")]
    InvalidEmail,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_credentials(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(())
}

/// Borrowed view of the registration form fields.
#[derive(Debug, Clone, Copy)]
pub struct SignupFields<'a> {
    pub username: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

/// Checks run in order: emptiness, password confirmation, email format.
pub fn validate_signup(fields: &SignupFields<'_>) -> Result<(), ValidationError> {
    let any_empty = [
        fields.username,
        fields.name,
        fields.email,
        fields.password,
        fields.confirm_password,
    ]
    .iter()
    .any(|value| value.is_empty());

    if any_empty {
        return Err(ValidationError::MissingFields);
    }
    if fields.password != fields.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if !is_valid_email(fields.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}
