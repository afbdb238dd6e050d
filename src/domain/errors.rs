use thiserror::Error;

use super::validation::FormErrors;

/// Reasons a login or registration attempt is turned away.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("form has {} invalid field(s)", .0.len())]
    Validation(FormErrors),
    #[error("Incorrect password. Please try again.")]
    IncorrectPassword,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("no user is signed in")]
    NoActiveUser,
    #[error("invalid value for {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },
}

pub type AuthResult<T> = Result<T, AuthError>;
pub type SessionResult<T> = Result<T, SessionError>;
