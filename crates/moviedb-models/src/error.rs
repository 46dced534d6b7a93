use std::fmt;
use thiserror::Error;

/// A field value that breaks one of the entity invariants.
///
/// Recoverable: the caller is expected to re-prompt for the offending value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Year should be between {min} and {max}, got {year}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("Running time cannot be a negative number, got {0}")]
    NegativeRunningTime(i32),

    #[error("Username must be written!")]
    BlankUsername,

    #[error("Username must contain only a-z/A-Z/0-9!")]
    InvalidUsername,

    #[error("Password must be written!")]
    BlankPassword,

    #[error("Password must be at least {min} characters, got {len}")]
    PasswordTooShort { len: usize, min: usize },

    #[error("Password must contain only a-z/A-Z/0-9!")]
    InvalidPassword,
}

/// Which credential a [`CredentialError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    Username,
    Password,
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialField::Username => write!(f, "Username"),
            CredentialField::Password => write!(f, "Password"),
        }
    }
}

/// Credential input failure.
///
/// `Missing` means the value was never supplied at all; `Invalid` means it was
/// supplied but is malformed. Callers surface the two differently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("{0} is required")]
    Missing(CredentialField),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}
