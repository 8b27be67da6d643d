//! Credential rules for the edit-profile form
//!
//! Both checks are syntactic only. The email rule is a minimal shape check,
//! not RFC 5322, and says nothing about whether the mailbox exists.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// Minimum password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Why a submission was blocked
///
/// The `Display` text is the exact message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum ValidationError {
    /// Email does not have the `local@domain.tld` shape
    #[error("Invalid email address.")]
    InvalidEmailFormat,

    /// A new password was entered but does not meet the policy
    #[error(
        "Password must be at least 8 characters long, contain at least one uppercase letter, one lowercase letter, and one number."
    )]
    WeakPassword,
}

/// Result type for validation
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Email and password as read from the form at submission time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormCredentials {
    /// Email field value
    pub email: String,
    /// Password field value; empty means the password is not being changed
    pub password: String,
}

impl FormCredentials {
    /// Create credentials from field values
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }

    /// Whether the user is changing their password
    pub fn changes_password(&self) -> bool {
        !self.password.is_empty()
    }

    /// Validate both fields, email first
    ///
    /// Only the first failure is reported.
    pub fn validate(&self) -> Result<()> {
        if !validate_email(&self.email) {
            return Err(ValidationError::InvalidEmailFormat);
        }
        if !validate_password(&self.password) {
            return Err(ValidationError::WeakPassword);
        }
        Ok(())
    }
}

/// Check the `local@domain.tld` shape
///
/// Each of the three parts must be non-empty and free of whitespace and `@`.
/// The byte order mark U+FEFF counts as whitespace here, as it does for
/// browser form checks.
pub fn validate_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$").unwrap()
    });
    re.is_match(email)
}

/// Check a new password against the policy
///
/// An empty password means "keep the current one" and passes. Otherwise it
/// needs at least 8 characters including a lowercase letter, an uppercase
/// letter and a digit. Any other characters are allowed.
pub fn validate_password(password: &str) -> bool {
    if password.is_empty() {
        return true;
    }

    password.chars().count() >= MIN_PASSWORD_LENGTH
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}
