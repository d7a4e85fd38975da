// SPDX-License-Identifier: MPL-2.0
//! Account errors.

use std::fmt;

/// Failures of account operations, each mapped to a localized message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// No account matches the given email or id.
    NotFound,
    /// Signup with an email that is already registered.
    AlreadyExists,
    /// The account has been suspended by an administrator.
    Suspended,
    /// Stored password does not match.
    InvalidPassword,
    /// Operation requires a signed-in user.
    NotSignedIn,
    /// No credits left on a metered account.
    CreditsDepleted,
    /// Operation requires administrator rights.
    Unauthorized,
    /// Email is blank.
    MissingEmail,
}

impl AccountError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AccountError::NotFound => "error-account-not-found",
            AccountError::AlreadyExists => "error-account-exists",
            AccountError::Suspended => "error-account-suspended",
            AccountError::InvalidPassword => "error-account-invalid-password",
            AccountError::NotSignedIn => "error-account-not-signed-in",
            AccountError::CreditsDepleted => "error-account-credits-depleted",
            AccountError::Unauthorized => "error-account-unauthorized",
            AccountError::MissingEmail => "error-account-missing-email",
        }
    }
}

impl fmt::Display for AccountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountError::NotFound => write!(f, "Account not found"),
            AccountError::AlreadyExists => write!(f, "Account already exists"),
            AccountError::Suspended => write!(f, "Account suspended"),
            AccountError::InvalidPassword => write!(f, "Invalid password"),
            AccountError::NotSignedIn => write!(f, "Not signed in"),
            AccountError::CreditsDepleted => write!(f, "No credits left"),
            AccountError::Unauthorized => write!(f, "Unauthorized operation"),
            AccountError::MissingEmail => write!(f, "Email is required"),
        }
    }
}

impl std::error::Error for AccountError {}
