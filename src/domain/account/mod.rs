// SPDX-License-Identifier: MPL-2.0
//! User accounts, credits and administration.
//!
//! [`AccountBook`] is the single source of truth for every user record and
//! for the signed-in session. The "current user" is always looked up from the
//! book, never kept as a separate copy.
//!
//! Passwords are stored and compared as plain text; this layer is a local
//! convenience, not a security boundary.

mod error;

pub use error::AccountError;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Credits granted to a new account.
pub const SIGNUP_CREDITS: u32 = 5;

/// Credits added or removed by one admin adjustment.
pub const ADMIN_CREDIT_STEP: u32 = 5;

/// Display name used when the signup form leaves it blank.
pub const DEFAULT_DISPLAY_NAME: &str = "New Operator";

const AVATAR_URL_PREFIX: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

/// Subscription tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Free,
    Subscriber,
    Vip,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Free, UserRole::Subscriber, UserRole::Vip];

    /// Returns the i18n key of the role name.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            UserRole::Free => "role-free",
            UserRole::Subscriber => "role-subscriber",
            UserRole::Vip => "role-vip",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Free => write!(f, "free"),
            UserRole::Subscriber => write!(f, "subscriber"),
            UserRole::Vip => write!(f, "vip"),
        }
    }
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Avatar image URL.
    pub photo: String,
    pub credits: u32,
    pub is_admin: bool,
    pub role: UserRole,
    pub is_suspended: bool,
    #[serde(default)]
    pub password: Option<String>,
}

impl User {
    /// Whether enhancement runs are free for this user.
    #[must_use]
    pub fn has_unlimited_credits(&self) -> bool {
        self.role == UserRole::Vip || self.is_admin
    }
}

/// Signup or login form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Outcome of charging one enhancement run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditCharge {
    /// VIP or administrator: nothing was deducted.
    Unmetered,
    /// One credit was deducted.
    Charged { remaining: u32 },
}

/// Administrative operations on another account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    AddCredits,
    RemoveCredits,
    SetRole(UserRole),
    ToggleSuspend,
}

/// Every user record plus the signed-in session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountBook {
    #[serde(default)]
    users: Vec<User>,
    #[serde(default)]
    session: Option<String>,
}

impl AccountBook {
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The signed-in user, resolved from the book.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        let id = self.session.as_deref()?;
        self.find(id)
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        let email = normalize_email(email);
        self.users.iter().find(|user| user.email == email)
    }

    /// Registers a new account and signs it in.
    ///
    /// `admin_email` grants administrator rights to the matching address;
    /// `now_millis` seeds the account id.
    pub fn signup(
        &mut self,
        credentials: &Credentials,
        admin_email: &str,
        now_millis: i64,
    ) -> Result<&User, AccountError> {
        let email = normalize_email(&credentials.email);
        if email.is_empty() {
            return Err(AccountError::MissingEmail);
        }
        if self.find_by_email(&email).is_some() {
            return Err(AccountError::AlreadyExists);
        }

        let name = match credentials.name.trim() {
            "" => DEFAULT_DISPLAY_NAME.to_string(),
            name => name.to_string(),
        };

        let user = User {
            id: self.next_id(now_millis),
            name,
            photo: format!("{AVATAR_URL_PREFIX}{email}"),
            credits: SIGNUP_CREDITS,
            is_admin: !admin_email.trim().is_empty() && email == normalize_email(admin_email),
            role: UserRole::Free,
            is_suspended: false,
            password: Some(credentials.password.clone()),
            email,
        };

        self.session = Some(user.id.clone());
        self.users.push(user);
        Ok(&self.users[self.users.len() - 1])
    }

    /// Signs in an existing account.
    pub fn login(&mut self, email: &str, password: &str) -> Result<&User, AccountError> {
        let user = self.find_by_email(email).ok_or(AccountError::NotFound)?;

        if user.is_suspended {
            return Err(AccountError::Suspended);
        }
        // An empty stored password means the account has none.
        let stored = user.password.as_deref().filter(|stored| !stored.is_empty());
        if stored.is_some_and(|stored| stored != password) {
            return Err(AccountError::InvalidPassword);
        }

        let id = user.id.clone();
        self.session = Some(id.clone());
        self.find(&id).ok_or(AccountError::NotFound)
    }

    pub fn logout(&mut self) {
        self.session = None;
    }

    /// Charges one enhancement run to the signed-in user.
    pub fn deduct_credit(&mut self) -> Result<CreditCharge, AccountError> {
        let id = self.session.clone().ok_or(AccountError::NotSignedIn)?;
        let user = self.user_mut(&id).ok_or(AccountError::NotSignedIn)?;

        if user.is_suspended {
            return Err(AccountError::Suspended);
        }
        if user.has_unlimited_credits() {
            return Ok(CreditCharge::Unmetered);
        }
        if user.credits == 0 {
            return Err(AccountError::CreditsDepleted);
        }

        user.credits -= 1;
        Ok(CreditCharge::Charged {
            remaining: user.credits,
        })
    }

    /// Gives back a credit taken by [`deduct_credit`](Self::deduct_credit)
    /// when the run could not be started.
    pub fn refund_credit(&mut self, charge: CreditCharge) {
        if let CreditCharge::Charged { .. } = charge {
            if let Some(id) = self.session.clone() {
                if let Some(user) = self.user_mut(&id) {
                    user.credits = user.credits.saturating_add(1);
                }
            }
        }
    }

    /// Applies an administrative action. The signed-in user must be an
    /// administrator.
    pub fn admin_action(
        &mut self,
        target_id: &str,
        action: AdminAction,
    ) -> Result<&User, AccountError> {
        if !self.current_user().is_some_and(|user| user.is_admin) {
            return Err(AccountError::Unauthorized);
        }

        let user = self.user_mut(target_id).ok_or(AccountError::NotFound)?;
        match action {
            AdminAction::AddCredits => user.credits = user.credits.saturating_add(ADMIN_CREDIT_STEP),
            AdminAction::RemoveCredits => {
                user.credits = user.credits.saturating_sub(ADMIN_CREDIT_STEP);
            }
            AdminAction::SetRole(role) => user.role = role,
            AdminAction::ToggleSuspend => user.is_suspended = !user.is_suspended,
        }

        self.find(target_id).ok_or(AccountError::NotFound)
    }

    fn user_mut(&mut self, id: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.id == id)
    }

    fn next_id(&self, now_millis: i64) -> String {
        let base = format!("u_{now_millis}");
        if self.find(&base).is_none() {
            return base;
        }
        (1..)
            .map(|n| format!("{base}_{n}"))
            .find(|candidate| self.find(candidate).is_none())
            .unwrap_or(base)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN: &str = "admin@neoenhance.local";

    fn credentials(name: &str, email: &str, password: &str) -> Credentials {
        Credentials {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    fn book_with_user() -> AccountBook {
        let mut book = AccountBook::default();
        book.signup(&credentials("Ada", "ada@example.com", "pw"), ADMIN, 1)
            .unwrap();
        book
    }

    #[test]
    fn signup_creates_free_account_and_signs_in() {
        let mut book = AccountBook::default();
        let user = book
            .signup(&credentials("", "  Ada@Example.COM ", "pw"), ADMIN, 1_700_000)
            .unwrap()
            .clone();

        assert_eq!(user.id, "u_1700000");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.name, DEFAULT_DISPLAY_NAME);
        assert_eq!(user.credits, SIGNUP_CREDITS);
        assert_eq!(user.role, UserRole::Free);
        assert!(!user.is_admin);
        assert!(user.photo.ends_with("seed=ada@example.com"));
        assert_eq!(book.current_user(), Some(&user));
    }

    #[test]
    fn signup_rejects_duplicate_email() {
        let mut book = book_with_user();
        let result = book.signup(&credentials("x", "ADA@example.com", "other"), ADMIN, 2);
        assert_eq!(result.unwrap_err(), AccountError::AlreadyExists);
    }

    #[test]
    fn signup_requires_email() {
        let mut book = AccountBook::default();
        let result = book.signup(&credentials("x", "  ", "pw"), ADMIN, 2);
        assert_eq!(result.unwrap_err(), AccountError::MissingEmail);
    }

    #[test]
    fn signup_with_admin_email_grants_admin() {
        let mut book = AccountBook::default();
        let user = book
            .signup(&credentials("Root", "ADMIN@neoenhance.local", "pw"), ADMIN, 3)
            .unwrap();
        assert!(user.is_admin);
    }

    #[test]
    fn ids_stay_unique_within_the_same_millisecond() {
        let mut book = AccountBook::default();
        book.signup(&credentials("a", "a@x.io", ""), ADMIN, 7).unwrap();
        let second = book.signup(&credentials("b", "b@x.io", ""), ADMIN, 7).unwrap();
        assert_eq!(second.id, "u_7_1");
    }

    #[test]
    fn login_checks_password_and_suspension() {
        let mut book = book_with_user();
        book.logout();

        assert_eq!(book.login("nobody@example.com", "pw").unwrap_err(), AccountError::NotFound);
        assert_eq!(book.login("ada@example.com", "nope").unwrap_err(), AccountError::InvalidPassword);
        assert!(book.current_user().is_none());

        assert_eq!(book.login("ADA@example.com", "pw").unwrap().name, "Ada");
        assert!(book.current_user().is_some());
    }

    #[test]
    fn account_without_password_accepts_any_password() {
        let mut book = AccountBook::default();
        book.signup(&credentials("Ada", "ada@example.com", ""), ADMIN, 1)
            .unwrap();
        book.logout();

        assert_eq!(book.login("ada@example.com", "anything").unwrap().name, "Ada");
        book.logout();
        assert!(book.login("ada@example.com", "").is_ok());
    }

    #[test]
    fn suspended_user_cannot_log_in() {
        let mut book = book_with_user();
        book.users[0].is_suspended = true;
        book.logout();
        assert_eq!(book.login("ada@example.com", "pw").unwrap_err(), AccountError::Suspended);
    }

    #[test]
    fn deduct_credit_until_depleted() {
        let mut book = book_with_user();
        for expected in (0..SIGNUP_CREDITS).rev() {
            assert_eq!(
                book.deduct_credit().unwrap(),
                CreditCharge::Charged { remaining: expected }
            );
        }
        assert_eq!(book.deduct_credit().unwrap_err(), AccountError::CreditsDepleted);
        assert_eq!(book.current_user().map(|u| u.credits), Some(0));
    }

    #[test]
    fn vip_runs_are_unmetered() {
        let mut book = book_with_user();
        book.users[0].role = UserRole::Vip;
        assert_eq!(book.deduct_credit().unwrap(), CreditCharge::Unmetered);
        assert_eq!(book.current_user().map(|u| u.credits), Some(SIGNUP_CREDITS));
    }

    #[test]
    fn deduct_credit_requires_session() {
        let mut book = book_with_user();
        book.logout();
        assert_eq!(book.deduct_credit().unwrap_err(), AccountError::NotSignedIn);
    }

    #[test]
    fn refund_restores_charged_credit() {
        let mut book = book_with_user();
        let charge = book.deduct_credit().unwrap();
        book.refund_credit(charge);
        assert_eq!(book.current_user().map(|u| u.credits), Some(SIGNUP_CREDITS));

        book.refund_credit(CreditCharge::Unmetered);
        assert_eq!(book.current_user().map(|u| u.credits), Some(SIGNUP_CREDITS));
    }

    #[test]
    fn admin_actions_require_admin() {
        let mut book = book_with_user();
        let id = book.users[0].id.clone();
        assert_eq!(
            book.admin_action(&id, AdminAction::AddCredits).unwrap_err(),
            AccountError::Unauthorized
        );
    }

    #[test]
    fn admin_can_manage_other_accounts() {
        let mut book = book_with_user();
        let target = book.users[0].id.clone();
        book.signup(&credentials("Root", ADMIN, "root"), ADMIN, 99).unwrap();

        let user = book.admin_action(&target, AdminAction::AddCredits).unwrap();
        assert_eq!(user.credits, SIGNUP_CREDITS + ADMIN_CREDIT_STEP);

        book.admin_action(&target, AdminAction::RemoveCredits).unwrap();
        book.admin_action(&target, AdminAction::RemoveCredits).unwrap();
        assert_eq!(book.find(&target).map(|u| u.credits), Some(0));

        book.admin_action(&target, AdminAction::SetRole(UserRole::Subscriber))
            .unwrap();
        assert_eq!(book.find(&target).map(|u| u.role), Some(UserRole::Subscriber));

        assert!(book.admin_action(&target, AdminAction::ToggleSuspend).unwrap().is_suspended);
        assert!(!book.admin_action(&target, AdminAction::ToggleSuspend).unwrap().is_suspended);

        assert_eq!(
            book.admin_action("u_missing", AdminAction::AddCredits).unwrap_err(),
            AccountError::NotFound
        );
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(UserRole::Vip.to_string(), "vip");
        assert_eq!(UserRole::Subscriber.i18n_key(), "role-subscriber");
    }
}
