// SPDX-License-Identifier: MPL-2.0
//! Account persistence using CBOR format.
//!
//! The whole [`AccountBook`] (users plus the signed-in session) is stored in
//! a single `accounts.cbor` file inside the application data directory.
//! Writes replace the file; there is no journaling.
//!
//! Failures never abort the application: loading falls back to an empty
//! book and both directions report an i18n warning key instead.

use crate::domain::account::AccountBook;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Account file name within the app data directory.
pub const ACCOUNTS_FILE: &str = "accounts.cbor";

/// Returns the account file path inside `data_dir`.
#[must_use]
pub fn accounts_path(data_dir: &Path) -> PathBuf {
    data_dir.join(ACCOUNTS_FILE)
}

/// Loads the account book from `data_dir`.
///
/// Returns an empty book without a warning when the directory is unknown or
/// the file does not exist yet.
#[must_use]
pub fn load_from(data_dir: Option<&Path>) -> (AccountBook, Option<String>) {
    let Some(dir) = data_dir else {
        return (AccountBook::default(), None);
    };

    let path = accounts_path(dir);
    if !path.exists() {
        return (AccountBook::default(), None);
    }

    match fs::File::open(&path) {
        Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
            Ok(book) => (book, None),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "account file is corrupted");
                (
                    AccountBook::default(),
                    Some("notification-accounts-parse-error".to_string()),
                )
            }
        },
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "cannot read account file");
            (
                AccountBook::default(),
                Some("notification-accounts-read-error".to_string()),
            )
        }
    }
}

/// Saves the account book into `data_dir`, creating the directory if needed.
///
/// Returns a warning key if the book could not be written.
#[must_use]
pub fn save_to(book: &AccountBook, data_dir: Option<&Path>) -> Option<String> {
    let Some(dir) = data_dir else {
        return Some("notification-accounts-path-error".to_string());
    };

    if fs::create_dir_all(dir).is_err() {
        return Some("notification-accounts-dir-error".to_string());
    }

    let path = accounts_path(dir);
    match fs::File::create(&path) {
        Ok(file) => {
            if let Err(err) = ciborium::into_writer(book, BufWriter::new(file)) {
                tracing::warn!(path = %path.display(), %err, "cannot write account file");
                return Some("notification-accounts-write-error".to_string());
            }
            tracing::debug!(users = book.users().len(), "accounts saved");
            None
        }
        Err(_) => Some("notification-accounts-create-error".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::{Credentials, UserRole};
    use tempfile::tempdir;

    fn credentials(email: &str) -> Credentials {
        Credentials {
            name: "Ada".to_string(),
            email: email.to_string(),
            password: "pw".to_string(),
        }
    }

    #[test]
    fn load_from_empty_directory_returns_empty_book() {
        let temp_dir = tempdir().expect("create temp dir");
        let (book, warning) = load_from(Some(temp_dir.path()));
        assert!(warning.is_none());
        assert!(book.users().is_empty());
        assert!(book.current_user().is_none());
    }

    #[test]
    fn load_without_directory_returns_empty_book() {
        let (book, warning) = load_from(None);
        assert!(warning.is_none());
        assert!(book.users().is_empty());
    }

    #[test]
    fn save_without_directory_warns() {
        assert_eq!(
            save_to(&AccountBook::default(), None).as_deref(),
            Some("notification-accounts-path-error")
        );
    }

    #[test]
    fn saved_book_survives_reload_with_session() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut book = AccountBook::default();
        book.signup(&credentials("ada@example.com"), "root@example.com", 1_000)
            .expect("signup");

        assert!(save_to(&book, Some(temp_dir.path())).is_none());
        assert!(temp_dir.path().join(ACCOUNTS_FILE).exists());

        let (loaded, warning) = load_from(Some(temp_dir.path()));
        assert!(warning.is_none());
        assert_eq!(loaded, book);
        let user = loaded.current_user().expect("session restored");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.role, UserRole::Free);
    }

    #[test]
    fn corrupted_file_falls_back_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(ACCOUNTS_FILE), "not cbor").expect("write file");

        let (book, warning) = load_from(Some(temp_dir.path()));
        assert_eq!(warning.as_deref(), Some("notification-accounts-parse-error"));
        assert!(book.users().is_empty());
    }

    #[test]
    fn save_creates_nested_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested = temp_dir.path().join("a").join("b");
        assert!(save_to(&AccountBook::default(), Some(&nested)).is_none());
        assert!(accounts_path(&nested).exists());
    }
}
