// SPDX-License-Identifier: MPL-2.0
//! Persistence of accounts and preferences.
//!
//! Failures never interrupt the session: they surface as warning toasts and
//! the in-memory state stays authoritative.

use super::config::{self, Config};
use crate::domain::account::AccountBook;
use crate::i18n::I18n;
use crate::infrastructure::account_store;
use crate::ui::notifications::{Manager, Notification};
use std::path::{Path, PathBuf};
use unic_langid::LanguageIdentifier;

/// Writes the account book. Returns `true` when the file was written.
pub fn persist_accounts(
    accounts: &AccountBook,
    data_dir: Option<&Path>,
    notifications: &mut Manager,
) -> bool {
    match account_store::save_to(accounts, data_dir) {
        None => true,
        Some(key) => {
            notifications.push(Notification::warning(key));
            false
        }
    }
}

/// Writes `settings.toml`.
pub fn persist_config(config: &Config, config_dir: Option<PathBuf>, notifications: &mut Manager) {
    if let Err(err) = config::save_with_override(config, config_dir) {
        tracing::warn!(%err, "cannot save settings");
        notifications.push(Notification::warning("notification-config-save-error"));
    }
}

/// Applies the newly selected locale and stores it in the config.
pub fn apply_language_change(i18n: &mut I18n, config: &mut Config, locale: LanguageIdentifier) {
    tracing::info!(%locale, "language changed");
    config.general.language = Some(locale.to_string());
    i18n.set_locale(locale);
}
