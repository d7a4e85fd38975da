// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::EnhanceError;
use crate::domain::account::CreditCharge;
use crate::error::Error;
use crate::ui::{admin, auth, home, navbar, notifications, profile, studio};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// screen messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Home(home::Message),
    Auth(auth::Message),
    Studio(studio::Message),
    Profile(profile::Message),
    Admin(admin::Message),
    Notification(notifications::Message),
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// A source image finished decoding.
    SourceLoaded(Result<Vec<u8>, Error>),
    /// The enhancer returned, successfully or not.
    EnhanceFinished {
        charge: CreditCharge,
        result: Result<Vec<u8>, EnhanceError>,
    },
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path to preload into the studio.
    pub file_path: Option<String>,
    /// Optional data directory override (for the account file).
    /// Takes precedence over `NEO_ENHANCE_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `NEO_ENHANCE_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
