// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration entries.
//!
//! # Categories
//!
//! - **General**: Log level and the administrator account
//! - **Enhance**: Remote model endpoint, model id, key variable, output size
//!
//! Site branding defaults live next to [`SiteSettings`].
//!
//! [`SiteSettings`]: crate::domain::site::SiteSettings

// ==========================================================================
// General Defaults
// ==========================================================================

/// Log level used when neither `RUST_LOG` nor `--debug` is given.
pub const DEFAULT_LOG_LEVEL: &str = crate::logging::DEFAULT_LOG_LEVEL;

/// Email that receives administrator rights on signup.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@neoenhance.local";

// ==========================================================================
// Enhance Defaults
// ==========================================================================

pub use crate::infrastructure::gemini::{DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL};

/// Output resolution class requested from the model.
pub const DEFAULT_IMAGE_SIZE: &str = "4K";
