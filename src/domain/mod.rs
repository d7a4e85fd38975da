// SPDX-License-Identifier: MPL-2.0
//! Domain layer - core business rules.
//!
//! This module contains value objects and business rules with no dependency
//! on the GUI toolkit or on I/O. Records that are persisted derive `serde`
//! traits; nothing else beyond `std` is used.
//!
//! # Modules
//!
//! - [`account`]: Users, roles and credits ([`AccountBook`](account::AccountBook))
//! - [`comparison`]: Comparison divider position ([`SplitPercent`](comparison::SplitPercent))
//! - [`enhance`]: Style catalog and prompt composition ([`EnhanceRequest`](enhance::EnhanceRequest))
//! - [`site`]: Branding and pricing ([`SiteSettings`](site::SiteSettings))

pub mod account;
pub mod comparison;
pub mod enhance;
pub mod site;
