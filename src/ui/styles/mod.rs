// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles.
//!
//! Styles read the brand color from the active theme palette, so the site's
//! primary color flows through without extra plumbing.

pub mod button;
pub mod container;
