// SPDX-License-Identifier: MPL-2.0
//! `neo_enhance` is an image enhancement studio built with the Iced GUI
//! framework.
//!
//! A photo is sent with a style preset and free-text instructions to a
//! generative image model, and the result is shown next to the original in
//! a before/after comparison slider. Accounts, credits and site branding are
//! kept in local files.

#![doc(html_root_url = "https://docs.rs/neo_enhance/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod ui;
