// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Screens follow the Elm-style "state down, messages up" pattern: each one
//! exposes a `ViewContext`, a `Message`, and (where the application has to
//! react) an `Event` returned from `update`.
//!
//! # Screens
//!
//! - [`home`] - Landing page with a live before/after showcase
//! - [`auth`] - Login and signup form
//! - [`studio`] - Source image, style, instructions and result
//! - [`profile`] - Balance, preferences and admin shortcuts
//! - [`admin`] - Site settings, system check and user management
//!
//! # Shared Infrastructure
//!
//! - [`comparison`] - Before/after comparison slider widget
//! - [`navbar`] - Top bar with branding, navigation and balance
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System mode and the site-branded theme

pub mod admin;
pub mod auth;
pub mod comparison;
pub mod design_tokens;
pub mod home;
pub mod navbar;
pub mod notifications;
pub mod profile;
pub mod studio;
pub mod styles;
pub mod theming;
