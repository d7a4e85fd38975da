// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Auth,
    Studio,
    Profile,
    Admin,
}

impl Screen {
    /// Whether the screen needs a signed-in user.
    #[must_use]
    pub fn requires_session(self) -> bool {
        matches!(self, Screen::Studio | Screen::Profile | Screen::Admin)
    }
}
