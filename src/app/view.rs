// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar sits above the active screen; toasts float over both.

use super::{Message, Screen};
use crate::domain::account::AccountBook;
use crate::domain::site::SiteSettings;
use crate::i18n::I18n;
use crate::ui::home::{self, Showcase};
use crate::ui::theming::ThemeMode;
use crate::ui::{admin, auth, navbar, notifications, profile, studio};
use iced::widget::{scrollable, Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub site: &'a SiteSettings,
    pub theme_mode: ThemeMode,
    pub accounts: &'a AccountBook,
    pub showcase: &'a Showcase,
    pub auth: &'a auth::State,
    pub studio: &'a studio::State,
    pub admin: &'a admin::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let user = ctx.accounts.current_user();

    let navbar = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        site: ctx.site,
        user,
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match (ctx.screen, user) {
        (Screen::Home, _) => scrollable(
            home::view(home::ViewContext {
                i18n: ctx.i18n,
                site: ctx.site,
                showcase: ctx.showcase,
            })
            .map(Message::Home),
        )
        .into(),
        (Screen::Studio, Some(user)) => scrollable(
            studio::view(studio::ViewContext {
                i18n: ctx.i18n,
                state: ctx.studio,
                user: Some(user),
            })
            .map(Message::Studio),
        )
        .into(),
        (Screen::Profile, Some(user)) => scrollable(
            profile::view(profile::ViewContext {
                i18n: ctx.i18n,
                user,
                theme_mode: ctx.theme_mode,
            })
            .map(Message::Profile),
        )
        .into(),
        (Screen::Admin, Some(_)) => admin::view(admin::ViewContext {
            i18n: ctx.i18n,
            state: ctx.admin,
            users: ctx.accounts.users(),
            site: ctx.site,
        })
        .map(Message::Admin),
        // Session-bound screens fall back to the form when signed out.
        (Screen::Auth | Screen::Studio | Screen::Profile | Screen::Admin, _) => {
            auth::view(auth::ViewContext {
                i18n: ctx.i18n,
                state: ctx.auth,
            })
            .map(Message::Auth)
        }
    };

    let page = Column::new()
        .push(navbar)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = ctx
        .notifications
        .view(ctx.i18n)
        .map(Message::Notification);

    Stack::new().push(page).push(toasts).into()
}
