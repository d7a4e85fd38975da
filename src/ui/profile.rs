// SPDX-License-Identifier: MPL-2.0
//! Profile screen: identity card, balance, preferences and admin shortcuts.

use crate::domain::account::{User, UserRole};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};
use unic_langid::LanguageIdentifier;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub user: &'a User,
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Logout,
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    /// Administrators only: add credits to their own account.
    RefillCredits,
    /// Administrators only: switch their own account to VIP.
    UnlockVip,
    /// Administrators only: charge one credit without running the enhancer.
    TestCharge,
    OpenAdmin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Logout,
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    RefillCredits,
    UnlockVip,
    TestCharge,
    OpenAdmin,
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Logout => Event::Logout,
        Message::LanguageSelected(locale) => Event::LanguageSelected(locale),
        Message::ThemeModeSelected(mode) => Event::ThemeModeSelected(mode),
        Message::RefillCredits => Event::RefillCredits,
        Message::UnlockVip => Event::UnlockVip,
        Message::TestCharge => Event::TestCharge,
        Message::OpenAdmin => Event::OpenAdmin,
    }
}

/// Large balance figure: `∞` for unmetered accounts.
#[must_use]
pub fn balance_figure(user: &User) -> String {
    if user.role == UserRole::Vip {
        "∞".to_string()
    } else {
        user.credits.to_string()
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let user = ctx.user;

    let role = Container::new(Text::new(i18n.tr(user.role.i18n_key())).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::pill(if user.is_admin {
            palette::WARNING_500
        } else {
            palette::PRIMARY_500
        }));

    let identity = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(user.name.clone()).size(typography::TITLE_LG))
        .push(Text::new(user.email.clone()).size(typography::BODY))
        .push(role);

    let logout = button(Text::new(i18n.tr("profile-logout")))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::danger)
        .on_press(Message::Logout);

    let header = Container::new(
        Row::new()
            .spacing(spacing::LG)
            .push(Container::new(identity).width(Length::Fill))
            .push(logout),
    )
    .padding(spacing::XL)
    .style(styles::container::card);

    let balance = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("profile-balance-title")).size(typography::CAPTION))
            .push(Text::new(balance_figure(user)).size(typography::TITLE_XL))
            .push(Text::new(i18n.tr("profile-balance-unit")).size(typography::CAPTION)),
    )
    .padding(spacing::XL)
    .style(styles::container::card);

    let side: Element<'a, Message> = if user.is_admin {
        admin_panel(i18n)
    } else {
        Container::new(
            Column::new()
                .spacing(spacing::SM)
                .push(Text::new(i18n.tr("profile-status-title")).size(typography::CAPTION))
                .push(Text::new(i18n.tr("profile-status-online")).size(typography::BODY_LG))
                .push(Text::new(i18n.tr("profile-status-contact-admin")).size(typography::BODY)),
        )
        .padding(spacing::XL)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
    };

    Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .push(header)
        .push(Row::new().spacing(spacing::LG).push(balance).push(side))
        .push(preferences(&ctx))
        .into()
}

fn admin_panel<'a>(i18n: &I18n) -> Element<'a, Message> {
    let tile = |title: String, body: String, message: Message| {
        button(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(title).size(typography::BODY_LG))
                .push(Text::new(body).size(typography::CAPTION)),
        )
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::button::unselected)
        .on_press(message)
    };

    let header = Row::new()
        .spacing(spacing::SM)
        .push(
            Container::new(Text::new(i18n.tr("profile-admin-title")).size(typography::CAPTION))
                .width(Length::Fill),
        )
        .push(
            button(Text::new(i18n.tr("profile-admin-test-charge")).size(typography::CAPTION))
                .style(button::text)
                .on_press(Message::TestCharge),
        );

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(
                Row::new()
                    .spacing(spacing::MD)
                    .push(tile(
                        i18n.tr("profile-admin-refill"),
                        i18n.tr("profile-admin-refill-hint"),
                        Message::RefillCredits,
                    ))
                    .push(tile(
                        i18n.tr("profile-admin-vip"),
                        i18n.tr("profile-admin-vip-hint"),
                        Message::UnlockVip,
                    )),
            )
            .push(
                button(Container::new(Text::new(i18n.tr("profile-admin-open"))).center_x(Length::Fill))
                    .width(Length::Fill)
                    .padding(spacing::MD)
                    .style(styles::button::selected)
                    .on_press(Message::OpenAdmin),
            ),
    )
    .padding(spacing::XL)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn preferences<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let current = i18n.current_locale();

    let languages = i18n
        .available_locales()
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, locale| {
            let name = i18n.tr(&format!("language-name-{locale}"));
            row.push(
                button(Text::new(name).size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::choice(locale == current))
                    .on_press(Message::LanguageSelected(locale.clone())),
            )
        });

    let themes = ThemeMode::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, mode| {
            row.push(
                button(Text::new(i18n.tr(mode.i18n_key())).size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::choice(*mode == ctx.theme_mode))
                    .on_press(Message::ThemeModeSelected(*mode)),
            )
        });

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(Text::new(i18n.tr("profile-preferences-title")).size(typography::TITLE_SM))
            .push(Text::new(i18n.tr("profile-language-label")).size(typography::CAPTION))
            .push(languages)
            .push(Text::new(i18n.tr("profile-theme-label")).size(typography::CAPTION))
            .push(themes),
    )
    .padding(spacing::XL)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole, credits: u32) -> User {
        User {
            id: "u_1".into(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            photo: String::new(),
            credits,
            is_admin: false,
            role,
            is_suspended: false,
            password: None,
        }
    }

    #[test]
    fn balance_shows_count_or_infinity() {
        assert_eq!(balance_figure(&user(UserRole::Free, 3)), "3");
        assert_eq!(balance_figure(&user(UserRole::Vip, 0)), "∞");
    }

    #[test]
    fn messages_map_to_events() {
        assert_eq!(update(Message::Logout), Event::Logout);
        assert_eq!(
            update(Message::ThemeModeSelected(ThemeMode::Dark)),
            Event::ThemeModeSelected(ThemeMode::Dark)
        );
        assert_eq!(update(Message::UnlockVip), Event::UnlockVip);
    }
}
