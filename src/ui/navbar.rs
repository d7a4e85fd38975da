// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown above every screen.
//!
//! Left: logo mark and site name (back to home). Right: studio and profile
//! entries with the credit balance when signed in, or a sign-up button.

use crate::domain::account::{User, UserRole};
use crate::domain::site::SiteSettings;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub site: &'a SiteSettings,
    pub user: Option<&'a User>,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    OpenHome,
    OpenStudio,
    OpenProfile,
    OpenAdmin,
    SignUp,
}

/// Balance label: `∞` for VIP members, otherwise the credit count.
pub fn balance_label(i18n: &I18n, user: &User) -> String {
    if user.role == UserRole::Vip {
        i18n.tr("navbar-balance-unlimited")
    } else {
        i18n.tr_with_args("navbar-balance", &[("count", &user.credits.to_string())])
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let logo = Container::new(Text::new(ctx.site.logo_text.clone()).size(typography::TITLE_SM))
        .center_x(Length::Fixed(sizing::LOGO))
        .center_y(Length::Fixed(sizing::LOGO))
        .style(styles::container::logo);

    let brand = button(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(logo)
            .push(Text::new(ctx.site.site_name.to_uppercase()).size(typography::TITLE_MD)),
    )
    .on_press(Message::OpenHome)
    .style(button::text);

    let mut actions = Row::new().spacing(spacing::MD).align_y(Vertical::Center);

    match ctx.user {
        Some(user) => {
            actions = actions.push(
                button(Text::new(ctx.i18n.tr("navbar-studio")))
                    .on_press(Message::OpenStudio)
                    .style(button::text),
            );

            if user.is_admin {
                actions = actions.push(
                    button(Text::new(ctx.i18n.tr("navbar-admin")))
                        .on_press(Message::OpenAdmin)
                        .style(button::text),
                );
            }

            let balance = Column::new()
                .push(Text::new(balance_label(ctx.i18n, user)).size(typography::CAPTION))
                .push(Text::new(user.name.clone()).size(typography::BODY));

            actions = actions.push(
                button(balance)
                    .on_press(Message::OpenProfile)
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::unselected),
            );
        }
        None => {
            actions = actions.push(
                button(Text::new(ctx.i18n.tr("navbar-sign-up")))
                    .on_press(Message::SignUp)
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::selected),
            );
        }
    }

    let bar = Row::new()
        .align_y(Vertical::Center)
        .push(Container::new(brand).width(Length::Fill))
        .push(actions);

    Container::new(bar)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .style(styles::container::toolbar)
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
    fn vip_balance_is_unlimited() {
        let i18n = I18n::new(Some("en-US"), None);
        assert_eq!(balance_label(&i18n, &user(UserRole::Vip, 0)), "∞");
    }

    #[test]
    fn metered_balance_shows_credits() {
        let i18n = I18n::new(Some("en-US"), None);
        assert_eq!(
            balance_label(&i18n, &user(UserRole::Subscriber, 4)),
            "4 credits"
        );
    }
}
