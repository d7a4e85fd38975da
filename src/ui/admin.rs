// SPDX-License-Identifier: MPL-2.0
//! Administration console: site settings, system check and user management.

use crate::domain::account::{AdminAction, User, UserRole};
use crate::domain::site::{Rgb, SiteSettings, DEFAULT_LOGO_TEXT};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, text_input, Column, Container, Row, Text};
use iced::{Element, Length, Theme};

/// Editable fields of the site settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteField {
    SiteName,
    LogoText,
    LogoUrl,
    ThemePrimary,
    ThemeSecondary,
    CreditPrice,
    Currency,
}

impl SiteField {
    pub const ALL: [SiteField; 7] = [
        SiteField::SiteName,
        SiteField::LogoText,
        SiteField::LogoUrl,
        SiteField::ThemePrimary,
        SiteField::ThemeSecondary,
        SiteField::CreditPrice,
        SiteField::Currency,
    ];

    fn label_key(self) -> &'static str {
        match self {
            SiteField::SiteName => "admin-site-name",
            SiteField::LogoText => "admin-logo-text",
            SiteField::LogoUrl => "admin-logo-url",
            SiteField::ThemePrimary => "admin-theme-primary",
            SiteField::ThemeSecondary => "admin-theme-secondary",
            SiteField::CreditPrice => "admin-credit-price",
            SiteField::Currency => "admin-currency",
        }
    }
}

/// Text drafts of [`SiteSettings`], validated on apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteForm {
    site_name: String,
    logo_text: String,
    logo_url: String,
    theme_primary: String,
    theme_secondary: String,
    credit_price: String,
    currency: String,
}

impl SiteForm {
    #[must_use]
    pub fn from_settings(settings: &SiteSettings) -> Self {
        Self {
            site_name: settings.site_name.clone(),
            logo_text: settings.logo_text.clone(),
            logo_url: settings.logo_url.clone().unwrap_or_default(),
            theme_primary: settings.theme_primary.clone(),
            theme_secondary: settings.theme_secondary.clone(),
            credit_price: settings.credit_price.to_string(),
            currency: settings.currency.clone(),
        }
    }

    fn value(&self, field: SiteField) -> &str {
        match field {
            SiteField::SiteName => &self.site_name,
            SiteField::LogoText => &self.logo_text,
            SiteField::LogoUrl => &self.logo_url,
            SiteField::ThemePrimary => &self.theme_primary,
            SiteField::ThemeSecondary => &self.theme_secondary,
            SiteField::CreditPrice => &self.credit_price,
            SiteField::Currency => &self.currency,
        }
    }

    fn set(&mut self, field: SiteField, value: String) {
        let slot = match field {
            SiteField::SiteName => &mut self.site_name,
            SiteField::LogoText => &mut self.logo_text,
            SiteField::LogoUrl => &mut self.logo_url,
            SiteField::ThemePrimary => &mut self.theme_primary,
            SiteField::ThemeSecondary => &mut self.theme_secondary,
            SiteField::CreditPrice => &mut self.credit_price,
            SiteField::Currency => &mut self.currency,
        };
        *slot = value;
    }

    /// Validates the drafts. Errors are i18n keys.
    pub fn to_settings(&self) -> Result<SiteSettings, &'static str> {
        let site_name = self.site_name.trim();
        if site_name.is_empty() {
            return Err("error-site-name-empty");
        }

        let primary = Rgb::parse_hex(&self.theme_primary).ok_or("error-site-invalid-color")?;
        let secondary = Rgb::parse_hex(&self.theme_secondary).ok_or("error-site-invalid-color")?;

        let credit_price = self
            .credit_price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite() && *price >= 0.0)
            .ok_or("error-site-invalid-price")?;

        let currency = self.currency.trim().to_uppercase();
        if currency.is_empty() {
            return Err("error-site-currency-empty");
        }

        let logo_text = match self.logo_text.trim() {
            "" => DEFAULT_LOGO_TEXT.to_string(),
            text => text.to_string(),
        };
        let logo_url = Some(self.logo_url.trim())
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        Ok(SiteSettings {
            site_name: site_name.to_string(),
            logo_text,
            logo_url,
            theme_primary: primary.to_hex(),
            theme_secondary: secondary.to_hex(),
            credit_price,
            currency,
        })
    }
}

/// Result of a system check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic {
    pub storage_ok: bool,
    pub active_users: usize,
    pub pricing_ok: bool,
}

impl Diagnostic {
    #[must_use]
    pub fn run(storage_ok: bool, users: &[User], site: &SiteSettings) -> Self {
        Self {
            storage_ok,
            active_users: users.iter().filter(|user| !user.is_suspended).count(),
            pricing_ok: site.credit_price.is_finite() && site.credit_price >= 0.0,
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.storage_ok && self.pricing_ok
    }

    /// Localized report lines, in display order.
    #[must_use]
    pub fn lines(&self, i18n: &I18n) -> Vec<String> {
        let mark = |ok: bool| if ok { "✓" } else { "✗" };
        let count = self.active_users.to_string();

        vec![
            i18n.tr("admin-diag-start"),
            format!(
                "{} {}",
                mark(self.storage_ok),
                i18n.tr(if self.storage_ok {
                    "admin-diag-storage-ok"
                } else {
                    "admin-diag-storage-failed"
                })
            ),
            format!(
                "{} {}",
                mark(true),
                i18n.tr_with_args("admin-diag-users", &[("count", count.as_str())])
            ),
            format!(
                "{} {}",
                mark(self.pricing_ok),
                i18n.tr(if self.pricing_ok {
                    "admin-diag-pricing-ok"
                } else {
                    "admin-diag-pricing-invalid"
                })
            ),
            i18n.tr(if self.is_ready() {
                "admin-diag-ready"
            } else {
                "admin-diag-degraded"
            }),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    form: SiteForm,
    diagnostic: Option<Diagnostic>,
}

impl State {
    /// Reloads the form from the saved settings.
    pub fn reset(&mut self, settings: &SiteSettings) {
        self.form = SiteForm::from_settings(settings);
    }

    pub fn set_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostic = Some(diagnostic);
    }

    #[must_use]
    pub fn form(&self) -> &SiteForm {
        &self.form
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub users: &'a [User],
    pub site: &'a SiteSettings,
}

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(SiteField, String),
    ApplySite,
    RevertSite,
    RunDiagnostic,
    User { id: String, action: AdminAction },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    SiteApplied(SiteSettings),
    SiteRejected(&'static str),
    RevertRequested,
    DiagnosticRequested,
    UserAction { id: String, action: AdminAction },
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::FieldChanged(field, value) => {
            state.form.set(field, value);
            Event::None
        }
        Message::ApplySite => match state.form.to_settings() {
            Ok(settings) => {
                state.form = SiteForm::from_settings(&settings);
                Event::SiteApplied(settings)
            }
            Err(key) => Event::SiteRejected(key),
        },
        Message::RevertSite => Event::RevertRequested,
        Message::RunDiagnostic => Event::DiagnosticRequested,
        Message::User { id, action } => Event::UserAction { id, action },
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let top = Row::new()
        .spacing(spacing::LG)
        .push(site_panel(&ctx))
        .push(diagnostic_panel(&ctx));

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .push(Text::new(ctx.i18n.tr("admin-title")).size(typography::TITLE_LG))
        .push(top)
        .push(users_panel(&ctx));

    scrollable(content).into()
}

fn site_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let form = &ctx.state.form;

    let fields = SiteField::ALL
        .iter()
        .fold(Column::new().spacing(spacing::SM), |column, field| {
            let field = *field;
            column.push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(Text::new(ctx.i18n.tr(field.label_key())).size(typography::CAPTION))
                    .push(
                        text_input("", form.value(field))
                            .on_input(move |value| Message::FieldChanged(field, value))
                            .on_submit(Message::ApplySite)
                            .padding(spacing::XS),
                    ),
            )
        });

    let price = Text::new(ctx.i18n.tr_with_args(
        "admin-credit-price-current",
        &[("price", ctx.site.formatted_credit_price().as_str())],
    ))
    .size(typography::CAPTION);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(ctx.i18n.tr("admin-apply")))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::selected)
                .on_press(Message::ApplySite),
        )
        .push(
            button(Text::new(ctx.i18n.tr("admin-revert")))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::unselected)
                .on_press(Message::RevertSite),
        );

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(Text::new(ctx.i18n.tr("admin-site-title")).size(typography::TITLE_SM))
            .push(fields)
            .push(price)
            .push(actions),
    )
    .padding(spacing::LG)
    .width(Length::Fixed(sizing::FORM_WIDTH))
    .style(styles::container::card)
    .into()
}

fn diagnostic_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .push(
            Container::new(Text::new(ctx.i18n.tr("admin-diag-title")).size(typography::TITLE_SM))
                .width(Length::Fill),
        )
        .push(
            button(Text::new(ctx.i18n.tr("admin-diag-run")).size(typography::CAPTION))
                .style(styles::button::selected)
                .on_press(Message::RunDiagnostic),
        );

    let lines = match &ctx.state.diagnostic {
        Some(diagnostic) => diagnostic
            .lines(ctx.i18n)
            .into_iter()
            .fold(Column::new().spacing(spacing::XXS), |column, line| {
                column.push(Text::new(line).size(typography::BODY).font(iced::Font::MONOSPACE))
            }),
        None => Column::new().push(Text::new(ctx.i18n.tr("admin-diag-idle")).size(typography::BODY)),
    };

    Container::new(Column::new().spacing(spacing::MD).push(header).push(lines))
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn users_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr_with_args(
        "admin-users-title",
        &[("count", ctx.users.len().to_string().as_str())],
    ))
    .size(typography::TITLE_SM);

    ctx.users
        .iter()
        .fold(Column::new().spacing(spacing::SM).push(title), |column, user| {
            column.push(user_row(ctx.i18n, user))
        })
        .into()
}

fn user_row<'a>(i18n: &I18n, user: &User) -> Element<'a, Message> {
    let action = |action: AdminAction| Message::User {
        id: user.id.clone(),
        action,
    };

    let identity = Column::new()
        .push(Text::new(user.name.clone()).size(typography::BODY_LG))
        .push(Text::new(user.email.clone()).size(typography::CAPTION));

    let roles = UserRole::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, role| {
            row.push(
                button(Text::new(i18n.tr(role.i18n_key())).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::choice(user.role == *role))
                    .on_press(action(AdminAction::SetRole(*role))),
            )
        });

    let credits = Row::new()
        .spacing(spacing::XS)
        .align_y(iced::alignment::Vertical::Center)
        .push(
            button(Text::new("−"))
                .style(styles::button::unselected)
                .on_press(action(AdminAction::RemoveCredits)),
        )
        .push(Text::new(user.credits.to_string()).size(typography::BODY_LG))
        .push(
            button(Text::new("+"))
                .style(styles::button::unselected)
                .on_press(action(AdminAction::AddCredits)),
        );

    let suspend_key = if user.is_suspended {
        "admin-user-suspended"
    } else {
        "admin-user-active"
    };
    let suspend = button(Text::new(i18n.tr(suspend_key)).size(typography::CAPTION))
        .padding([spacing::XS, spacing::MD])
        .style(suspend_style(user.is_suspended))
        .on_press(action(AdminAction::ToggleSuspend));

    let mut row = Row::new()
        .spacing(spacing::LG)
        .align_y(iced::alignment::Vertical::Center)
        .push(Container::new(identity).width(Length::Fill));
    if user.is_admin {
        row = row.push(
            Container::new(Text::new(i18n.tr("admin-user-admin-badge")).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::pill(palette::WARNING_500)),
        );
    }

    Container::new(row.push(roles).push(credits).push(suspend))
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn suspend_style(is_suspended: bool) -> fn(&Theme, button::Status) -> button::Style {
    if is_suspended {
        styles::button::danger
    } else {
        styles::button::unselected
    }
}
