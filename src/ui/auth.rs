// SPDX-License-Identifier: MPL-2.0
//! Login and signup form.

use crate::domain::account::Credentials;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, text_input, Column, Container, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Login,
    Signup,
}

/// Form contents. The password is kept only until the form is submitted.
#[derive(Debug, Clone, Default)]
pub struct State {
    mode: Mode,
    name: String,
    email: String,
    password: String,
}

impl State {
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Clears every field, keeping the mode.
    pub fn reset(&mut self) {
        *self = Self {
            mode: self.mode,
            ..Self::default()
        };
    }

    fn can_submit(&self) -> bool {
        !self.email.trim().is_empty()
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    ToggleMode,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Login { email: String, password: String },
    Signup(Credentials),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NameChanged(value) => state.name = value,
        Message::EmailChanged(value) => state.email = value,
        Message::PasswordChanged(value) => state.password = value,
        Message::ToggleMode => {
            state.mode = match state.mode {
                Mode::Login => Mode::Signup,
                Mode::Signup => Mode::Login,
            };
        }
        Message::Submit => {
            if !state.can_submit() {
                return Event::None;
            }
            let email = state.email.trim().to_string();
            let password = std::mem::take(&mut state.password);
            return match state.mode {
                Mode::Login => Event::Login { email, password },
                Mode::Signup => Event::Signup(Credentials {
                    name: state.name.trim().to_string(),
                    email,
                    password,
                }),
            };
        }
    }
    Event::None
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;
    let (title_key, submit_key, toggle_key) = match state.mode {
        Mode::Login => ("auth-login-title", "auth-login-button", "auth-switch-to-signup"),
        Mode::Signup => ("auth-signup-title", "auth-signup-button", "auth-switch-to-login"),
    };

    let mut form = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .push(Text::new(ctx.i18n.tr(title_key)).size(typography::TITLE_LG));

    if state.mode == Mode::Signup {
        form = form.push(field(
            ctx.i18n.tr("auth-name-label"),
            text_input(&ctx.i18n.tr("auth-name-placeholder"), &state.name)
                .on_input(Message::NameChanged)
                .padding(spacing::SM),
        ));
    }

    let submit = button(
        Container::new(Text::new(ctx.i18n.tr(submit_key)).size(typography::BODY_LG))
            .center_x(Length::Fill),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::selected)
    .on_press_maybe(state.can_submit().then_some(Message::Submit));

    form = form
        .push(field(
            ctx.i18n.tr("auth-email-label"),
            text_input(&ctx.i18n.tr("auth-email-placeholder"), &state.email)
                .on_input(Message::EmailChanged)
                .on_submit(Message::Submit)
                .padding(spacing::SM),
        ))
        .push(field(
            ctx.i18n.tr("auth-password-label"),
            text_input("", &state.password)
                .secure(true)
                .on_input(Message::PasswordChanged)
                .on_submit(Message::Submit)
                .padding(spacing::SM),
        ))
        .push(submit)
        .push(
            Container::new(
                button(Text::new(ctx.i18n.tr(toggle_key)).size(typography::BODY))
                    .style(button::text)
                    .on_press(Message::ToggleMode),
            )
            .align_x(Horizontal::Center)
            .width(Length::Fill),
        );

    Container::new(
        Container::new(form)
            .padding(spacing::XL)
            .style(styles::container::card),
    )
    .center(Length::Fill)
    .padding(spacing::XL)
    .into()
}

fn field<'a>(
    label: String,
    input: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::CAPTION))
        .push(input)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(mode: Mode) -> State {
        let mut state = State {
            mode,
            ..State::default()
        };
        update(&mut state, Message::NameChanged("  Ada ".into()));
        update(&mut state, Message::EmailChanged(" ada@example.com ".into()));
        update(&mut state, Message::PasswordChanged("secret".into()));
        state
    }

    #[test]
    fn login_submit_emits_trimmed_email() {
        let mut state = filled(Mode::Login);
        assert_eq!(
            update(&mut state, Message::Submit),
            Event::Login {
                email: "ada@example.com".into(),
                password: "secret".into(),
            }
        );
    }

    #[test]
    fn signup_submit_emits_credentials() {
        let mut state = filled(Mode::Signup);
        let Event::Signup(credentials) = update(&mut state, Message::Submit) else {
            panic!("expected signup event");
        };
        assert_eq!(credentials.name, "Ada");
        assert_eq!(credentials.email, "ada@example.com");
        assert_eq!(credentials.password, "secret");
    }

    #[test]
    fn submit_clears_password() {
        let mut state = filled(Mode::Login);
        update(&mut state, Message::Submit);
        assert!(state.password.is_empty());
        assert_eq!(state.email, " ada@example.com ");
    }

    #[test]
    fn blank_email_does_not_submit() {
        let mut state = State::default();
        update(&mut state, Message::PasswordChanged("x".into()));
        assert_eq!(update(&mut state, Message::Submit), Event::None);
    }

    #[test]
    fn toggle_switches_mode_and_reset_keeps_it() {
        let mut state = filled(Mode::Login);
        update(&mut state, Message::ToggleMode);
        assert_eq!(state.mode(), Mode::Signup);
        state.reset();
        assert_eq!(state.mode(), Mode::Signup);
        assert!(state.email.is_empty());
    }
}
