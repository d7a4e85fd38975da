// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Raised card surface used by forms, user rows and panels.
pub fn card(theme: &Theme) -> container::Style {
    let background = theme.extended_palette().background;

    container::Style {
        background: Some(Background::Color(background.weak.color)),
        text_color: Some(theme.palette().text),
        border: Border {
            color: background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..container::Style::default()
    }
}

/// Top navigation bar.
pub fn toolbar(theme: &Theme) -> container::Style {
    let background = theme.extended_palette().background;

    container::Style {
        background: Some(Background::Color(background.weak.color)),
        border: Border {
            color: background.strong.color,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..container::Style::default()
    }
}

/// Round logo mark filled with the brand color.
pub fn logo(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.palette().primary)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Pill-shaped badge with a fixed color.
pub fn pill(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}
