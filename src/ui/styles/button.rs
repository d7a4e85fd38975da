// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Highlighted choice in a toggle group (style picker, view mode, nav tab).
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    let pair = theme.extended_palette().primary;
    let background = match status {
        button::Status::Hovered => pair.strong.color,
        button::Status::Disabled => pair.weak.color,
        button::Status::Active | button::Status::Pressed => pair.base.color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: pair.base.text,
        border: Border {
            color: pair.strong.color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..button::Style::default()
    }
}

/// Picks [`selected`] or [`unselected`] for one entry of a toggle group.
pub fn choice(is_selected: bool) -> fn(&Theme, button::Status) -> button::Style {
    if is_selected {
        selected
    } else {
        unselected
    }
}

/// Unselected choice in a toggle group.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let background = theme.extended_palette().background;
    let fill = match status {
        button::Status::Hovered => background.strong.color,
        _ => background.weak.color,
    };

    button::Style {
        background: Some(Background::Color(fill)),
        text_color: theme.palette().text,
        border: Border {
            color: background.strong.color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..button::Style::default()
    }
}

/// Destructive action (suspend, remove credits, logout).
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Disabled => palette::GRAY_400,
        _ => palette::ERROR_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_uses_theme_primary() {
        let theme = Theme::Dark;
        let style = selected(&theme, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(theme.extended_palette().primary.base.color))
        );
    }

    #[test]
    fn danger_is_red_when_active() {
        let style = danger(&Theme::Light, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::ERROR_500)));
    }
}
