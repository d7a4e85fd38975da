// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection and the site-branded iced theme.

use crate::domain::site::{Rgb, SiteSettings};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detection errors count as dark
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-mode-light",
            ThemeMode::Dark => "theme-mode-dark",
            ThemeMode::System => "theme-mode-system",
        }
    }
}

/// Parses `#rrggbb` / `#rgb` into an iced color.
#[must_use]
pub fn parse_hex_color(value: &str) -> Option<Color> {
    Rgb::parse_hex(value).map(to_color)
}

fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}

/// Brand colors resolved from the site settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrandColors {
    pub primary: Color,
    pub secondary: Color,
}

impl BrandColors {
    #[must_use]
    pub fn from_site(site: &SiteSettings) -> Self {
        Self {
            primary: to_color(site.primary_rgb()),
            secondary: to_color(site.secondary_rgb()),
        }
    }
}

/// Builds the application theme: the light or dark base palette with the
/// site's primary color swapped in.
#[must_use]
pub fn site_theme(mode: ThemeMode, site: &SiteSettings) -> Theme {
    let base = if mode.is_dark() {
        Theme::Dark
    } else {
        Theme::Light
    };
    let palette = iced::theme::Palette {
        primary: BrandColors::from_site(site).primary,
        ..base.palette()
    };

    Theme::custom(format!("{} ({:?})", site.site_name, mode), palette)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn parse_hex_color_reads_six_digit_values() {
        let color = parse_hex_color("#ff0000").expect("valid color");
        assert_eq!(color, Color::from_rgb8(255, 0, 0));
        assert!(parse_hex_color("blue").is_none());
    }

    #[test]
    fn site_theme_uses_site_primary() {
        let site = SiteSettings {
            theme_primary: "#10b981".to_string(),
            ..SiteSettings::default()
        };
        let theme = site_theme(ThemeMode::Dark, &site);
        assert_eq!(theme.palette().primary, Color::from_rgb8(0x10, 0xb9, 0x81));
        assert_eq!(
            theme.palette().background,
            Theme::Dark.palette().background
        );
    }

    #[test]
    fn invalid_site_color_falls_back_to_default_brand() {
        let site = SiteSettings {
            theme_secondary: "nonsense".to_string(),
            ..SiteSettings::default()
        };
        let brand = BrandColors::from_site(&site);
        assert_eq!(brand.secondary, Color::from_rgb8(0xa8, 0x55, 0xf7));
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        #[derive(Serialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let text = toml::to_string(&Wrapper {
            mode: ThemeMode::System,
        })
        .expect("serialize");
        assert_eq!(text.trim(), "mode = \"system\"");
    }
}
