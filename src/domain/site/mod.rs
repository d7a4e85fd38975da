// SPDX-License-Identifier: MPL-2.0
//! Site branding and pricing settings.

use serde::{Deserialize, Serialize};

/// Default site name.
pub const DEFAULT_SITE_NAME: &str = "NeoEnhance";
/// Default logo text.
pub const DEFAULT_LOGO_TEXT: &str = "N";
/// Default primary theme color.
pub const DEFAULT_THEME_PRIMARY: &str = "#3b82f6";
/// Default secondary theme color.
pub const DEFAULT_THEME_SECONDARY: &str = "#a855f7";
/// Default price of one credit.
pub const DEFAULT_CREDIT_PRICE: f64 = 0.99;
/// Default currency code.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Branding, theme colors and credit pricing, editable from the admin screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteSettings {
    pub site_name: String,
    pub logo_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub theme_primary: String,
    pub theme_secondary: String,
    pub credit_price: f64,
    pub currency: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            logo_text: DEFAULT_LOGO_TEXT.to_string(),
            logo_url: None,
            theme_primary: DEFAULT_THEME_PRIMARY.to_string(),
            theme_secondary: DEFAULT_THEME_SECONDARY.to_string(),
            credit_price: DEFAULT_CREDIT_PRICE,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl SiteSettings {
    /// Primary color, falling back to the default when the stored value does
    /// not parse.
    #[must_use]
    pub fn primary_rgb(&self) -> Rgb {
        Rgb::parse_hex(&self.theme_primary)
            .or_else(|| Rgb::parse_hex(DEFAULT_THEME_PRIMARY))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn secondary_rgb(&self) -> Rgb {
        Rgb::parse_hex(&self.theme_secondary)
            .or_else(|| Rgb::parse_hex(DEFAULT_THEME_SECONDARY))
            .unwrap_or_default()
    }

    /// Formatted price of one credit, e.g. `0.99 USD`.
    #[must_use]
    pub fn formatted_credit_price(&self) -> String {
        format!("{:.2} {}", self.credit_price, self.currency)
    }
}

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parses `#rrggbb` or `#rgb` (leading `#` optional).
    #[must_use]
    pub fn parse_hex(value: &str) -> Option<Self> {
        let hex = value.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            6 => Some(Self {
                r: u8::from_str_radix(&hex[0..2], 16).ok()?,
                g: u8::from_str_radix(&hex[2..4], 16).ok()?,
                b: u8::from_str_radix(&hex[4..6], 16).ok()?,
            }),
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
                Some(Self {
                    r: digit(0)?,
                    g: digit(1)?,
                    b: digit(2)?,
                })
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
