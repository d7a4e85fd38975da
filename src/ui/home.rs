// SPDX-License-Identifier: MPL-2.0
//! Landing screen: hero text, call to action and a live comparison.
//!
//! The showcase pair is rendered procedurally at startup so the landing page
//! works offline: a sunset landscape, and a softened, washed-out copy of it
//! playing the "before" role.

use crate::domain::site::SiteSettings;
use crate::i18n::I18n;
use crate::ui::comparison::{self, Labels};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use image_rs::{imageops, Rgba, RgbaImage};
use iced::alignment::Horizontal;
use iced::widget::image::Handle;
use iced::widget::{button, Column, Container, Text};
use iced::{Element, Length};

const SHOWCASE_WIDTH: u32 = 720;
const SHOWCASE_HEIGHT: u32 = 405;
const SOFTEN_SIGMA: f32 = 3.5;
/// Share of the original saturation kept in the "before" image.
const SOFTEN_SATURATION: f32 = 0.35;
const SOFTEN_BRIGHTNESS: f32 = 0.85;

/// The before/after pair shown on the landing page.
#[derive(Debug, Clone)]
pub struct Showcase {
    pub before: Handle,
    pub after: Handle,
}

impl Showcase {
    #[must_use]
    pub fn generate() -> Self {
        let after = render_scene(SHOWCASE_WIDTH, SHOWCASE_HEIGHT);
        let before = soften(&after);

        Self {
            before: to_handle(before),
            after: to_handle(after),
        }
    }
}

fn to_handle(image: RgbaImage) -> Handle {
    let (width, height) = image.dimensions();
    Handle::from_rgba(width, height, image.into_raw())
}

/// Draws a sky gradient with a sun over two rolling hill ridges.
pub(crate) fn render_scene(width: u32, height: u32) -> RgbaImage {
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    let sun = (w * 0.68, h * 0.42, h * 0.12);

    RgbaImage::from_fn(width, height, |x, y| {
        let (fx, fy) = (x as f32, y as f32);
        let t = fy / h;

        let far_ridge = h * (0.62 + 0.05 * (fx / w * 7.0).sin());
        let near_ridge = h * (0.78 + 0.06 * (fx / w * 4.0 + 1.3).sin());

        let rgb = if fy > near_ridge {
            let shade = 1.0 - (fy - near_ridge) / h;
            [0.10 * shade, 0.42 * shade, 0.22 * shade]
        } else if fy > far_ridge {
            [0.20, 0.30, 0.45]
        } else {
            let dx = fx - sun.0;
            let dy = fy - sun.1;
            let glow = (1.0 - (dx * dx + dy * dy).sqrt() / (sun.2 * 3.0)).max(0.0);
            if dx * dx + dy * dy < sun.2 * sun.2 {
                [1.0, 0.86, 0.45]
            } else {
                [
                    lerp(0.12, 0.98, t) + glow * 0.3,
                    lerp(0.20, 0.55, t) + glow * 0.2,
                    lerp(0.55, 0.35, t),
                ]
            }
        };

        Rgba([to_u8(rgb[0]), to_u8(rgb[1]), to_u8(rgb[2]), 255])
    })
}

/// Blurs, desaturates and dims an image.
pub(crate) fn soften(image: &RgbaImage) -> RgbaImage {
    let mut soft = imageops::blur(image, SOFTEN_SIGMA);

    for pixel in soft.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        let luma = 0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b);
        let mix = |c: u8| {
            let c = f32::from(c);
            let value = (luma + (c - luma) * SOFTEN_SATURATION) * SOFTEN_BRIGHTNESS;
            value.round().clamp(0.0, 255.0) as u8
        };
        *pixel = Rgba([mix(r), mix(g), mix(b), a]);
    }

    soft
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

fn to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub site: &'a SiteSettings,
    pub showcase: &'a Showcase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    EnterStudio,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(
        ctx.i18n
            .tr_with_args("home-title", &[("site", ctx.site.site_name.as_str())]),
    )
    .size(typography::TITLE_XL);

    let subtitle = Text::new(ctx.i18n.tr("home-subtitle")).size(typography::BODY_LG);

    let cta = button(Text::new(ctx.i18n.tr("home-enter-studio")).size(typography::BODY_LG))
        .on_press(Message::EnterStudio)
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::selected);

    let slider = comparison::view(
        &ctx.showcase.before,
        &ctx.showcase.after,
        Labels {
            before: ctx.i18n.tr("comparison-original"),
            after: ctx.i18n.tr("comparison-enhanced"),
        },
        Length::Fixed(sizing::HERO_COMPARISON_HEIGHT),
    );

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .max_width(900.0)
        .push(title)
        .push(subtitle)
        .push(cta)
        .push(Container::new(slider).padding(spacing::XS).style(styles::container::card));

    Container::new(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(spacing::XXL)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mean_saturation(image: &RgbaImage) -> f32 {
        let total: f32 = image
            .pixels()
            .map(|p| {
                let [r, g, b, _] = p.0;
                f32::from(r.max(g).max(b) - r.min(g).min(b))
            })
            .sum();
        total / (image.width() * image.height()) as f32
    }

    #[test]
    fn scene_has_requested_size() {
        let scene = render_scene(64, 36);
        assert_eq!(scene.dimensions(), (64, 36));
    }

    #[test]
    fn scene_is_deterministic() {
        assert_eq!(render_scene(32, 18), render_scene(32, 18));
    }

    #[test]
    fn softened_copy_is_duller() {
        let scene = render_scene(96, 54);
        let soft = soften(&scene);
        assert_eq!(soft.dimensions(), scene.dimensions());
        assert!(mean_saturation(&soft) < mean_saturation(&scene));
    }

    #[test]
    fn degenerate_size_does_not_panic() {
        let scene = render_scene(1, 1);
        assert_eq!(scene.dimensions(), (1, 1));
    }
}
