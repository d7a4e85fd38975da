// SPDX-License-Identifier: MPL-2.0
//! Before/after comparison slider.
//!
//! [`view`] assembles the two labelled image layers and wraps them in a
//! [`ComparisonSlider`]. The slider keeps its own divider position. It is
//! keyed by the identity of both handles, so a new pair starts over at the
//! initial position.

pub mod state;
pub mod widget;

pub use state::{FrameBounds, Interaction, Phase};
pub use widget::ComparisonSlider;

use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography};
use iced::alignment::Horizontal;
use iced::widget::image::{self, Handle};
use iced::widget::{container, Container, Stack, Text};
use iced::{Color, ContentFit, Element, Length};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Localized captions drawn over each layer.
#[derive(Debug, Clone)]
pub struct Labels {
    pub before: String,
    pub after: String,
}

/// Builds a comparison of `before` and `after` with their captions.
pub fn view<'a, Message: 'a>(
    before: &Handle,
    after: &Handle,
    labels: Labels,
    height: Length,
) -> Element<'a, Message> {
    let before_layer = layer(before, badge(labels.before, badge_background()), Horizontal::Left);
    let after_layer = layer(after, badge(labels.after, palette::PRIMARY_500), Horizontal::Right);

    ComparisonSlider::new(before_layer, after_layer)
        .height(height)
        .key(pair_key(before, after))
        .into()
}

/// Stable key for a before/after pair, derived from the handle ids.
pub fn pair_key(before: &Handle, after: &Handle) -> u64 {
    let mut hasher = DefaultHasher::new();
    before.id().hash(&mut hasher);
    after.id().hash(&mut hasher);
    hasher.finish()
}

fn layer<'a, Message: 'a>(
    handle: &Handle,
    caption: Element<'a, Message>,
    align: Horizontal,
) -> Element<'a, Message> {
    let picture = image::Image::new(handle.clone())
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Cover);

    let caption = Container::new(caption)
        .width(Length::Fill)
        .align_x(align)
        .padding(spacing::MD);

    Stack::new()
        .push(picture)
        .push(caption)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn badge<'a, Message: 'a>(label: String, background: Color) -> Element<'a, Message> {
    Container::new(Text::new(label.to_uppercase()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(move |_theme| container::Style {
            background: Some(background.into()),
            text_color: Some(palette::WHITE),
            border: iced::Border {
                color: Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::WHITE
                },
                width: 1.0,
                radius: radius::FULL.into(),
            },
            ..container::Style::default()
        })
        .into()
}

fn badge_background() -> Color {
    Color {
        a: opacity::OVERLAY_MEDIUM,
        ..palette::BLACK
    }
}
