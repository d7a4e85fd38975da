// SPDX-License-Identifier: MPL-2.0
//! Before/after comparison widget.
//!
//! Both layers are laid out at the full frame size. The "after" layer is
//! drawn first as the base; the "before" layer is drawn on top through a clip
//! rectangle whose width follows the divider, so the visible sliver is a crop
//! of the full-size layer rather than a squeezed copy.
//!
//! The interaction state lives in the widget tree. Press is only accepted
//! inside the frame, while release is accepted wherever the pointer is. When
//! the widget leaves the tree its state is dropped with it.

use super::state::{Effect, FrameBounds, Interaction, Message as InteractionMessage};
use crate::domain::comparison::SplitPercent;
use crate::ui::design_tokens::palette;
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{mouse, touch};
use iced::{Border, Color, Element, Event, Length, Point, Rectangle, Size};

/// Width of the divider line.
pub const DIVIDER_WIDTH: f32 = 4.0;

/// Diameter of the circular drag handle.
pub const HANDLE_DIAMETER: f32 = 36.0;

/// Default frame height when none is given.
pub const DEFAULT_HEIGHT: f32 = 420.0;

const GRIP_WIDTH: f32 = 2.0;
const GRIP_HEIGHT: f32 = 12.0;
const GRIP_GAP: f32 = 4.0;

/// A draggable before/after comparison frame.
pub struct ComparisonSlider<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer> {
    before: Element<'a, Message, Theme, Renderer>,
    after: Element<'a, Message, Theme, Renderer>,
    width: Length,
    height: Length,
    divider_color: Color,
    handle_color: Color,
    grip_color: Color,
    key: u64,
}

/// Tree state: the interaction plus the key of the pair it belongs to.
#[derive(Debug, Default)]
struct Mounted {
    key: u64,
    interaction: Interaction,
}

impl<'a, Message, Theme, Renderer> ComparisonSlider<'a, Message, Theme, Renderer> {
    /// Creates a comparison of `before` (revealed left of the divider) over
    /// `after` (the base layer).
    pub fn new(
        before: impl Into<Element<'a, Message, Theme, Renderer>>,
        after: impl Into<Element<'a, Message, Theme, Renderer>>,
    ) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
            width: Length::Fill,
            height: Length::Fixed(DEFAULT_HEIGHT),
            divider_color: palette::WHITE,
            handle_color: palette::WHITE,
            grip_color: palette::GRAY_900,
            key: 0,
        }
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    #[must_use]
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    /// Identifies the image pair. A different key on the next view resets the
    /// divider to its initial position.
    #[must_use]
    pub fn key(mut self, key: u64) -> Self {
        self.key = key;
        self
    }

    /// Sets the color of the divider line and the handle.
    #[must_use]
    pub fn divider_color(mut self, color: Color) -> Self {
        self.divider_color = color;
        self.handle_color = color;
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for ComparisonSlider<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<Mounted>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(Mounted {
            key: self.key,
            interaction: Interaction::default(),
        })
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.before), widget::Tree::new(&self.after)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        let mounted = tree.state.downcast_mut::<Mounted>();
        if mounted.key != self.key {
            *mounted = Mounted {
                key: self.key,
                interaction: Interaction::default(),
            };
        }

        tree.diff_children(&[&self.before, &self.after]);
    }

    fn size(&self) -> Size<Length> {
        Size::new(self.width, self.height)
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let size = limits.resolve(self.width, self.height, Size::ZERO);
        let layer = layer_limits(size);

        let before = self
            .before
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, &layer);
        let after = self
            .after
            .as_widget_mut()
            .layout(&mut tree.children[1], renderer, &layer);

        layout::Node::with_children(size, vec![before, after])
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let position = tree.state.downcast_ref::<Mounted>().interaction.position();

        let mut layers = layout.children();
        let (Some(before_layout), Some(after_layout)) = (layers.next(), layers.next()) else {
            return;
        };

        self.after.as_widget().draw(
            &tree.children[1],
            renderer,
            theme,
            style,
            after_layout,
            cursor,
            viewport,
        );

        if let Some(clip) = before_clip(bounds, position).intersection(viewport) {
            renderer.with_layer(clip, |renderer| {
                self.before.as_widget().draw(
                    &tree.children[0],
                    renderer,
                    theme,
                    style,
                    before_layout,
                    cursor,
                    &clip,
                );
            });
        }

        renderer.fill_quad(
            renderer::Quad {
                bounds: divider_bounds(bounds, position),
                ..renderer::Quad::default()
            },
            self.divider_color,
        );

        let handle = handle_bounds(bounds, position);
        renderer.fill_quad(
            renderer::Quad {
                bounds: handle,
                border: Border {
                    color: self.grip_color,
                    width: 1.0,
                    radius: (HANDLE_DIAMETER / 2.0).into(),
                },
                ..renderer::Quad::default()
            },
            self.handle_color,
        );

        for grip in grip_bounds(handle) {
            renderer.fill_quad(
                renderer::Quad {
                    bounds: grip,
                    border: Border {
                        radius: (GRIP_WIDTH / 2.0).into(),
                        ..Border::default()
                    },
                    ..renderer::Quad::default()
                },
                self.grip_color,
            );
        }
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        // Bounds are read per event: the frame may have been resized since
        // the previous one.
        let bounds = layout.bounds();
        let Some(message) = interaction_message(event, cursor, bounds) else {
            return;
        };

        let state = &mut tree.state.downcast_mut::<Mounted>().interaction;
        let was_dragging = state.is_dragging();

        if state.handle(message) == Effect::Redraw {
            shell.request_redraw();
        }

        match message {
            InteractionMessage::Press => shell.capture_event(),
            InteractionMessage::Move { .. } if was_dragging && is_touch(event) => {
                // Keep enclosing scrollables from panning under the finger.
                shell.capture_event();
            }
            _ => {}
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let dragging = tree
            .state
            .downcast_ref::<Mounted>()
            .interaction
            .is_dragging();

        if dragging || cursor.is_over(layout.bounds()) {
            mouse::Interaction::ResizingHorizontally
        } else {
            mouse::Interaction::None
        }
    }
}

impl<'a, Message, Theme, Renderer> From<ComparisonSlider<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(slider: ComparisonSlider<'a, Message, Theme, Renderer>) -> Self {
        Self::new(slider)
    }
}

/// Translates a native event into an interaction message.
///
/// `bounds` must be the frame bounds at the time of the event. Touch events
/// are located through `cursor` as well: enclosing scrollables translate the
/// cursor into content coordinates but forward the event untouched.
pub(crate) fn interaction_message(
    event: &Event,
    cursor: mouse::Cursor,
    bounds: Rectangle,
) -> Option<InteractionMessage> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
        | Event::Touch(touch::Event::FingerPressed { .. }) => {
            cursor.is_over(bounds).then_some(InteractionMessage::Press)
        }
        Event::Mouse(mouse::Event::CursorMoved { .. })
        | Event::Touch(touch::Event::FingerMoved { .. }) => {
            let position = cursor.land().position()?;
            Some(InteractionMessage::Move {
                x: position.x,
                frame: FrameBounds::from(bounds),
            })
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        | Event::Touch(touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. }) => {
            Some(InteractionMessage::Release)
        }
        _ => None,
    }
}

fn is_touch(event: &Event) -> bool {
    matches!(event, Event::Touch(_))
}

/// Limits for both layers: exactly the frame size.
fn layer_limits(frame: Size) -> layout::Limits {
    layout::Limits::new(frame, frame)
}

/// Clip rectangle of the "before" layer.
fn before_clip(bounds: Rectangle, position: SplitPercent) -> Rectangle {
    Rectangle {
        width: bounds.width * position.fraction(),
        ..bounds
    }
}

fn divider_x(bounds: Rectangle, position: SplitPercent) -> f32 {
    bounds.x + bounds.width * position.fraction()
}

fn divider_bounds(bounds: Rectangle, position: SplitPercent) -> Rectangle {
    Rectangle {
        x: divider_x(bounds, position) - DIVIDER_WIDTH / 2.0,
        y: bounds.y,
        width: DIVIDER_WIDTH,
        height: bounds.height,
    }
}

/// Handle rectangle, centered on the divider line at mid-height.
fn handle_bounds(bounds: Rectangle, position: SplitPercent) -> Rectangle {
    centered(
        Point::new(divider_x(bounds, position), bounds.center_y()),
        Size::new(HANDLE_DIAMETER, HANDLE_DIAMETER),
    )
}

fn grip_bounds(handle: Rectangle) -> [Rectangle; 2] {
    let center = handle.center();
    let offset = (GRIP_GAP + GRIP_WIDTH) / 2.0;
    let size = Size::new(GRIP_WIDTH, GRIP_HEIGHT);

    [
        centered(Point::new(center.x - offset, center.y), size),
        centered(Point::new(center.x + offset, center.y), size),
    ]
}

fn centered(center: Point, size: Size) -> Rectangle {
    Rectangle::new(
        Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
        size,
    )
}
