// SPDX-License-Identifier: MPL-2.0
//! Interaction state of the comparison slider.
//!
//! The slider cycles between two phases for its whole mounted lifetime:
//! `Idle` and `Dragging`. A press inside the frame starts a drag, a release
//! anywhere ends it, and only moves received while dragging reposition the
//! divider. The position is recomputed from the absolute pointer coordinate
//! and the frame geometry supplied with each move.

use crate::domain::comparison::SplitPercent;

/// Horizontal geometry of the comparison frame, as measured for one event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameBounds {
    /// Left edge of the frame, in window coordinates.
    pub left: f32,
    /// Frame width.
    pub width: f32,
}

impl FrameBounds {
    #[must_use]
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }
}

impl From<iced::Rectangle> for FrameBounds {
    fn from(bounds: iced::Rectangle) -> Self {
        Self::new(bounds.x, bounds.width)
    }
}

/// Drag phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
}

/// Inputs understood by the interaction state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Pointer or finger pressed inside the frame.
    Press,
    /// Pointer or finger moved to window coordinate `x`.
    Move { x: f32, frame: FrameBounds },
    /// Pointer or finger released, anywhere in the window.
    Release,
}

/// What the widget has to do after handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The divider moved; the frame must be redrawn.
    Redraw,
}

/// Slider interaction state: drag phase plus divider position.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    phase: Phase,
    position: SplitPercent,
}

impl Interaction {
    /// Handle an interaction message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Press => {
                self.phase = Phase::Dragging;
                Effect::None
            }
            Message::Move { x, frame } => self.drag_to(x, frame),
            Message::Release => {
                self.phase = Phase::Idle;
                Effect::None
            }
        }
    }

    fn drag_to(&mut self, x: f32, frame: FrameBounds) -> Effect {
        if self.phase != Phase::Dragging {
            return Effect::None;
        }

        let Some(position) = SplitPercent::from_offset(x - frame.left, frame.width) else {
            return Effect::None;
        };

        if position == self.position {
            return Effect::None;
        }

        self.position = position;
        Effect::Redraw
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    /// Current divider position.
    #[must_use]
    pub fn position(&self) -> SplitPercent {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> FrameBounds {
        FrameBounds::new(100.0, 400.0)
    }

    fn move_to(x: f32) -> Message {
        Message::Move { x, frame: frame() }
    }

    #[test]
    fn starts_idle_and_centered() {
        let state = Interaction::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.position().value(), 50.0);
    }

    #[test]
    fn press_does_not_move_divider() {
        let mut state = Interaction::default();
        let effect = state.handle(Message::Press);
        assert_eq!(effect, Effect::None);
        assert!(state.is_dragging());
        assert_eq!(state.position().value(), 50.0);
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let mut state = Interaction::default();
        let effect = state.handle(Message::Move {
            x: 10.0,
            frame: FrameBounds::new(0.0, 100.0),
        });
        assert_eq!(effect, Effect::None);
        assert_eq!(state.position().value(), 50.0);
    }

    #[test]
    fn move_inside_frame_matches_formula() {
        for x in [100.0_f32, 137.0, 250.0, 300.0, 333.3, 499.0, 500.0] {
            let mut state = Interaction::default();
            state.handle(Message::Press);
            state.handle(move_to(x));
            let expected = ((x - 100.0) / 400.0 * 100.0).clamp(0.0, 100.0);
            assert_eq!(state.position().value(), expected, "x = {x}");
        }
    }

    #[test]
    fn move_past_edges_saturates() {
        let mut state = Interaction::default();
        state.handle(Message::Press);

        state.handle(move_to(10_000.0));
        assert_eq!(state.position().value(), 100.0);

        state.handle(move_to(-250.0));
        assert_eq!(state.position().value(), 0.0);

        state.handle(move_to(99.0));
        assert_eq!(state.position().value(), 0.0);
    }

    #[test]
    fn release_stops_tracking() {
        let frame = FrameBounds::new(0.0, 100.0);
        let mut state = Interaction::default();

        state.handle(Message::Press);
        state.handle(Message::Move { x: 20.0, frame });
        state.handle(Message::Move { x: 80.0, frame });
        state.handle(Message::Release);
        state.handle(Message::Move { x: 10.0, frame });

        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.position().value(), 80.0);
    }

    #[test]
    fn zero_width_frame_is_ignored() {
        let mut state = Interaction::default();
        state.handle(Message::Press);
        let effect = state.handle(Message::Move {
            x: 40.0,
            frame: FrameBounds::new(0.0, 0.0),
        });
        assert_eq!(effect, Effect::None);
        assert_eq!(state.position().value(), 50.0);
        assert!(state.is_dragging());
    }

    #[test]
    fn move_requests_redraw_only_on_change() {
        let mut state = Interaction::default();
        state.handle(Message::Press);
        assert_eq!(state.handle(move_to(200.0)), Effect::Redraw);
        assert_eq!(state.handle(move_to(200.0)), Effect::None);
    }

    #[test]
    fn release_while_idle_is_harmless() {
        let mut state = Interaction::default();
        assert_eq!(state.handle(Message::Release), Effect::None);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn frame_bounds_from_rectangle() {
        let bounds = iced::Rectangle::new(iced::Point::new(12.0, 40.0), iced::Size::new(300.0, 200.0));
        assert_eq!(FrameBounds::from(bounds), FrameBounds::new(12.0, 300.0));
    }
}
