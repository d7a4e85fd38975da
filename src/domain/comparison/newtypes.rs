// SPDX-License-Identifier: MPL-2.0
//! Comparison newtypes.

// =============================================================================
// Split Bounds
// =============================================================================

/// Divider position bounds, in percent of the frame width.
pub mod split_bounds {
    /// Leftmost divider position.
    pub const MIN_PERCENT: f32 = 0.0;
    /// Rightmost divider position.
    pub const MAX_PERCENT: f32 = 100.0;
    /// Position of a freshly mounted comparison (centered).
    pub const DEFAULT_PERCENT: f32 = 50.0;
}

// =============================================================================
// SplitPercent
// =============================================================================

/// Divider position, guaranteed to be within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitPercent(f32);

impl SplitPercent {
    /// Creates a new split position, clamping the value to the valid range.
    ///
    /// Non-finite input falls back to the default (centered) position.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_finite() {
            Self(percent.clamp(split_bounds::MIN_PERCENT, split_bounds::MAX_PERCENT))
        } else {
            Self::default()
        }
    }

    /// Maps a pointer offset (relative to the frame's left edge) onto the
    /// frame width.
    ///
    /// The offset is clamped to `[0, width]` before conversion. Returns `None`
    /// when the width is zero, negative or not finite, or when the offset is
    /// not finite; callers treat that as "ignore this event".
    #[must_use]
    pub fn from_offset(offset: f32, width: f32) -> Option<Self> {
        if !width.is_finite() || width <= 0.0 || !offset.is_finite() {
            return None;
        }

        let clamped = offset.clamp(0.0, width);
        Some(Self::new(clamped / width * 100.0))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the position as a fraction of the frame width (`0.0..=1.0`).
    #[must_use]
    pub fn fraction(self) -> f32 {
        self.0 / 100.0
    }
}

impl Default for SplitPercent {
    fn default() -> Self {
        Self(split_bounds::DEFAULT_PERCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_centered() {
        assert_eq!(SplitPercent::default().value(), 50.0);
    }

    #[test]
    fn new_clamps_to_range() {
        assert_eq!(SplitPercent::new(-12.0).value(), 0.0);
        assert_eq!(SplitPercent::new(130.0).value(), 100.0);
        assert_eq!(SplitPercent::new(42.5).value(), 42.5);
    }

    #[test]
    fn new_rejects_nan() {
        assert_eq!(SplitPercent::new(f32::NAN), SplitPercent::default());
    }

    #[test]
    fn from_offset_maps_linearly() {
        assert_eq!(SplitPercent::from_offset(200.0, 400.0).map(SplitPercent::value), Some(50.0));
        assert_eq!(SplitPercent::from_offset(100.0, 400.0).map(SplitPercent::value), Some(25.0));
        assert_eq!(SplitPercent::from_offset(0.0, 400.0).map(SplitPercent::value), Some(0.0));
    }

    #[test]
    fn from_offset_saturates_outside_frame() {
        assert_eq!(SplitPercent::from_offset(900.0, 400.0).map(SplitPercent::value), Some(100.0));
        assert_eq!(SplitPercent::from_offset(-35.0, 400.0).map(SplitPercent::value), Some(0.0));
    }

    #[test]
    fn from_offset_ignores_degenerate_width() {
        assert!(SplitPercent::from_offset(10.0, 0.0).is_none());
        assert!(SplitPercent::from_offset(10.0, -5.0).is_none());
        assert!(SplitPercent::from_offset(10.0, f32::NAN).is_none());
        assert!(SplitPercent::from_offset(f32::INFINITY, 400.0).is_none());
    }

    #[test]
    fn fraction_is_percent_over_hundred() {
        assert!((SplitPercent::new(25.0).fraction() - 0.25).abs() < f32::EPSILON);
    }
}
