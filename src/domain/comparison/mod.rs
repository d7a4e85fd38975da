// SPDX-License-Identifier: MPL-2.0
//! Comparison value objects.
//!
//! The divider of a before/after comparison is expressed as a percentage of
//! the frame width. [`SplitPercent`] guarantees the value stays in `[0, 100]`
//! and owns the pointer-offset-to-percentage mapping.

pub mod newtypes;

pub use newtypes::{split_bounds, SplitPercent};
