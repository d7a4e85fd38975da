// SPDX-License-Identifier: MPL-2.0
//! Enhancement presets and request composition.
//!
//! - [`styles`]: the built-in style catalog
//! - [`prompt`]: full prompt text, aspect ratio and output size for a run

pub mod prompt;
pub mod styles;

pub use prompt::{compose_prompt, AspectRatio, EnhanceRequest, ImageSize};
pub use styles::{EnhancementStyle, STYLES};
