// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`enhancer`]: Remote generative enhancement of an image
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no HTTP types)
//! - Traits are `Send + Sync` so adapters can be shared with async tasks
//! - Remote work is exposed as a boxed future that callers hand to
//!   `Task::perform`

pub mod enhancer;

pub use enhancer::{EnhanceError, EnhanceResult, Enhancer};
