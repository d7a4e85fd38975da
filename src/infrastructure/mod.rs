// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the ports defined in `application::port`,
//! plus the local storage used by the account layer.
//!
//! # Available Adapters
//!
//! - [`gemini`]: Remote image enhancement over HTTP (implements [`Enhancer`])
//! - [`account_store`]: CBOR persistence of the account book
//! - [`image_source`]: Decoding user images into PNG for the enhancer
//!
//! [`Enhancer`]: crate::application::port::Enhancer

pub mod account_store;
pub mod gemini;
pub mod image_source;

pub use gemini::GeminiEnhancer;
