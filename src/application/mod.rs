// SPDX-License-Identifier: MPL-2.0
//! Application layer.
//!
//! Holds the seams between the studio and the outside world. The UI talks to
//! remote enhancement only through [`port::Enhancer`]; concrete adapters live
//! in `infrastructure`.

pub mod port;
