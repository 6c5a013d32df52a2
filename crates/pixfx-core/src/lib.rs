//! # pixfx-core
//!
//! Core types for raster filtering.
//!
//! - [`PixelBuffer`] - owned row-major 8-bit RGB image
//! - [`Rgb`] - a single pixel, plus channel clamping and luminance helpers
//! - [`border`] - clamp-to-edge addressing for neighborhood reads
//! - [`Error`] - buffer construction and checked-access errors
//!
//! ## Crate Structure
//!
//! ```text
//! pixfx-core (this crate)
//!    ^
//!    |
//!    +-- pixfx-ops (filter engine)
//!    +-- pixfx-cli (decode / encode / command line)
//! ```
//!
//! This crate never touches files, paths or the process environment.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod border;
pub mod buffer;
pub mod error;
pub mod pixel;

pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use pixel::{clamp_channel, clamp_channel_i32, Rgb};

/// Prelude module for convenient imports.
///
/// ```
/// use pixfx_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::border::{clamp_axis, clamp_coord, offset_coord};
    pub use crate::buffer::PixelBuffer;
    pub use crate::error::{Error, Result};
    pub use crate::pixel::{clamp_channel, clamp_channel_i32, Rgb};
}
