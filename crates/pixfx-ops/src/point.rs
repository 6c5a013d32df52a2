//! Per-pixel transforms that ignore neighbors.
//!
//! - [`PointOp::Invert`] - `255 - channel`
//! - [`PointOp::Grayscale`] - Rec.601 luminance replicated into all channels
//! - [`PointOp::Sepia`] - luminance shifted by `(+2k, +k/2, -k)`
//! - [`PointOp::Brightness`] - constant added to every channel
//!
//! All results are clamped to `[0, 255]`.
//!
//! # Example
//!
//! ```rust
//! use pixfx_core::{PixelBuffer, Rgb};
//! use pixfx_ops::{Filter, PointFilter};
//!
//! let img = PixelBuffer::filled(1, 1, Rgb::new(255, 0, 0)).unwrap();
//! let gray = PointFilter::grayscale().process(&img).unwrap();
//! assert_eq!(gray.pixel(0, 0), Rgb::gray(76));
//! ```

use pixfx_core::{clamp_channel_i32, PixelBuffer, Rgb};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::raster::map_pixels;
use crate::{Filter, OpsResult};

/// Default sepia depth `k`.
pub const DEFAULT_SEPIA_DEPTH: u8 = 50;

/// Default brightness offset.
pub const DEFAULT_BRIGHTNESS_DELTA: i16 = 50;

/// Per-pixel operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointOp {
    /// `255 - channel`.
    Invert,
    /// Truncated luminance in every channel.
    Grayscale,
    /// Sepia toning with depth `k`.
    Sepia {
        /// Tone depth `k`.
        depth: u8,
    },
    /// Adds `delta` to every channel.
    Brightness {
        /// Signed channel offset.
        delta: i16,
    },
}

impl PointOp {
    /// Applies the operation to a single pixel.
    #[inline]
    pub fn apply(self, px: Rgb) -> Rgb {
        match self {
            Self::Invert => px.map(|c| 255 - c),
            Self::Grayscale => Rgb::gray(px.luminance()),
            Self::Sepia { depth } => {
                let l = px.luminance() as i32;
                let k = depth as i32;
                Rgb::new(
                    clamp_channel_i32(l + 2 * k),
                    clamp_channel_i32(l + k / 2),
                    clamp_channel_i32(l - k),
                )
            }
            Self::Brightness { delta } => {
                px.map(|c| clamp_channel_i32(c as i32 + delta as i32))
            }
        }
    }
}

/// Filter that applies a [`PointOp`] to every pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointFilter {
    op: PointOp,
}

impl PointFilter {
    /// Creates a filter for `op`.
    pub const fn new(op: PointOp) -> Self {
        Self { op }
    }

    /// Channel inversion.
    pub const fn invert() -> Self {
        Self::new(PointOp::Invert)
    }

    /// Luminance grayscale.
    pub const fn grayscale() -> Self {
        Self::new(PointOp::Grayscale)
    }

    /// Sepia with the default depth.
    pub const fn sepia() -> Self {
        Self::new(PointOp::Sepia {
            depth: DEFAULT_SEPIA_DEPTH,
        })
    }

    /// Brightness with the default offset.
    pub const fn brightness() -> Self {
        Self::new(PointOp::Brightness {
            delta: DEFAULT_BRIGHTNESS_DELTA,
        })
    }

    /// The configured operation.
    pub fn op(&self) -> PointOp {
        self.op
    }
}

impl Filter for PointFilter {
    fn name(&self) -> &'static str {
        match self.op {
            PointOp::Invert => "Invert",
            PointOp::Grayscale => "GrayScale",
            PointOp::Sepia { .. } => "Sepia",
            PointOp::Brightness { .. } => "Bright",
        }
    }

    fn process(&self, src: &PixelBuffer) -> OpsResult<PixelBuffer> {
        trace!(width = src.width(), height = src.height(), op = ?self.op, "point");
        let op = self.op;
        map_pixels(src, move |px| op.apply(px))
    }
}
