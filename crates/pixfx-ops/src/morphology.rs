//! Grayscale morphology over a binary structuring element.
//!
//! Only kernel taps with a non-zero weight take part. Dilation takes the
//! per-channel maximum over those taps, erosion the per-channel minimum.
//! Channels are reduced independently, so the output color need not match
//! any single sampled pixel.
//!
//! Compound operations share the same element:
//!
//! - [`MorphOp::Open`] - erosion, then dilation
//! - [`MorphOp::Close`] - dilation, then erosion
//! - [`MorphOp::Gradient`] - dilation minus erosion, floored at 0
//!
//! # Example
//!
//! ```rust
//! use pixfx_core::{PixelBuffer, Rgb};
//! use pixfx_ops::{Filter, Morphology};
//!
//! let mut img = PixelBuffer::filled(5, 5, Rgb::BLACK).unwrap();
//! img.set_pixel(2, 2, Rgb::WHITE);
//! let grown = Morphology::dilation(1).process(&img).unwrap();
//! assert_eq!(grown.pixel(1, 1), Rgb::WHITE);
//! assert_eq!(grown.pixel(0, 0), Rgb::BLACK);
//! ```

use pixfx_core::{PixelBuffer, Rgb};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::difference::Difference;
use crate::kernel::Kernel;
use crate::raster::generate;
use crate::{Filter, OpsError, OpsResult};

/// Default structuring element radius.
pub const DEFAULT_RADIUS: u32 = 1;

/// Morphological operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphOp {
    /// Per-channel maximum.
    Dilate,
    /// Per-channel minimum.
    Erode,
    /// Erode, then dilate.
    Open,
    /// Dilate, then erode.
    Close,
    /// Dilation minus erosion.
    Gradient,
}

/// Morphology filter owning its structuring element.
#[derive(Debug, Clone, PartialEq)]
pub struct Morphology {
    element: Kernel,
    offsets: Vec<(i32, i32)>,
    op: MorphOp,
}

impl Morphology {
    /// Creates a filter from an arbitrary element.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidKernel`] if the element has no non-zero weight.
    pub fn with_element(element: Kernel, op: MorphOp) -> OpsResult<Self> {
        let offsets: Vec<(i32, i32)> = element.active_offsets().collect();
        if offsets.is_empty() {
            return Err(OpsError::InvalidKernel(
                "structuring element has no active taps".into(),
            ));
        }
        Ok(Self {
            element,
            offsets,
            op,
        })
    }

    /// Square all-ones element of the given radius.
    pub fn new(radius: u32, op: MorphOp) -> Self {
        let element = Kernel::structuring_element(radius);
        let offsets = element.active_offsets().collect();
        Self {
            element,
            offsets,
            op,
        }
    }

    /// Dilation with a square element.
    pub fn dilation(radius: u32) -> Self {
        Self::new(radius, MorphOp::Dilate)
    }

    /// Erosion with a square element.
    pub fn erosion(radius: u32) -> Self {
        Self::new(radius, MorphOp::Erode)
    }

    /// Opening with a square element.
    pub fn opening(radius: u32) -> Self {
        Self::new(radius, MorphOp::Open)
    }

    /// Closing with a square element.
    pub fn closing(radius: u32) -> Self {
        Self::new(radius, MorphOp::Close)
    }

    /// Morphological gradient with a square element.
    pub fn gradient(radius: u32) -> Self {
        Self::new(radius, MorphOp::Gradient)
    }

    /// The structuring element.
    pub fn element(&self) -> &Kernel {
        &self.element
    }

    /// The configured operation.
    pub fn op(&self) -> MorphOp {
        self.op
    }

    fn dilate(&self, src: &PixelBuffer) -> OpsResult<PixelBuffer> {
        generate(src.width(), src.height(), |x, y| {
            self.reduce(src, x, y, 0, u8::max)
        })
    }

    fn erode(&self, src: &PixelBuffer) -> OpsResult<PixelBuffer> {
        generate(src.width(), src.height(), |x, y| {
            self.reduce(src, x, y, 255, u8::min)
        })
    }

    /// Folds every active neighbor of `(x, y)` channel by channel.
    #[inline]
    fn reduce(&self, src: &PixelBuffer, x: u32, y: u32, init: u8, f: fn(u8, u8) -> u8) -> Rgb {
        let mut acc = Rgb::gray(init);
        for &(dx, dy) in &self.offsets {
            let px = src.pixel_clamped(x as i64 + dx as i64, y as i64 + dy as i64);
            acc = acc.zip_map(px, f);
        }
        acc
    }
}

impl Filter for Morphology {
    fn name(&self) -> &'static str {
        match self.op {
            MorphOp::Dilate => "Dilation",
            MorphOp::Erode => "Erosion",
            MorphOp::Open => "Opening",
            MorphOp::Close => "Closing",
            MorphOp::Gradient => "Grad",
        }
    }

    fn process(&self, src: &PixelBuffer) -> OpsResult<PixelBuffer> {
        trace!(
            op = ?self.op,
            width = src.width(),
            height = src.height(),
            taps = self.offsets.len(),
            "morphology"
        );
        match self.op {
            MorphOp::Dilate => self.dilate(src),
            MorphOp::Erode => self.erode(src),
            MorphOp::Open => self.dilate(&self.erode(src)?),
            MorphOp::Close => self.erode(&self.dilate(src)?),
            MorphOp::Gradient => {
                let dilated = self.dilate(src)?;
                let eroded = self.erode(src)?;
                Difference.process_pair(&dilated, &eroded)
            }
        }
    }
}
