//! Per-pixel subtraction of two equal-sized buffers.
//!
//! `out = clamp(a - b, 0, 255)` per channel, so negative differences floor
//! at 0 instead of wrapping. Used on its own as an image gradient and by
//! [`crate::MorphOp::Gradient`].

use pixfx_core::PixelBuffer;
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::raster::generate;
use crate::{OpsError, OpsResult};

/// Saturating buffer difference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Difference;

impl Difference {
    /// Computes `a - b`.
    ///
    /// # Errors
    ///
    /// [`OpsError::SizeMismatch`] if the buffers differ in width or height.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixfx_core::{PixelBuffer, Rgb};
    /// use pixfx_ops::Difference;
    ///
    /// let a = PixelBuffer::filled(2, 2, Rgb::new(100, 50, 0)).unwrap();
    /// let b = PixelBuffer::filled(2, 2, Rgb::new(30, 80, 0)).unwrap();
    /// let d = Difference.process_pair(&a, &b).unwrap();
    /// assert_eq!(d.pixel(1, 1), Rgb::new(70, 0, 0));
    /// ```
    pub fn process_pair(&self, a: &PixelBuffer, b: &PixelBuffer) -> OpsResult<PixelBuffer> {
        trace!(width = a.width(), height = a.height(), "difference");
        if !a.same_dimensions(b) {
            return Err(OpsError::size_mismatch(a.dimensions(), b.dimensions()));
        }
        generate(a.width(), a.height(), |x, y| {
            a.pixel(x, y).zip_map(b.pixel(x, y), u8::saturating_sub)
        })
    }
}
