//! The common single-image filter capability.
//!
//! Every single-input filter family implements [`Filter`]: it reads an
//! immutable [`PixelBuffer`] and returns a freshly allocated one of the same
//! dimensions. Dispatch is static; callers that need to pick a filter at
//! runtime match on their own closed set of variants.
//!
//! ```rust
//! use pixfx_core::{PixelBuffer, Rgb};
//! use pixfx_ops::{Filter, PointFilter};
//!
//! let img = PixelBuffer::filled(2, 2, Rgb::WHITE).unwrap();
//! let out = PointFilter::invert().process(&img).unwrap();
//! assert_eq!(out.pixel(0, 0), Rgb::BLACK);
//! ```

use pixfx_core::PixelBuffer;
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::OpsResult;

/// A transform from one buffer to a new buffer of the same size.
pub trait Filter {
    /// Short name used in logs and output file names.
    fn name(&self) -> &'static str;

    /// Applies the filter. The input is never modified.
    fn process(&self, src: &PixelBuffer) -> OpsResult<PixelBuffer>;
}

impl<F: Filter + ?Sized> Filter for &F {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn process(&self, src: &PixelBuffer) -> OpsResult<PixelBuffer> {
        (**self).process(src)
    }
}

/// Reproduces the historical left-half coverage of a filter.
///
/// Columns `0..=width / 2` come from the wrapped filter; the remaining
/// columns are copied from the input unchanged. Each output pixel of every
/// single-input filter depends only on the input, so splicing a full run
/// gives the same pixels as a run restricted to the left half.
#[derive(Debug, Clone)]
pub struct LegacyHalfWidth<F> {
    inner: F,
}

impl<F: Filter> LegacyHalfWidth<F> {
    /// Wraps `inner`.
    pub fn new(inner: F) -> Self {
        Self { inner }
    }

    /// Returns the wrapped filter.
    pub fn into_inner(self) -> F {
        self.inner
    }

    /// Last column (inclusive) taken from the wrapped filter.
    #[inline]
    pub fn last_filtered_column(width: u32) -> u32 {
        (width / 2).min(width.saturating_sub(1))
    }
}

impl<F: Filter> Filter for LegacyHalfWidth<F> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn process(&self, src: &PixelBuffer) -> OpsResult<PixelBuffer> {
        trace!(filter = self.inner.name(), "legacy half-width process");
        let filtered = self.inner.process(src)?;
        let last = Self::last_filtered_column(src.width());
        debug!(last_column = last, width = src.width(), "splicing unfiltered right half");

        let mut out = src.clone();
        let width = src.width() as usize;
        for (dst_row, new_row) in out
            .pixels_mut()
            .chunks_mut(width)
            .zip(filtered.pixels().chunks(width))
        {
            dst_row[..=last as usize].copy_from_slice(&new_row[..=last as usize]);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointFilter;
    use pixfx_core::Rgb;

    #[test]
    fn test_half_width_splices_columns() {
        let src = PixelBuffer::filled(6, 3, Rgb::WHITE).unwrap();
        let out = LegacyHalfWidth::new(PointFilter::invert())
            .process(&src)
            .unwrap();
        for (x, _, px) in out.enumerate_pixels() {
            if x <= 3 {
                assert_eq!(px, Rgb::BLACK, "column {x} should be filtered");
            } else {
                assert_eq!(px, Rgb::WHITE, "column {x} should be untouched");
            }
        }
    }

    #[test]
    fn test_half_width_single_column() {
        let src = PixelBuffer::filled(1, 2, Rgb::WHITE).unwrap();
        let out = LegacyHalfWidth::new(PointFilter::invert())
            .process(&src)
            .unwrap();
        assert!(out.pixels().iter().all(|&p| p == Rgb::BLACK));
    }

    #[test]
    fn test_filter_by_reference() {
        let f = PointFilter::invert();
        let by_ref = &f;
        assert_eq!(by_ref.name(), "Invert");
        let src = PixelBuffer::filled(1, 1, Rgb::gray(5)).unwrap();
        assert_eq!(by_ref.process(&src).unwrap().pixel(0, 0), Rgb::gray(250));
    }
}
