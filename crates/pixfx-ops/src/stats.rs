//! Two-pass filters driven by whole-image statistics.
//!
//! Both filters first reduce the full buffer to an aggregate, then remap
//! every pixel from that aggregate. The reduction completes before the map
//! pass starts and is read-only afterwards.
//!
//! - [`GrayWorld`] - scales each channel by `gray / mean_channel`
//! - [`HistogramStretch`] - linearly maps `[ymin, ymax]` of the mean
//!   intensity histogram onto `[0, 255]`
//!
//! Degenerate statistics fall back to identity: a zero channel mean leaves
//! that channel unscaled, and a histogram with a single populated bin leaves
//! the image unchanged.

use pixfx_core::{clamp_channel_i32, PixelBuffer, Rgb};
#[allow(unused_imports)]
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::raster::map_pixels;
use crate::{Filter, OpsResult};

/// Number of histogram bins.
pub const BINS: usize = 256;

/// Histogram of truncated mean intensity `(r + g + b) / 3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u32; BINS],
}

impl Histogram {
    /// Builds the histogram of every pixel in `src`.
    pub fn from_buffer(src: &PixelBuffer) -> Self {
        Self {
            counts: histogram_counts(src),
        }
    }

    /// Bin counts.
    pub fn counts(&self) -> &[u32; BINS] {
        &self.counts
    }

    /// Total number of samples.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Lowest bin with a non-zero count.
    pub fn lowest_populated(&self) -> Option<u8> {
        self.counts.iter().position(|&c| c > 0).map(|i| i as u8)
    }

    /// Highest bin with a non-zero count.
    pub fn highest_populated(&self) -> Option<u8> {
        self.counts.iter().rposition(|&c| c > 0).map(|i| i as u8)
    }
}

#[cfg(feature = "parallel")]
fn histogram_counts(src: &PixelBuffer) -> [u32; BINS] {
    src.pixels()
        .par_chunks(src.width() as usize)
        .fold(
            || [0u32; BINS],
            |mut acc, row| {
                for px in row {
                    acc[px.mean() as usize] += 1;
                }
                acc
            },
        )
        .reduce(
            || [0u32; BINS],
            |mut a, b| {
                for (x, y) in a.iter_mut().zip(b.iter()) {
                    *x += y;
                }
                a
            },
        )
}

#[cfg(not(feature = "parallel"))]
fn histogram_counts(src: &PixelBuffer) -> [u32; BINS] {
    let mut counts = [0u32; BINS];
    for px in src.pixels() {
        counts[px.mean() as usize] += 1;
    }
    counts
}

/// Per-channel means of a buffer and the gray level derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateColor {
    /// Channel means, clamped to `[0, 255]`.
    pub means: [f32; 3],
    /// `(R + G + B) / 3` over the truncated means.
    pub gray: u8,
}

impl AggregateColor {
    /// Reduces every pixel of `src`.
    pub fn from_buffer(src: &PixelBuffer) -> Self {
        let sums = channel_sums(src);
        let n = src.pixel_count() as f64;
        let means = sums.map(|s| (s as f64 / n).clamp(0.0, 255.0) as f32);
        let truncated = means.map(|m| m as u32);
        let gray = ((truncated[0] + truncated[1] + truncated[2]) / 3) as u8;
        Self { means, gray }
    }

    /// Truncated integer means, `[R, G, B]`.
    pub fn integer_means(&self) -> [u32; 3] {
        self.means.map(|m| m as u32)
    }
}

#[cfg(feature = "parallel")]
fn channel_sums(src: &PixelBuffer) -> [u64; 3] {
    src.pixels()
        .par_chunks(src.width() as usize)
        .map(row_sums)
        .reduce(|| [0u64; 3], |a, b| [a[0] + b[0], a[1] + b[1], a[2] + b[2]])
}

#[cfg(not(feature = "parallel"))]
fn channel_sums(src: &PixelBuffer) -> [u64; 3] {
    row_sums(src.pixels())
}

fn row_sums(row: &[Rgb]) -> [u64; 3] {
    row.iter().fold([0u64; 3], |acc, px| {
        [
            acc[0] + px.r as u64,
            acc[1] + px.g as u64,
            acc[2] + px.b as u64,
        ]
    })
}

/// Gray-world color balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrayWorld;

impl GrayWorld {
    /// Maps one pixel given the image aggregate.
    #[inline]
    pub fn balance(px: Rgb, means: [u32; 3], gray: u8) -> Rgb {
        let scale = |c: u8, mean: u32| -> u8 {
            if mean == 0 {
                c
            } else {
                (c as u32 * gray as u32 / mean).min(255) as u8
            }
        };
        Rgb::new(scale(px.r, means[0]), scale(px.g, means[1]), scale(px.b, means[2]))
    }
}

impl Filter for GrayWorld {
    fn name(&self) -> &'static str {
        "GrayWorld"
    }

    fn process(&self, src: &PixelBuffer) -> OpsResult<PixelBuffer> {
        trace!(width = src.width(), height = src.height(), "gray world");
        let aggregate = AggregateColor::from_buffer(src);
        let means = aggregate.integer_means();
        let gray = aggregate.gray;
        debug!(?means, gray, "gray world statistics");
        if means.contains(&0) {
            debug!(?means, "zero channel mean, channel left unscaled");
        }
        map_pixels(src, move |px| GrayWorld::balance(px, means, gray))
    }
}

/// Histogram stretch to the full channel range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistogramStretch;

impl HistogramStretch {
    /// Maps one pixel given the populated intensity range.
    ///
    /// Requires `ymax > ymin`.
    #[inline]
    pub fn stretch(px: Rgb, ymin: u8, ymax: u8) -> Rgb {
        let lo = ymin as i32;
        let span = ymax as i32 - lo;
        debug_assert!(span > 0, "degenerate histogram range");
        px.map(|c| clamp_channel_i32((c as i32 - lo) * 255 / span))
    }
}

impl Filter for HistogramStretch {
    fn name(&self) -> &'static str {
        "BarGraphFilter"
    }

    fn process(&self, src: &PixelBuffer) -> OpsResult<PixelBuffer> {
        trace!(width = src.width(), height = src.height(), "histogram stretch");
        let hist = Histogram::from_buffer(src);
        // Buffers are never empty, so both bounds exist.
        let (ymin, ymax) = match (hist.lowest_populated(), hist.highest_populated()) {
            (Some(lo), Some(hi)) => (lo, hi),
            _ => (0, 0),
        };
        debug!(ymin, ymax, "histogram range");
        if ymax <= ymin {
            debug!(ymin, "single populated bin, identity mapping");
            return Ok(src.clone());
        }
        map_pixels(src, move |px| HistogramStretch::stretch(px, ymin, ymax))
    }
}
