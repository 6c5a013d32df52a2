//! Sliding-window order statistic per channel.
//!
//! For each channel the `(2r + 1)²` border-addressed neighbors are collected
//! row-major, sorted ascending, and one rank is picked. The window radius is
//! independent of any kernel; it defaults to 3 (a 7x7 window).
//!
//! Two rank rules are available:
//!
//! - [`MedianRank::UpperMiddle`] (default) - sorted index `center + 1`,
//!   which reproduces historical output bit for bit
//! - [`MedianRank::Center`] - the true median, sorted index `center`
//!
//! The index is capped at the last element so radius 0 is well defined.

use pixfx_core::{PixelBuffer, Rgb};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::raster::generate;
use crate::{Filter, OpsResult};

/// Default window radius.
pub const DEFAULT_RADIUS: u32 = 3;

/// Which sorted index is taken as the filter output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MedianRank {
    /// One position past the center.
    #[default]
    UpperMiddle,
    /// The exact center.
    Center,
}

impl MedianRank {
    /// Sorted index selected for a window of `len` samples.
    #[inline]
    pub fn index(self, len: usize) -> usize {
        let center = len / 2;
        match self {
            Self::UpperMiddle => (center + 1).min(len - 1),
            Self::Center => center,
        }
    }
}

/// Median filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Median {
    radius: u32,
    rank: MedianRank,
}

impl Default for Median {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS, MedianRank::default())
    }
}

impl Median {
    /// Creates a median filter.
    pub fn new(radius: u32, rank: MedianRank) -> Self {
        Self { radius, rank }
    }

    /// Canonical median with the default radius.
    pub fn canonical() -> Self {
        Self::new(DEFAULT_RADIUS, MedianRank::Center)
    }

    /// Window radius.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Rank rule.
    pub fn rank(&self) -> MedianRank {
        self.rank
    }

    fn median_at(&self, src: &PixelBuffer, x: u32, y: u32, idx: usize) -> Rgb {
        let r = self.radius as i64;
        let size = 2 * self.radius as usize + 1;
        let mut samples: [Vec<u8>; 3] = [
            Vec::with_capacity(size * size),
            Vec::with_capacity(size * size),
            Vec::with_capacity(size * size),
        ];
        for dy in -r..=r {
            for dx in -r..=r {
                let px = src.pixel_clamped(x as i64 + dx, y as i64 + dy);
                samples[0].push(px.r);
                samples[1].push(px.g);
                samples[2].push(px.b);
            }
        }
        let mut out = [0u8; 3];
        for (o, s) in out.iter_mut().zip(samples.iter_mut()) {
            s.sort_unstable();
            *o = s[idx];
        }
        Rgb::from_array(out)
    }
}

impl Filter for Median {
    fn name(&self) -> &'static str {
        "Median"
    }

    fn process(&self, src: &PixelBuffer) -> OpsResult<PixelBuffer> {
        let size = 2 * self.radius as usize + 1;
        let idx = self.rank.index(size * size);
        trace!(
            width = src.width(),
            height = src.height(),
            radius = self.radius,
            rank_index = idx,
            "median"
        );
        generate(src.width(), src.height(), |x, y| self.median_at(src, x, y, idx))
    }
}
