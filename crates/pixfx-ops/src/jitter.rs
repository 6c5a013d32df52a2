//! Random-offset resampling ("glass" distortion).
//!
//! Each output pixel copies the source pixel at `(x + dx, y + dy)`, where
//! `dx` and `dy` are drawn independently and uniformly from
//! `[-amplitude, amplitude]` and the result is border-addressed.
//!
//! Offsets are drawn sequentially in row-major order (`dx` then `dy` per
//! pixel), so a seeded generator always yields the same image regardless of
//! thread count.
//!
//! # Example
//!
//! ```rust
//! use pixfx_core::{PixelBuffer, Rgb};
//! use pixfx_ops::{Filter, Jitter};
//!
//! let img = PixelBuffer::from_fn(16, 16, |x, y| Rgb::new(x as u8, y as u8, 0)).unwrap();
//! let glass = Jitter::seeded(42);
//! assert_eq!(glass.process(&img).unwrap(), glass.process(&img).unwrap());
//! ```

use pixfx_core::PixelBuffer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::{Filter, OpsResult};

/// Default maximum offset in pixels.
pub const DEFAULT_AMPLITUDE: u32 = 5;

/// Jitter filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jitter {
    amplitude: u32,
    seed: Option<u64>,
}

impl Default for Jitter {
    fn default() -> Self {
        Self {
            amplitude: DEFAULT_AMPLITUDE,
            seed: None,
        }
    }
}

impl Jitter {
    /// Creates a jitter filter.
    pub fn new(amplitude: u32, seed: Option<u64>) -> Self {
        Self { amplitude, seed }
    }

    /// Default amplitude with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(DEFAULT_AMPLITUDE, Some(seed))
    }

    /// Maximum offset.
    pub fn amplitude(&self) -> u32 {
        self.amplitude
    }

    /// Configured seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Applies the filter drawing offsets from `rng`.
    pub fn process_with_rng<R: Rng>(
        &self,
        src: &PixelBuffer,
        rng: &mut R,
    ) -> OpsResult<PixelBuffer> {
        trace!(
            width = src.width(),
            height = src.height(),
            amplitude = self.amplitude,
            "jitter"
        );
        let a = self.amplitude as i64;
        let out = PixelBuffer::from_fn(src.width(), src.height(), |x, y| {
            let dx = rng.gen_range(-a..=a);
            let dy = rng.gen_range(-a..=a);
            src.pixel_clamped(x as i64 + dx, y as i64 + dy)
        })?;
        Ok(out)
    }
}

impl Filter for Jitter {
    fn name(&self) -> &'static str {
        "Glass"
    }

    fn process(&self, src: &PixelBuffer) -> OpsResult<PixelBuffer> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => {
                debug!("no jitter seed configured, seeding from entropy");
                StdRng::from_entropy()
            }
        };
        self.process_with_rng(src, &mut rng)
    }
}
