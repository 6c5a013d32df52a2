//! Kernel convolution with clamp-to-edge borders.
//!
//! For every output pixel `(x, y)` and kernel tap `(dx, dy)` the source
//! pixel at the border-addressed `(x + dx, y + dy)` is weighted and summed
//! per channel in `f32`. The sum is clamped to `[0, 255]` once, after
//! accumulation, and truncated toward zero. Kernels with negative weights
//! (Sobel) saturate rather than wrap.
//!
//! # Example
//!
//! ```rust
//! use pixfx_core::{PixelBuffer, Rgb};
//! use pixfx_ops::{Convolution, Filter};
//!
//! let img = PixelBuffer::filled(3, 3, Rgb::gray(128)).unwrap();
//! let edges = Convolution::sobel_x().process(&img).unwrap();
//! assert!(edges.pixels().iter().all(|&p| p == Rgb::BLACK));
//! ```

use pixfx_core::{clamp_channel, PixelBuffer, Rgb};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::kernel::Kernel;
use crate::raster::generate;
use crate::{Filter, OpsResult};

/// Default radius for blur and motion kernels.
pub const DEFAULT_RADIUS: u32 = 1;

/// Default Gaussian sigma.
pub const DEFAULT_SIGMA: f32 = 1.0;

/// Filter that convolves with an owned [`Kernel`].
#[derive(Debug, Clone, PartialEq)]
pub struct Convolution {
    kernel: Kernel,
    name: &'static str,
}

impl Convolution {
    /// Convolves with an arbitrary kernel.
    pub fn new(kernel: Kernel) -> Self {
        Self::named(kernel, "Convolution")
    }

    fn named(kernel: Kernel, name: &'static str) -> Self {
        Self { kernel, name }
    }

    /// Uniform box blur.
    pub fn blur(radius: u32) -> Self {
        Self::named(Kernel::box_blur(radius), "Blur")
    }

    /// Normalized Gaussian blur.
    pub fn gaussian(radius: u32, sigma: f32) -> OpsResult<Self> {
        Ok(Self::named(Kernel::gaussian(radius, sigma)?, "Gauss"))
    }

    /// Horizontal Sobel edges.
    pub fn sobel_x() -> Self {
        Self::named(Kernel::sobel_x(), "SobelX")
    }

    /// Vertical Sobel edges.
    pub fn sobel_y() -> Self {
        Self::named(Kernel::sobel_y(), "SobelY")
    }

    /// 3x3 sharpening.
    pub fn sharpen() -> Self {
        Self::named(Kernel::sharpen(), "Sharpness")
    }

    /// Sparse motion streak.
    pub fn motion(radius: u32) -> Self {
        Self::named(Kernel::motion(radius), "Motion")
    }

    /// The kernel in use.
    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Convolves the neighborhood of `(x, y)`.
    fn convolve_at(&self, src: &PixelBuffer, x: u32, y: u32) -> Rgb {
        let mut sums = [0.0f32; 3];
        for (dx, dy, w) in self.kernel.taps() {
            if w == 0.0 {
                continue;
            }
            let px = src.pixel_clamped(x as i64 + dx as i64, y as i64 + dy as i64);
            sums[0] += px.r as f32 * w;
            sums[1] += px.g as f32 * w;
            sums[2] += px.b as f32 * w;
        }
        Rgb::new(
            clamp_channel(sums[0]),
            clamp_channel(sums[1]),
            clamp_channel(sums[2]),
        )
    }
}

impl Filter for Convolution {
    fn name(&self) -> &'static str {
        self.name
    }

    fn process(&self, src: &PixelBuffer) -> OpsResult<PixelBuffer> {
        trace!(
            filter = self.name,
            width = src.width(),
            height = src.height(),
            radius = self.kernel.radius(),
            "convolve"
        );
        generate(src.width(), src.height(), |x, y| self.convolve_at(src, x, y))
    }
}
