//! Square weight matrices for convolution and morphology.
//!
//! A [`Kernel`] has odd size `2 * radius + 1` and row-major weights with the
//! center at `radius * size + radius`. Kernels are immutable once built.
//!
//! # Factories
//!
//! - [`Kernel::box_blur`] - uniform average, sums to 1
//! - [`Kernel::gaussian`] - `exp(-(dx² + dy²) / σ²)`, normalized to sum 1
//! - [`Kernel::sobel_x`] / [`Kernel::sobel_y`] - 3x3 derivatives, not normalized
//! - [`Kernel::sharpen`] - 3x3, center 5, orthogonal neighbors -1
//! - [`Kernel::motion`] - `1 / size` at every perfect-square linear index
//! - [`Kernel::structuring_element`] - all ones, used as a binary mask
//! - [`Kernel::identity`] - single 1 at the center
//!
//! # Example
//!
//! ```rust
//! use pixfx_ops::kernel::Kernel;
//!
//! let k = Kernel::gaussian(2, 1.5).unwrap();
//! assert_eq!(k.size(), 5);
//! assert!((k.sum() - 1.0).abs() < 1e-5);
//! ```

use crate::{OpsError, OpsResult};

/// Convolution kernel or structuring element.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    radius: u32,
    weights: Vec<f32>,
}

impl Kernel {
    /// Creates a kernel from a size and row-major weights.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidKernel`] if `size` is zero or even, or if
    /// `weights.len() != size * size`.
    pub fn new(size: u32, weights: Vec<f32>) -> OpsResult<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(OpsError::InvalidKernel(format!(
                "kernel size must be odd and >= 1, got {size}"
            )));
        }
        let expected = size as usize * size as usize;
        if weights.len() != expected {
            return Err(OpsError::InvalidKernel(format!(
                "kernel data size {} doesn't match {}x{}",
                weights.len(),
                size,
                size
            )));
        }
        Ok(Self {
            radius: size / 2,
            weights,
        })
    }

    /// Creates a kernel of the given radius with every weight set to `value`.
    fn uniform(radius: u32, value: f32) -> Self {
        let size = 2 * radius as usize + 1;
        Self {
            radius,
            weights: vec![value; size * size],
        }
    }

    /// Creates a fixed 3x3 kernel.
    fn fixed3(weights: [f32; 9]) -> Self {
        Self {
            radius: 1,
            weights: weights.to_vec(),
        }
    }

    /// Box blur: every weight is `1 / size²`.
    ///
    /// ```rust
    /// use pixfx_ops::kernel::Kernel;
    ///
    /// let k = Kernel::box_blur(1);
    /// assert_eq!(k.size(), 3);
    /// assert!(k.weights().iter().all(|&w| (w - 1.0 / 9.0).abs() < 1e-6));
    /// ```
    pub fn box_blur(radius: u32) -> Self {
        let size = 2 * radius as usize + 1;
        Self::uniform(radius, 1.0 / (size * size) as f32)
    }

    /// Gaussian kernel, normalized so the weights sum to 1.
    ///
    /// Weight at offset `(dx, dy)` is `exp(-(dx² + dy²) / sigma²)` before
    /// normalization. Radius and sigma are independent.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidParameter`] if `sigma` is not finite and positive.
    pub fn gaussian(radius: u32, sigma: f32) -> OpsResult<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(OpsError::InvalidParameter(format!(
                "gaussian sigma must be finite and > 0, got {sigma}"
            )));
        }
        let r = radius as i64;
        let sigma2 = sigma * sigma;
        let size = 2 * radius as usize + 1;

        let mut weights = Vec::with_capacity(size * size);
        let mut sum = 0.0f32;
        for dy in -r..=r {
            for dx in -r..=r {
                let d = (dx * dx + dy * dy) as f32;
                let w = (-d / sigma2).exp();
                weights.push(w);
                sum += w;
            }
        }

        // The center weight is exp(0) = 1, so sum >= 1.
        for w in &mut weights {
            *w /= sum;
        }

        Ok(Self { radius, weights })
    }

    /// Horizontal Sobel derivative.
    #[rustfmt::skip]
    pub fn sobel_x() -> Self {
        Self::fixed3([
            -1.0, 0.0, 1.0,
            -2.0, 0.0, 2.0,
            -1.0, 0.0, 1.0,
        ])
    }

    /// Vertical Sobel derivative.
    #[rustfmt::skip]
    pub fn sobel_y() -> Self {
        Self::fixed3([
            -1.0, -2.0, -1.0,
             0.0,  0.0,  0.0,
             1.0,  2.0,  1.0,
        ])
    }

    /// Sharpening kernel, sums to 1.
    #[rustfmt::skip]
    pub fn sharpen() -> Self {
        Self::fixed3([
             0.0, -1.0,  0.0,
            -1.0,  5.0, -1.0,
             0.0, -1.0,  0.0,
        ])
    }

    /// Sparse streak kernel.
    ///
    /// The weight at linear index `i` is `1 / size` when `i` is a perfect
    /// square and 0 otherwise. Exactly `size` indices in `0..size²` are
    /// perfect squares, so the weights sum to 1.
    pub fn motion(radius: u32) -> Self {
        let size = 2 * radius as usize + 1;
        let weight = 1.0 / size as f32;
        let mut weights = vec![0.0f32; size * size];
        for root in 0..size {
            weights[root * root] = weight;
        }
        Self { radius, weights }
    }

    /// All-ones structuring element for dilation and erosion.
    pub fn structuring_element(radius: u32) -> Self {
        Self::uniform(radius, 1.0)
    }

    /// Identity kernel: 1 at the center, 0 elsewhere.
    pub fn identity(radius: u32) -> Self {
        let mut k = Self::uniform(radius, 0.0);
        let center = k.center_index();
        k.weights[center] = 1.0;
        k
    }

    /// Kernel radius.
    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Kernel side length, `2 * radius + 1`.
    #[inline]
    pub fn size(&self) -> u32 {
        2 * self.radius + 1
    }

    /// Row-major weights.
    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Linear index of the center weight.
    #[inline]
    pub fn center_index(&self) -> usize {
        let r = self.radius as usize;
        r * self.size() as usize + r
    }

    /// Weight at offset `(dx, dy)` from the center, both in `[-radius, radius]`.
    #[inline]
    pub fn weight_at(&self, dx: i32, dy: i32) -> f32 {
        let r = self.radius as i32;
        debug_assert!(dx.abs() <= r && dy.abs() <= r, "kernel offset out of range");
        let row = (dy + r) as usize;
        let col = (dx + r) as usize;
        self.weights[row * self.size() as usize + col]
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }

    /// Iterates `(dx, dy, weight)` in row-major order.
    pub fn taps(&self) -> impl Iterator<Item = (i32, i32, f32)> + '_ {
        let size = self.size() as usize;
        let r = self.radius as i32;
        self.weights.iter().enumerate().map(move |(i, &w)| {
            let dy = (i / size) as i32 - r;
            let dx = (i % size) as i32 - r;
            (dx, dy, w)
        })
    }

    /// Iterates offsets `(dx, dy)` whose weight is non-zero.
    pub fn active_offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.taps()
            .filter(|&(_, _, w)| w != 0.0)
            .map(|(dx, dy, _)| (dx, dy))
    }
}
