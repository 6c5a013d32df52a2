//! # pixfx-ops
//!
//! The raster filter engine. Every filter reads an immutable
//! [`PixelBuffer`](pixfx_core::PixelBuffer) and returns a new buffer of the
//! same dimensions.
//!
//! # Modules
//!
//! - [`kernel`] - kernel factories (box, Gaussian, Sobel, sharpen, motion, structuring element)
//! - [`convolve`] - weighted neighborhood sums
//! - [`morphology`] - dilation, erosion and their compounds
//! - [`median`] - sliding-window order statistic
//! - [`point`] - invert, grayscale, sepia, brightness
//! - [`stats`] - gray-world balance and histogram stretch
//! - [`difference`] - saturating buffer subtraction
//! - [`jitter`] - random-offset resampling
//! - [`filter`] - the [`Filter`] trait and [`LegacyHalfWidth`]
//!
//! # Example
//!
//! ```rust
//! use pixfx_core::{PixelBuffer, Rgb};
//! use pixfx_ops::{Convolution, Filter, Median, PointFilter};
//!
//! let img = PixelBuffer::filled(16, 16, Rgb::new(200, 120, 40)).unwrap();
//!
//! let blurred = Convolution::gaussian(2, 1.5)?.process(&img)?;
//! let denoised = Median::default().process(&blurred)?;
//! let gray = PointFilter::grayscale().process(&denoised)?;
//! assert_eq!(gray.dimensions(), (16, 16));
//! # Ok::<(), pixfx_ops::OpsError>(())
//! ```
//!
//! # Parallelism
//!
//! With the default `parallel` feature, output rows are computed on the
//! rayon thread pool. Results are identical with the feature disabled.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod raster;

pub mod convolve;
pub mod difference;
pub mod filter;
pub mod jitter;
pub mod kernel;
pub mod median;
pub mod morphology;
pub mod point;
pub mod stats;

pub use convolve::Convolution;
pub use difference::Difference;
pub use error::{OpsError, OpsResult};
pub use filter::{Filter, LegacyHalfWidth};
pub use jitter::Jitter;
pub use kernel::Kernel;
pub use median::{Median, MedianRank};
pub use morphology::{MorphOp, Morphology};
pub use point::{PointFilter, PointOp};
pub use stats::{AggregateColor, GrayWorld, Histogram, HistogramStretch};
