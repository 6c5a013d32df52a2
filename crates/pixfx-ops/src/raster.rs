//! Row-parallel output generation.
//!
//! Every single-pass filter computes each output pixel from the immutable
//! input alone, so output rows are independent. With the `parallel`
//! feature rows are handed to rayon; without it they run in order. Both
//! paths produce identical buffers.

use pixfx_core::{PixelBuffer, Rgb};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::OpsResult;

/// Builds a `width x height` buffer from `f(x, y)`.
#[cfg(feature = "parallel")]
pub(crate) fn generate<F>(width: u32, height: u32, f: F) -> OpsResult<PixelBuffer>
where
    F: Fn(u32, u32) -> Rgb + Sync,
{
    let mut out = PixelBuffer::new(width, height)?;
    out.pixels_mut()
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.iter_mut().enumerate() {
                *px = f(x as u32, y as u32);
            }
        });
    Ok(out)
}

/// Builds a `width x height` buffer from `f(x, y)` (single-threaded fallback).
#[cfg(not(feature = "parallel"))]
pub(crate) fn generate<F>(width: u32, height: u32, f: F) -> OpsResult<PixelBuffer>
where
    F: Fn(u32, u32) -> Rgb + Sync,
{
    let mut out = PixelBuffer::new(width, height)?;
    for (y, row) in out.pixels_mut().chunks_mut(width as usize).enumerate() {
        for (x, px) in row.iter_mut().enumerate() {
            *px = f(x as u32, y as u32);
        }
    }
    Ok(out)
}

/// Applies `f` to every pixel of `src`, independent of neighbors.
pub(crate) fn map_pixels<F>(src: &PixelBuffer, f: F) -> OpsResult<PixelBuffer>
where
    F: Fn(Rgb) -> Rgb + Sync,
{
    generate(src.width(), src.height(), |x, y| f(src.pixel(x, y)))
}
