//! The pixel buffer every filter reads from and writes into.
//!
//! # Memory Layout
//!
//! Pixels are stored **row-major**, top-to-bottom, one [`Rgb`] per pixel:
//!
//! ```text
//! pixels[y * width + x] == pixel at (x, y)
//! ```
//!
//! Width and height are always non-zero and `pixels.len() == width * height`.
//! Constructors enforce this, so filters can index without further checks.
//!
//! # Usage
//!
//! ```rust
//! use pixfx_core::{PixelBuffer, Rgb};
//!
//! let mut img = PixelBuffer::filled(4, 3, Rgb::gray(128)).unwrap();
//! img.set_pixel(1, 2, Rgb::WHITE);
//!
//! assert_eq!(img.dimensions(), (4, 3));
//! assert_eq!(img.pixel(1, 2), Rgb::WHITE);
//! // Out-of-range reads are clamped to the nearest edge pixel.
//! assert_eq!(img.pixel_clamped(-5, 10), img.pixel(0, 2));
//! ```

use crate::border::clamp_coord;
use crate::pixel::CHANNELS;
use crate::{Error, Result, Rgb};

/// Owned 8-bit RGB image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Creates a black buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Rgb::BLACK)
    }

    /// Creates a buffer where every pixel is `color`.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self> {
        let count = checked_pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![color; count],
        })
    }

    /// Creates a buffer from row-major pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if a dimension is zero or the
    /// pixel count does not match.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self> {
        let expected = checked_pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} pixels, got {}", expected, pixels.len()),
            ));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Creates a buffer from interleaved `[R G B R G B ...]` bytes.
    pub fn from_raw_rgb(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        let expected = checked_pixel_count(width, height)?;
        if data.len() != expected * CHANNELS {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!(
                    "expected {} bytes, got {}",
                    expected * CHANNELS,
                    data.len()
                ),
            ));
        }
        let pixels = data
            .chunks_exact(CHANNELS)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Creates a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Rgb,
    {
        let count = checked_pixel_count(width, height)?;
        let mut pixels = Vec::with_capacity(count);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Returns interleaved `[R G B ...]` bytes, consuming the buffer.
    pub fn into_raw_rgb(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * CHANNELS);
        for px in self.pixels {
            out.extend_from_slice(&px.to_array());
        }
        out
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Returns `true` if `other` has the same width and height.
    #[inline]
    pub fn same_dimensions(&self, other: &PixelBuffer) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.pixels[self.index(x, y)]
    }

    /// Returns the pixel at `(x, y)`, or [`Error::OutOfBounds`].
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Rgb> {
        if x < self.width && y < self.height {
            Ok(self.pixel(x, y))
        } else {
            Err(Error::out_of_bounds(x, y, self.width, self.height))
        }
    }

    /// Returns the pixel nearest to a possibly out-of-range `(x, y)`.
    #[inline]
    pub fn pixel_clamped(&self, x: i64, y: i64) -> Rgb {
        let (cx, cy) = clamp_coord(x, y, self.width, self.height);
        self.pixels[self.index(cx, cy)]
    }

    /// Sets the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// All pixels, row-major, mutable.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Returns row `y` as a slice.
    #[inline]
    pub fn row(&self, y: u32) -> &[Rgb] {
        let start = y as usize * self.width as usize;
        &self.pixels[start..start + self.width as usize]
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> + '_ {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// Iterates over `(x, y, pixel)`.
    pub fn enumerate_pixels(&self) -> impl Iterator<Item = (u32, u32, Rgb)> + '_ {
        let w = self.width;
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, &px)| ((i as u32) % w, (i as u32) / w, px))
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

fn checked_pixel_count(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_dimensions(
            width,
            height,
            "width and height must be > 0",
        ));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| Error::invalid_dimensions(width, height, "pixel count overflows"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(w: u32, h: u32) -> PixelBuffer {
        PixelBuffer::from_fn(w, h, |x, y| Rgb::new(x as u8, y as u8, (x + y) as u8)).unwrap()
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(PixelBuffer::new(0, 1).is_err());
        assert!(PixelBuffer::new(1, 0).is_err());
        assert!(PixelBuffer::filled(0, 0, Rgb::WHITE).is_err());
    }

    #[test]
    fn test_from_pixels_length_checked() {
        let err = PixelBuffer::from_pixels(2, 2, vec![Rgb::BLACK; 3]).unwrap_err();
        assert!(err.to_string().contains("expected 4 pixels"));
        assert!(PixelBuffer::from_pixels(2, 2, vec![Rgb::BLACK; 4]).is_ok());
    }

    #[test]
    fn test_raw_rgb_roundtrip() {
        let raw: Vec<u8> = (0..2 * 3 * 3).map(|v| v as u8).collect();
        let img = PixelBuffer::from_raw_rgb(2, 3, &raw).unwrap();
        assert_eq!(img.pixel(1, 0), Rgb::new(3, 4, 5));
        assert_eq!(img.into_raw_rgb(), raw);
    }

    #[test]
    fn test_raw_rgb_length_checked() {
        assert!(PixelBuffer::from_raw_rgb(2, 2, &[0u8; 11]).is_err());
    }

    #[test]
    fn test_row_major_layout() {
        let img = gradient(5, 4);
        assert_eq!(img.pixels()[2 * 5 + 3], img.pixel(3, 2));
        assert_eq!(img.row(2)[3], Rgb::new(3, 2, 5));
        assert_eq!(img.rows().count(), 4);
    }

    #[test]
    fn test_checked_access() {
        let img = gradient(3, 3);
        assert!(img.get_pixel(2, 2).is_ok());
        let err = img.get_pixel(3, 0).unwrap_err();
        assert!(err.is_bounds_error());
    }

    #[test]
    #[should_panic(expected = "pixel out of bounds")]
    fn test_pixel_past_row_end_panics() {
        // (width, 0) would otherwise alias (0, 1) in the flat storage.
        let img = gradient(3, 2);
        let _ = img.pixel(3, 0);
    }

    #[test]
    #[should_panic(expected = "pixel out of bounds")]
    fn test_set_pixel_out_of_bounds_panics() {
        let mut img = gradient(3, 2);
        img.set_pixel(0, 2, Rgb::WHITE);
    }

    #[test]
    fn test_clamped_access() {
        let img = gradient(3, 3);
        assert_eq!(img.pixel_clamped(-1, -1), img.pixel(0, 0));
        assert_eq!(img.pixel_clamped(5, 1), img.pixel(2, 1));
        assert_eq!(img.pixel_clamped(1, 9), img.pixel(1, 2));
    }

    #[test]
    fn test_enumerate_pixels() {
        let img = gradient(3, 2);
        let coords: Vec<(u32, u32)> = img.enumerate_pixels().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords[0], (0, 0));
        assert_eq!(coords[4], (1, 1));
        for (x, y, px) in img.enumerate_pixels() {
            assert_eq!(px, img.pixel(x, y));
        }
    }
}
