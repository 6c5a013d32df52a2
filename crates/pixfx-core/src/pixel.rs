//! 8-bit RGB pixel value and channel helpers.
//!
//! Every buffer in pixfx stores [`Rgb`] values: three `u8` channels, no
//! alpha. Filters that accumulate in floating point or signed integers
//! come back to the channel range through [`clamp_channel`] and
//! [`clamp_channel_i32`].
//!
//! # Luminance
//!
//! Luminance uses the Rec.601 weights `0.299 R + 0.587 G + 0.114 B`,
//! evaluated in integer thousandths and truncated:
//!
//! ```rust
//! use pixfx_core::Rgb;
//!
//! assert_eq!(Rgb::new(255, 0, 0).luminance(), 76);
//! assert_eq!(Rgb::WHITE.luminance(), 255);
//! ```

/// Rec.601 red weight, in thousandths.
pub const REC601_LUMA_R: u32 = 299;

/// Rec.601 green weight, in thousandths.
pub const REC601_LUMA_G: u32 = 587;

/// Rec.601 blue weight, in thousandths.
pub const REC601_LUMA_B: u32 = 114;

/// Number of channels per pixel.
pub const CHANNELS: usize = 3;

/// An 8-bit RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a pixel from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a neutral gray pixel.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Returns channels as `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Creates a pixel from `[r, g, b]`.
    #[inline]
    pub const fn from_array(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Applies `f` to every channel.
    #[inline]
    pub fn map<F: Fn(u8) -> u8>(self, f: F) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Combines two pixels channel by channel.
    #[inline]
    pub fn zip_map<F: Fn(u8, u8) -> u8>(self, other: Self, f: F) -> Self {
        Self::new(f(self.r, other.r), f(self.g, other.g), f(self.b, other.b))
    }

    /// Truncated mean of the three channels, `(r + g + b) / 3`.
    #[inline]
    pub fn mean(self) -> u8 {
        ((self.r as u32 + self.g as u32 + self.b as u32) / 3) as u8
    }

    /// Truncated Rec.601 luminance.
    #[inline]
    pub fn luminance(self) -> u8 {
        let weighted = REC601_LUMA_R * self.r as u32
            + REC601_LUMA_G * self.g as u32
            + REC601_LUMA_B * self.b as u32;
        (weighted / 1000) as u8
    }
}

impl From<[u8; 3]> for Rgb {
    #[inline]
    fn from(arr: [u8; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb> for [u8; 3] {
    #[inline]
    fn from(px: Rgb) -> Self {
        px.to_array()
    }
}

/// Clamps a floating-point channel value to `[0, 255]` and truncates it.
///
/// NaN maps to 0.
#[inline]
pub fn clamp_channel(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, 255.0) as u8
}

/// Clamps a signed integer channel value to `[0, 255]`.
#[inline]
pub fn clamp_channel_i32(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}
