//! Clamp-to-edge coordinate addressing.
//!
//! Neighborhood filters read pixels at `(x + dx, y + dy)`, which may fall
//! outside the image. Such requests are resolved here by clamping each axis
//! independently to `[0, dim - 1]`, so the nearest edge pixel is replicated.
//! Resolution never fails.
//!
//! ```rust
//! use pixfx_core::border::clamp_coord;
//!
//! assert_eq!(clamp_coord(-3, 7, 5, 5), (0, 4));
//! assert_eq!(clamp_coord(2, 2, 5, 5), (2, 2));
//! ```

/// Clamps a single axis coordinate to `[0, dim - 1]`.
///
/// `dim` must be non-zero; every [`crate::PixelBuffer`] guarantees that.
#[inline]
pub fn clamp_axis(v: i64, dim: u32) -> u32 {
    debug_assert!(dim > 0, "clamp_axis on empty axis");
    v.clamp(0, dim.saturating_sub(1) as i64) as u32
}

/// Clamps `(x, y)` into a `width x height` image.
#[inline]
pub fn clamp_coord(x: i64, y: i64, width: u32, height: u32) -> (u32, u32) {
    (clamp_axis(x, width), clamp_axis(y, height))
}

/// Resolves a neighbor at offset `(dx, dy)` from an in-range `(x, y)`.
#[inline]
pub fn offset_coord(x: u32, y: u32, dx: i32, dy: i32, width: u32, height: u32) -> (u32, u32) {
    clamp_coord(x as i64 + dx as i64, y as i64 + dy as i64, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_is_identity() {
        for y in 0..4 {
            for x in 0..6 {
                assert_eq!(clamp_coord(x, y, 6, 4), (x as u32, y as u32));
            }
        }
    }

    #[test]
    fn test_axes_clamp_independently() {
        assert_eq!(clamp_coord(-1, -1, 3, 3), (0, 0));
        assert_eq!(clamp_coord(10, -1, 3, 3), (2, 0));
        assert_eq!(clamp_coord(-10, 10, 3, 3), (0, 2));
        assert_eq!(clamp_coord(1, 99, 3, 3), (1, 2));
    }

    #[test]
    fn test_single_pixel_axis() {
        assert_eq!(clamp_axis(-5, 1), 0);
        assert_eq!(clamp_axis(5, 1), 0);
    }

    #[test]
    fn test_offset_coord() {
        assert_eq!(offset_coord(0, 0, -3, -3, 7, 7), (0, 0));
        assert_eq!(offset_coord(6, 6, 3, 3, 7, 7), (6, 6));
        assert_eq!(offset_coord(3, 3, -1, 2, 7, 7), (2, 5));
    }
}
