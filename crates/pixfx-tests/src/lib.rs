//! Integration tests for pixfx crates.
//!
//! End-to-end checks that decode an image, run filters from `pixfx-ops`
//! over `pixfx-core` buffers and encode the result again.

#[cfg(test)]
mod tests {
    use std::path::Path;

    use image::RgbImage;
    use pixfx_core::{PixelBuffer, Rgb};
    use pixfx_ops::{
        Convolution, Difference, Filter, GrayWorld, HistogramStretch, Jitter, LegacyHalfWidth,
        Median, MedianRank, Morphology, OpsError, PointFilter,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    fn to_buffer(img: &RgbImage) -> PixelBuffer {
        PixelBuffer::from_raw_rgb(img.width(), img.height(), img.as_raw()).unwrap()
    }

    fn to_image(buf: PixelBuffer) -> RgbImage {
        let (w, h) = buf.dimensions();
        RgbImage::from_raw(w, h, buf.into_raw_rgb()).unwrap()
    }

    fn read_png(path: &Path) -> PixelBuffer {
        to_buffer(&image::open(path).unwrap().to_rgb8())
    }

    /// Smooth gradient with a few hard edges.
    fn test_pattern(w: u32, h: u32) -> PixelBuffer {
        PixelBuffer::from_fn(w, h, |x, y| {
            let edge = if x == w / 3 || y == h / 2 { 200 } else { 0 };
            Rgb::new(
                (x * 255 / w.max(1)) as u8,
                (y * 255 / h.max(1)) as u8,
                edge,
            )
        })
        .unwrap()
    }

    /// Test full pipeline: decode -> filter -> encode -> decode
    #[test]
    fn test_png_filter_roundtrip() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.png");
        let output = dir.path().join("Invert.png");

        to_image(test_pattern(48, 32)).save(&input).unwrap();

        let src = read_png(&input);
        let filter = PointFilter::invert();
        let out = filter.process(&src).unwrap();
        to_image(out.clone()).save(&output).unwrap();

        let reloaded = read_png(&output);
        assert_eq!(reloaded, out);
        assert_eq!(reloaded.dimensions(), (48, 32));
        for (a, b) in src.pixels().iter().zip(reloaded.pixels()) {
            assert_eq!(a.r, 255 - b.r);
            assert_eq!(a.g, 255 - b.g);
            assert_eq!(a.b, 255 - b.b);
        }
    }

    #[test]
    fn test_every_filter_writes_png() {
        let dir = tempdir().unwrap();
        let src = test_pattern(20, 14);

        let outputs: Vec<(&str, PixelBuffer)> = vec![
            ("Blur", Convolution::blur(1).process(&src).unwrap()),
            ("Gauss", Convolution::gaussian(3, 2.0).unwrap().process(&src).unwrap()),
            ("SobelY", Convolution::sobel_y().process(&src).unwrap()),
            ("Motion", Convolution::motion(4).process(&src).unwrap()),
            ("GrayWorld", GrayWorld.process(&src).unwrap()),
            ("BarGraphFilter", HistogramStretch.process(&src).unwrap()),
            ("Glass", Jitter::seeded(5).process(&src).unwrap()),
            ("Closing", Morphology::closing(2).process(&src).unwrap()),
            ("Grad", Morphology::gradient(2).process(&src).unwrap()),
            ("Median", Median::default().process(&src).unwrap()),
        ];

        for (name, out) in outputs {
            assert_eq!(out.dimensions(), src.dimensions(), "{name}");
            let path = dir.path().join(format!("{name}.png"));
            to_image(out.clone()).save(&path).unwrap();
            assert_eq!(read_png(&path), out, "{name}");
        }
    }

    #[test]
    fn test_white_pixel_inverts_to_black() {
        let img = PixelBuffer::filled(1, 1, Rgb::WHITE).unwrap();
        let out = PointFilter::invert().process(&img).unwrap();
        assert_eq!(out.pixel(0, 0), Rgb::BLACK);
    }

    #[test]
    fn test_pure_red_grayscale() {
        let img = PixelBuffer::filled(1, 1, Rgb::new(255, 0, 0)).unwrap();
        let out = PointFilter::grayscale().process(&img).unwrap();
        assert_eq!(out.pixel(0, 0), Rgb::gray(76));
    }

    #[test]
    fn test_sobel_on_uniform_gray_is_black() {
        let img = PixelBuffer::filled(3, 3, Rgb::gray(128)).unwrap();
        let out = Convolution::sobel_x().process(&img).unwrap();
        assert!(out.pixels().iter().all(|&p| p == Rgb::BLACK));
    }

    #[test]
    fn test_median_restores_isolated_black_pixel() {
        let mut img = PixelBuffer::filled(5, 5, Rgb::WHITE).unwrap();
        img.set_pixel(2, 2, Rgb::BLACK);
        for median in [Median::default(), Median::canonical()] {
            let out = median.process(&img).unwrap();
            assert_eq!(out.pixel(2, 2), Rgb::WHITE);
        }
    }

    #[test]
    fn test_two_intensity_histogram_stretch() {
        let img = PixelBuffer::from_fn(6, 6, |x, _| {
            if x < 3 { Rgb::gray(10) } else { Rgb::gray(200) }
        })
        .unwrap();
        let out = HistogramStretch.process(&img).unwrap();
        assert_eq!(out.pixel(0, 0), Rgb::BLACK);
        assert_eq!(out.pixel(5, 5), Rgb::WHITE);
    }

    #[test]
    fn test_invert_is_self_inverse() {
        let img = test_pattern(17, 9);
        let invert = PointFilter::invert();
        let twice = invert.process(&invert.process(&img).unwrap()).unwrap();
        assert_eq!(twice, img);
    }

    #[test]
    fn test_open_and_close_orders_differ() {
        // A lone bright dot disappears under erode-then-dilate but survives
        // dilate-then-erode.
        let mut img = PixelBuffer::new(9, 9).unwrap();
        img.set_pixel(4, 4, Rgb::WHITE);

        let dilate = Morphology::dilation(1);
        let erode = Morphology::erosion(1);
        let dilate_of_erode = dilate.process(&erode.process(&img).unwrap()).unwrap();
        let erode_of_dilate = erode.process(&dilate.process(&img).unwrap()).unwrap();

        assert_ne!(dilate_of_erode, erode_of_dilate);
        assert_eq!(dilate_of_erode, Morphology::opening(1).process(&img).unwrap());
        assert_eq!(erode_of_dilate, Morphology::closing(1).process(&img).unwrap());
        assert_eq!(erode_of_dilate.pixel(4, 4), Rgb::WHITE);
        assert!(dilate_of_erode.pixels().iter().all(|&p| p == Rgb::BLACK));
    }

    #[test]
    fn test_gradient_matches_difference_of_dilation_and_erosion() {
        let img = test_pattern(16, 12);
        let dilated = Morphology::dilation(2).process(&img).unwrap();
        let eroded = Morphology::erosion(2).process(&img).unwrap();
        let expected = Difference.process_pair(&dilated, &eroded).unwrap();
        assert_eq!(Morphology::gradient(2).process(&img).unwrap(), expected);
    }

    #[test]
    fn test_difference_rejects_mismatched_buffers() {
        let a = PixelBuffer::new(8, 8).unwrap();
        let b = PixelBuffer::new(8, 7).unwrap();
        assert!(matches!(
            Difference.process_pair(&a, &b),
            Err(OpsError::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_gray_world_keeps_neutral_image() {
        let img = PixelBuffer::filled(7, 5, Rgb::gray(180)).unwrap();
        assert_eq!(GrayWorld.process(&img).unwrap(), img);
    }

    #[test]
    fn test_jitter_seed_survives_png() {
        let dir = tempdir().unwrap();
        let src = test_pattern(30, 30);

        let a = Jitter::seeded(1234).process(&src).unwrap();
        let mut rng = StdRng::seed_from_u64(1234);
        let b = Jitter::default().process_with_rng(&src, &mut rng).unwrap();
        assert_eq!(a, b);

        let path = dir.path().join("Glass.png");
        to_image(a.clone()).save(&path).unwrap();
        assert_eq!(read_png(&path), a);
    }

    #[test]
    fn test_legacy_half_width_leaves_right_side() {
        let src = test_pattern(10, 6);
        let full = Convolution::blur(1).process(&src).unwrap();
        let half = LegacyHalfWidth::new(Convolution::blur(1)).process(&src).unwrap();
        for (x, y, px) in half.enumerate_pixels() {
            if x <= 5 {
                assert_eq!(px, full.pixel(x, y));
            } else {
                assert_eq!(px, src.pixel(x, y));
            }
        }
    }

    #[test]
    fn test_canonical_median_differs_on_ramp() {
        let img = PixelBuffer::from_fn(3, 3, |x, y| Rgb::gray((y * 3 + x) as u8 * 10)).unwrap();
        let upper = Median::new(1, MedianRank::UpperMiddle).process(&img).unwrap();
        let center = Median::new(1, MedianRank::Center).process(&img).unwrap();
        assert_ne!(upper.pixel(1, 1), center.pixel(1, 1));
    }
}
