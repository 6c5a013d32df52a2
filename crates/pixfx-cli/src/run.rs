//! Filter selection and the per-filter output loop.

use anyhow::{Context, Result};
#[allow(unused_imports)]
use tracing::{debug, info, trace};

use pixfx_core::PixelBuffer;
use pixfx_ops::{
    convolve, jitter, median, morphology, Convolution, Filter, Jitter, LegacyHalfWidth, Median,
    MedianRank, Morphology, PointFilter,
};

use crate::{Cli, FilterName};

impl FilterName {
    /// Every filter, in output order.
    pub const ALL: [FilterName; 19] = [
        FilterName::Invert,
        FilterName::Blur,
        FilterName::Gauss,
        FilterName::Grayscale,
        FilterName::Sepia,
        FilterName::Bright,
        FilterName::SobelX,
        FilterName::SobelY,
        FilterName::Sharpness,
        FilterName::GrayWorld,
        FilterName::Histogram,
        FilterName::Glass,
        FilterName::Motion,
        FilterName::Dilation,
        FilterName::Erosion,
        FilterName::Opening,
        FilterName::Closing,
        FilterName::Grad,
        FilterName::Median,
    ];
}

/// Parameters shared by every selected filter.
#[derive(Debug, Clone, Copy)]
pub struct FilterParams {
    pub radius: Option<u32>,
    pub sigma: Option<f32>,
    pub seed: Option<u64>,
    pub legacy_half_width: bool,
    pub median_canonical: bool,
}

impl From<&Cli> for FilterParams {
    fn from(cli: &Cli) -> Self {
        Self {
            radius: cli.radius,
            sigma: cli.sigma,
            seed: cli.seed,
            legacy_half_width: cli.legacy_half_width,
            median_canonical: cli.median_canonical,
        }
    }
}

fn apply<F: Filter>(filter: F, src: &PixelBuffer, legacy: bool) -> Result<(&'static str, PixelBuffer)> {
    let name = filter.name();
    let out = if legacy {
        LegacyHalfWidth::new(filter).process(src)
    } else {
        filter.process(src)
    }
    .with_context(|| format!("{name} failed"))?;
    Ok((name, out))
}

/// Runs one filter and returns its output file stem with the result.
pub fn run_filter(
    which: FilterName,
    src: &PixelBuffer,
    params: &FilterParams,
) -> Result<(&'static str, PixelBuffer)> {
    let legacy = params.legacy_half_width;
    let kernel_radius = params.radius.unwrap_or(convolve::DEFAULT_RADIUS);
    let morph_radius = params.radius.unwrap_or(morphology::DEFAULT_RADIUS);
    match which {
        FilterName::Invert => apply(PointFilter::invert(), src, legacy),
        FilterName::Grayscale => apply(PointFilter::grayscale(), src, legacy),
        FilterName::Sepia => apply(PointFilter::sepia(), src, legacy),
        FilterName::Bright => apply(PointFilter::brightness(), src, legacy),
        FilterName::Blur => apply(Convolution::blur(kernel_radius), src, legacy),
        FilterName::Gauss => {
            let sigma = params.sigma.unwrap_or(convolve::DEFAULT_SIGMA);
            apply(Convolution::gaussian(kernel_radius, sigma)?, src, legacy)
        }
        FilterName::SobelX => apply(Convolution::sobel_x(), src, legacy),
        FilterName::SobelY => apply(Convolution::sobel_y(), src, legacy),
        FilterName::Sharpness => apply(Convolution::sharpen(), src, legacy),
        FilterName::Motion => apply(Convolution::motion(kernel_radius), src, legacy),
        FilterName::GrayWorld => apply(pixfx_ops::GrayWorld, src, legacy),
        FilterName::Histogram => apply(pixfx_ops::HistogramStretch, src, legacy),
        FilterName::Glass => apply(
            Jitter::new(jitter::DEFAULT_AMPLITUDE, params.seed),
            src,
            legacy,
        ),
        FilterName::Dilation => apply(Morphology::dilation(morph_radius), src, legacy),
        FilterName::Erosion => apply(Morphology::erosion(morph_radius), src, legacy),
        FilterName::Opening => apply(Morphology::opening(morph_radius), src, legacy),
        FilterName::Closing => apply(Morphology::closing(morph_radius), src, legacy),
        FilterName::Grad => apply(Morphology::gradient(morph_radius), src, legacy),
        FilterName::Median => {
            let rank = if params.median_canonical {
                MedianRank::Center
            } else {
                MedianRank::UpperMiddle
            };
            let radius = params.radius.unwrap_or(median::DEFAULT_RADIUS);
            apply(Median::new(radius, rank), src, legacy)
        }
    }
}

pub fn run(cli: &Cli) -> Result<()> {
    trace!(input = %cli.input.display(), out_dir = %cli.out_dir.display(), "run");

    let src = crate::io::load_image(&cli.input)?;
    info!(width = src.width(), height = src.height(), input = %cli.input.display(), "Loaded image");

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("Failed to create: {}", cli.out_dir.display()))?;

    let selected: &[FilterName] = if cli.filters.is_empty() {
        &FilterName::ALL
    } else {
        &cli.filters
    };
    let params = FilterParams::from(cli);

    for &which in selected {
        let (name, out) = run_filter(which, &src, &params)?;
        let path = cli.out_dir.join(format!("{name}.png"));
        crate::io::save_image(&path, out)?;
        info!(filter = name, output = %path.display(), "Wrote");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixfx_core::Rgb;

    fn params() -> FilterParams {
        FilterParams {
            radius: None,
            sigma: None,
            seed: Some(1),
            legacy_half_width: false,
            median_canonical: false,
        }
    }

    #[test]
    fn test_output_names() {
        let img = PixelBuffer::filled(4, 4, Rgb::gray(128)).unwrap();
        let names: Vec<_> = FilterName::ALL
            .iter()
            .map(|&f| run_filter(f, &img, &params()).unwrap().0)
            .collect();
        assert_eq!(
            names,
            [
                "Invert", "Blur", "Gauss", "GrayScale", "Sepia", "Bright", "SobelX", "SobelY",
                "Sharpness", "GrayWorld", "BarGraphFilter", "Glass", "Motion", "Dilation",
                "Erosion", "Opening", "Closing", "Grad", "Median",
            ]
        );
    }

    #[test]
    fn test_legacy_half_width_keeps_right_half() {
        let img = PixelBuffer::filled(6, 2, Rgb::new(10, 20, 30)).unwrap();
        let p = FilterParams {
            legacy_half_width: true,
            ..params()
        };
        let (_, out) = run_filter(FilterName::Invert, &img, &p).unwrap();
        assert_eq!(out.pixel(3, 0), Rgb::new(245, 235, 225));
        assert_eq!(out.pixel(4, 1), Rgb::new(10, 20, 30));
    }

    #[test]
    fn test_bad_sigma_is_reported() {
        let img = PixelBuffer::new(2, 2).unwrap();
        let p = FilterParams {
            sigma: Some(0.0),
            ..params()
        };
        assert!(run_filter(FilterName::Gauss, &img, &p).is_err());
    }
}
