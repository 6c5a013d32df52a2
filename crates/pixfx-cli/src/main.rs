//! pixfx - apply raster filters to an image
//!
//! Decodes one input image, runs each selected filter on it and writes one
//! PNG per filter into the output directory.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod io;
mod run;

#[derive(Parser)]
#[command(name = "pixfx")]
#[command(author, version, about = "Apply raster filters to an image")]
#[command(long_about = "
Applies a fixed catalog of raster filters to one image and writes one PNG
per filter, named after the filter, into the output directory.

Examples:
  pixfx -p photo.jpg                      # Every filter into ./Images
  pixfx -p photo.jpg -f gauss -f median   # Only the selected filters
  pixfx -p photo.jpg -f glass --seed 42   # Reproducible jitter
  pixfx -p photo.jpg --legacy-half-width  # Filter only the left half
")]
pub(crate) struct Cli {
    /// Input image
    #[arg(short = 'p', long = "path")]
    pub input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "Images")]
    pub out_dir: PathBuf,

    /// Filters to apply (repeatable, default: all)
    #[arg(short, long = "filter", value_enum)]
    pub filters: Vec<FilterName>,

    /// Kernel or window radius override
    #[arg(long)]
    pub radius: Option<u32>,

    /// Gaussian sigma
    #[arg(long)]
    pub sigma: Option<f32>,

    /// Seed for the glass filter
    #[arg(long)]
    pub seed: Option<u64>,

    /// Filter only columns 0..=width/2 and copy the rest unchanged
    #[arg(long)]
    pub legacy_half_width: bool,

    /// Use the exact center rank for the median filter
    #[arg(long)]
    pub median_canonical: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, default_value = "0")]
    pub threads: usize,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Filters selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum FilterName {
    Invert,
    Blur,
    Gauss,
    Grayscale,
    Sepia,
    Bright,
    SobelX,
    SobelY,
    Sharpness,
    GrayWorld,
    #[value(alias = "bar-graph")]
    Histogram,
    Glass,
    Motion,
    Dilation,
    Erosion,
    Opening,
    Closing,
    Grad,
    Median,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    run::run(&cli)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["pixfx", "-p", "in.png"]).unwrap();
        assert_eq!(cli.out_dir, PathBuf::from("Images"));
        assert!(cli.filters.is_empty());
        assert!(!cli.legacy_half_width);
        assert_eq!(cli.threads, 0);
    }

    #[test]
    fn test_repeated_filters() {
        let cli = Cli::try_parse_from([
            "pixfx", "-p", "in.png", "-f", "sobel-x", "-f", "median", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.filters, vec![FilterName::SobelX, FilterName::Median]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_path_is_required() {
        assert!(Cli::try_parse_from(["pixfx"]).is_err());
    }
}
