//! # Epicycles
//!
//! Turns vector path outlines into Fourier series drawn as chains of
//! rotating vectors:
//! - Path data (SVG `M L H V C Q Z` subset) sampled at fixed resolution
//! - Coefficients by trapezoidal integration, no FFT
//! - Chain evaluation at any time value
//!
//! ## Architecture
//!
//! Epicycles is organized as a workspace with multiple crates:
//!
//! 1. **epicycles-core** - Phasor algebra, geometry, error types
//! 2. **epicycles-path** - Path command parsing, sampling, SVG loading
//! 3. **epicycles-fourier** - Coefficient integration, series, evaluation
//! 4. **epicycles-settings** - TOML/JSON configuration
//! 5. **epicycles** - Headless driver that ties the crates together

pub mod cli;
pub mod types;

pub use epicycles_core::{
    CartesianPoint, Error, PathError, Phasor, Result, SampledPath, SeriesError, Vector,
};
pub use epicycles_fourier::{
    build_series, build_series_from_path, build_series_parallel, build_series_with_progress,
    centering_offset, evaluate, frequency_range, reconstruction_error, solve, tip, trace,
    FourierComponent, FourierSeries,
};
pub use epicycles_path::{
    extract_path_data, load_svg, sample, CommandKind, PathCommandToken, PathSampler,
    SamplerOptions,
};
pub use epicycles_settings::{Config, PlaybackSettings, SamplingSettings, SeriesSettings};
pub use types::SeriesReport;

use anyhow::Context;
use cli::{Options, Source};
use tracing::info;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, stdout is reserved for the report
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}

/// Settings for a run: file config (if any) with command-line overrides
pub fn resolve_config(options: &Options) -> anyhow::Result<Config> {
    let mut config = match &options.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(k) = options.coefficients {
        config.series.num_coefficients = k;
    }
    if let Some(scale) = options.scale {
        config.sampling.scale = scale;
    }
    config.validate().context("invalid settings")?;
    Ok(config)
}

/// Sample the source, build its series and trace it once around
pub fn compute_report(source: &Source, config: &Config) -> anyhow::Result<SeriesReport> {
    let sampler_options = SamplerOptions {
        samples_per_segment: config.sampling.samples_per_segment,
        close_path: config.sampling.close_path,
    };

    let path = match source {
        Source::SvgFile(file) => load_svg(file, config.sampling.scale, sampler_options)
            .with_context(|| format!("failed to load {}", file.display()))?,
        Source::PathData(data) => PathSampler::new(sampler_options)
            .sample(data)
            .context("failed to sample path data")?
            .normalized(config.sampling.scale),
    };

    let (xs, ys) = path.split_xy();
    let k = config.series.num_coefficients;
    let series = if config.series.parallel {
        build_series_parallel(&xs, &ys, k)?
    } else {
        build_series(&xs, &ys, k)?
    };
    info!(
        samples = path.len(),
        components = series.len(),
        "series built"
    );

    let playback = &config.playback;
    let origin = centering_offset(&path, playback.width as f64, playback.height as f64)
        .unwrap_or(CartesianPoint::ORIGIN);
    let outline = trace(
        &series,
        playback.time_step,
        origin,
        playback.min_trail_distance_sq,
    );
    let reconstruction_error = reconstruction_error(&series, &path).unwrap_or(0.0);

    Ok(SeriesReport {
        sample_count: path.len(),
        origin,
        series,
        outline,
        reconstruction_error,
    })
}
