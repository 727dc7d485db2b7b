//! # Epicycles Fourier
//!
//! Fourier series of sampled closed paths.
//!
//! - [`coefficient::solve`] integrates one coefficient with the trapezoidal rule
//! - [`series`] builds the component list over a symmetric frequency range
//! - [`evaluator`] turns a series and a time value into a chain of vectors
//!
//! Coefficients are computed by direct integration, `O(samples * coefficients)`.

pub mod coefficient;
pub mod evaluator;
pub mod series;

pub use coefficient::solve;
pub use evaluator::{centering_offset, evaluate, reconstruction_error, tip, trace};
pub use series::{
    build_series, build_series_from_path, build_series_parallel, build_series_with_progress,
    frequency_range, FourierComponent, FourierSeries,
};
