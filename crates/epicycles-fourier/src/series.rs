//! Fourier series construction
//!
//! A series is the list of coefficients for every integer frequency in
//! `[floor(-k/2), floor(k/2))`, kept in ascending frequency order. That
//! order is also the order the vectors are chained when evaluating.

use crate::coefficient::solve;
use epicycles_core::{Phasor, SampledPath, SeriesError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::ops::Range;
use tracing::{debug, trace};

/// One rotating vector of the series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FourierComponent {
    /// Integer frequency `n`
    pub frequency_index: i64,
    /// `c_n`, the vector at `t = 0`
    pub coefficient: Phasor,
}

impl FourierComponent {
    pub fn new(frequency_index: i64, coefficient: Phasor) -> Self {
        Self {
            frequency_index,
            coefficient,
        }
    }

    /// Radians per unit time, `n·2π`
    pub fn angular_velocity(&self) -> f64 {
        self.frequency_index as f64 * TAU
    }

    /// The component's vector at time `t`
    pub fn evaluate(&self, t: f64) -> Phasor {
        self.coefficient * Phasor::unit(self.angular_velocity() * t)
    }
}

/// Ordered list of components
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FourierSeries {
    components: Vec<FourierComponent>,
}

impl FourierSeries {
    pub fn new(components: Vec<FourierComponent>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[FourierComponent] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Component for frequency `n`, if it is part of the series
    pub fn component(&self, n: i64) -> Option<&FourierComponent> {
        self.components.iter().find(|c| c.frequency_index == n)
    }
}

/// Frequencies covered by a series of `num_coefficients` components
///
/// Uses floor division on both ends, so odd counts get one more negative
/// frequency than positive ones: `5` gives `-3..2`.
pub fn frequency_range(num_coefficients: usize) -> Range<i64> {
    let k = num_coefficients as i64;
    (-k).div_euclid(2)..k.div_euclid(2)
}

/// Validate the sample sequences and pair them into phasors
fn prepare_samples(x_samples: &[f64], y_samples: &[f64]) -> Result<Vec<Phasor>, SeriesError> {
    if x_samples.len() != y_samples.len() {
        return Err(SeriesError::MismatchedSamples {
            x_len: x_samples.len(),
            y_len: y_samples.len(),
        });
    }
    if x_samples.is_empty() {
        return Err(SeriesError::EmptyInput);
    }

    Ok(x_samples
        .iter()
        .zip(y_samples)
        .map(|(x, y)| Phasor::from_cartesian(*x, *y))
        .collect())
}

/// Build the series for samples given as separate x and y sequences
pub fn build_series(
    x_samples: &[f64],
    y_samples: &[f64],
    num_coefficients: usize,
) -> Result<FourierSeries, SeriesError> {
    build_series_with_progress(x_samples, y_samples, num_coefficients, |_| {})
}

/// Build the series for a sampled path
pub fn build_series_from_path(
    path: &SampledPath,
    num_coefficients: usize,
) -> Result<FourierSeries, SeriesError> {
    let (xs, ys) = path.split_xy();
    build_series(&xs, &ys, num_coefficients)
}

/// Same as [`build_series`], reporting progress in `[0, 1]` after each
/// component
pub fn build_series_with_progress<F>(
    x_samples: &[f64],
    y_samples: &[f64],
    num_coefficients: usize,
    mut progress_callback: F,
) -> Result<FourierSeries, SeriesError>
where
    F: FnMut(f32),
{
    let samples = prepare_samples(x_samples, y_samples)?;
    let time_step = 1.0 / samples.len() as f64;
    let range = frequency_range(num_coefficients);
    let total = range.clone().count().max(1);

    debug!(
        samples = samples.len(),
        frequencies = ?range,
        "building Fourier series"
    );

    let mut components = Vec::with_capacity(total);
    for n in range {
        let coefficient = solve(&samples, time_step, n);
        trace!(n, magnitude = coefficient.magnitude, "coefficient");
        components.push(FourierComponent::new(n, coefficient));
        progress_callback(components.len() as f32 / total as f32);
    }

    Ok(FourierSeries::new(components))
}

/// Same as [`build_series`], with one parallel task per frequency
///
/// Results are collected in frequency order and match the sequential
/// build exactly.
pub fn build_series_parallel(
    x_samples: &[f64],
    y_samples: &[f64],
    num_coefficients: usize,
) -> Result<FourierSeries, SeriesError> {
    let samples = prepare_samples(x_samples, y_samples)?;
    let time_step = 1.0 / samples.len() as f64;
    let range = frequency_range(num_coefficients);

    debug!(
        samples = samples.len(),
        frequencies = ?range,
        threads = rayon::current_num_threads(),
        "building Fourier series in parallel"
    );

    let start = range.start;
    let components = (0..range.count())
        .into_par_iter()
        .map(|offset| {
            let n = start + offset as i64;
            FourierComponent::new(n, solve(&samples, time_step, n))
        })
        .collect();

    Ok(FourierSeries::new(components))
}
