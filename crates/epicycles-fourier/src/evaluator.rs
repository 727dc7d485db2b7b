//! Epicycle chain evaluation
//!
//! Each component contributes one vector, anchored at the tip of the
//! previous one. The chain's final tip is the series value at `t`, offset by
//! the origin.

use crate::series::FourierSeries;
use epicycles_core::{CartesianPoint, SampledPath, Vector};
use tracing::debug;

/// Chain of vectors for `series` at time `t`, starting at `origin`
///
/// Output order follows the series order. `t` is unconstrained; the chain
/// repeats with period 1.
pub fn evaluate(series: &FourierSeries, t: f64, origin: CartesianPoint) -> Vec<Vector> {
    series
        .components()
        .iter()
        .scan(origin, |current, component| {
            let (dx, dy) = component.evaluate(t).to_cartesian();
            let start = *current;
            *current = start.offset(dx, dy);
            Some(Vector::new(start, *current))
        })
        .collect()
}

/// End of the chain at time `t`, or `origin` for an empty series
pub fn tip(series: &FourierSeries, t: f64, origin: CartesianPoint) -> CartesianPoint {
    series.components().iter().fold(origin, |current, component| {
        let (dx, dy) = component.evaluate(t).to_cartesian();
        current.offset(dx, dy)
    })
}

/// Offset that moves the centroid of `path` to the centre of a
/// `width` × `height` canvas
pub fn centering_offset(path: &SampledPath, width: f64, height: f64) -> Option<CartesianPoint> {
    let centroid = path.centroid()?;
    Some(CartesianPoint::new(
        width / 2.0 - centroid.x,
        height / 2.0 - centroid.y,
    ))
}

/// Tips traced over one period at `t = time_step, 2·time_step, …, 1`
///
/// A tip closer than `min_distance_sq` (squared) to the last kept point is
/// dropped. A non-positive `time_step` yields nothing.
pub fn trace(
    series: &FourierSeries,
    time_step: f64,
    origin: CartesianPoint,
    min_distance_sq: f64,
) -> Vec<CartesianPoint> {
    if time_step <= 0.0 || !time_step.is_finite() {
        return Vec::new();
    }
    let steps = (1.0 / time_step).round().max(1.0) as usize;

    let mut points: Vec<CartesianPoint> = Vec::new();
    for step in 1..=steps {
        let point = tip(series, step as f64 * time_step, origin);
        let keep = points
            .last()
            .is_none_or(|last| point.distance_sq(last) >= min_distance_sq);
        if keep {
            points.push(point);
        }
    }

    debug!(steps, kept = points.len(), "traced outline");
    points
}

/// Largest distance between sample `i` of `path` and the series tip at
/// `t = i / len`, with the chain anchored at the origin
pub fn reconstruction_error(series: &FourierSeries, path: &SampledPath) -> Option<f64> {
    if path.is_empty() {
        return None;
    }
    let time_step = 1.0 / path.len() as f64;
    path.points()
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            tip(series, i as f64 * time_step, CartesianPoint::ORIGIN).distance(sample)
        })
        .reduce(f64::max)
}
