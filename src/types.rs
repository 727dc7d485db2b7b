//! Application-level types for the root crate

use epicycles_core::CartesianPoint;
use epicycles_fourier::FourierSeries;
use serde::Serialize;

/// Everything the driver prints: the series plus the outline it traces
#[derive(Debug, Clone, Serialize)]
pub struct SeriesReport {
    /// Number of path samples the series was computed from
    pub sample_count: usize,
    /// Chain anchor that centres the outline on the canvas
    pub origin: CartesianPoint,
    pub series: FourierSeries,
    /// Tips over one period, already offset by `origin`
    pub outline: Vec<CartesianPoint>,
    /// Worst distance between a sample and the series at its time
    pub reconstruction_error: f64,
}
