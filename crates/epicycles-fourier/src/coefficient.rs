//! Single Fourier coefficient by numerical integration

use epicycles_core::Phasor;
use std::f64::consts::TAU;

/// Approximate `c_n = ∫₀¹ f(t)·e^{-i2πnt} dt` over `samples`
///
/// Sample `i` sits at `t = i * time_step`. Each sample is demodulated by a
/// unit phasor at angle `-n·2π·t`, then adjacent terms are summed with the
/// trapezoidal rule. The last sample is not wrapped back to the first.
pub fn solve(samples: &[Phasor], time_step: f64, n: i64) -> Phasor {
    let angle_step = -(n as f64) * TAU;

    let terms: Vec<Phasor> = samples
        .iter()
        .enumerate()
        .map(|(i, sample)| *sample * Phasor::unit(angle_step * (i as f64 * time_step)))
        .collect();

    terms.windows(2).fold(Phasor::ZERO, |acc, pair| {
        acc + (pair[1] + pair[0]).scalar_multiply(0.5 * time_step)
    })
}
