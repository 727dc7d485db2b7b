//! Complex numbers in polar form
//!
//! A [`Phasor`] keeps magnitude and angle rather than real and imaginary
//! parts. Multiplication composes rotations by adding angles and needs no
//! trigonometry; addition goes through Cartesian form and back, which is the
//! only place rounding from `cos`/`sin`/`atan2` creeps in.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// Complex number as magnitude and angle (radians)
///
/// Magnitude is not required to be non-negative. A negative scalar passed to
/// [`Phasor::scalar_multiply`] stays in the magnitude, and the accessors
/// still project correctly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Phasor {
    /// Length of the vector
    pub magnitude: f64,
    /// Rotation in radians
    pub angle: f64,
}

impl Phasor {
    /// The zero phasor, starting value of every accumulation
    pub const ZERO: Phasor = Phasor {
        magnitude: 0.0,
        angle: 0.0,
    };

    /// Create a phasor from magnitude and angle
    pub const fn new(magnitude: f64, angle: f64) -> Self {
        Self { magnitude, angle }
    }

    /// Unit-length phasor pointing at `angle`
    pub const fn unit(angle: f64) -> Self {
        Self::new(1.0, angle)
    }

    /// Build a phasor from real and imaginary parts
    pub fn from_cartesian(real: f64, imaginary: f64) -> Self {
        Self {
            magnitude: real.hypot(imaginary),
            angle: imaginary.atan2(real),
        }
    }

    /// Real part, `magnitude * cos(angle)`
    pub fn real(&self) -> f64 {
        self.magnitude * self.angle.cos()
    }

    /// Imaginary part, `magnitude * sin(angle)`
    pub fn imaginary(&self) -> f64 {
        self.magnitude * self.angle.sin()
    }

    /// Both projections at once
    pub fn to_cartesian(&self) -> (f64, f64) {
        let (sin, cos) = self.angle.sin_cos();
        (self.magnitude * cos, self.magnitude * sin)
    }

    /// Scale the magnitude, leaving the angle untouched
    pub fn scalar_multiply(self, scalar: f64) -> Self {
        Self {
            magnitude: self.magnitude * scalar,
            angle: self.angle,
        }
    }
}

impl Mul for Phasor {
    type Output = Phasor;

    fn mul(self, rhs: Phasor) -> Phasor {
        Phasor {
            magnitude: self.magnitude * rhs.magnitude,
            angle: self.angle + rhs.angle,
        }
    }
}

impl Add for Phasor {
    type Output = Phasor;

    fn add(self, rhs: Phasor) -> Phasor {
        let (a_re, a_im) = self.to_cartesian();
        let (b_re, b_im) = rhs.to_cartesian();
        Phasor::from_cartesian(a_re + b_re, a_im + b_im)
    }
}
