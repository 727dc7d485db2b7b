//! Plane geometry passed between the sampler, the Fourier engine and
//! whatever draws the result.

use serde::{Deserialize, Serialize};

/// A point in the drawing plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CartesianPoint {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl CartesianPoint {
    /// The origin
    pub const ORIGIN: CartesianPoint = CartesianPoint { x: 0.0, y: 0.0 };

    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation, `a + (b - a) * t` per axis
    pub fn lerp(self, other: CartesianPoint, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Componentwise sum, used to resolve relative coordinates
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Squared distance to another point
    pub fn distance_sq(&self, other: &CartesianPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Distance to another point
    pub fn distance(&self, other: &CartesianPoint) -> f64 {
        self.distance_sq(other).sqrt()
    }
}

impl From<(f64, f64)> for CartesianPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// One link of an epicycle chain, from the tip of the previous link to the
/// tip of this one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub start: CartesianPoint,
    pub end: CartesianPoint,
}

impl Vector {
    pub fn new(start: CartesianPoint, end: CartesianPoint) -> Self {
        Self { start, end }
    }

    /// Length of the link, also the diameter of the circle it sweeps
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }
}

/// Ordered samples of a path
///
/// Order defines the time parameterization, sample `i` of `n` sits at
/// `t = i / n`. The point list cannot be changed after construction; the
/// transformations below return new paths.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SampledPath {
    points: Vec<CartesianPoint>,
}

impl SampledPath {
    pub fn new(points: Vec<CartesianPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[CartesianPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&CartesianPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&CartesianPoint> {
        self.points.last()
    }

    /// Separate x and y sequences
    pub fn split_xy(&self) -> (Vec<f64>, Vec<f64>) {
        self.points.iter().map(|p| (p.x, p.y)).unzip()
    }

    /// Arithmetic mean of all samples, `None` for an empty path
    pub fn centroid(&self) -> Option<CartesianPoint> {
        if self.points.is_empty() {
            return None;
        }
        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Some(CartesianPoint::new(sx / n, sy / n))
    }

    /// Scale every sample and shift so the first sample lands on the origin
    ///
    /// Each point becomes `p * scale - first * scale`.
    pub fn normalized(&self, scale: f64) -> SampledPath {
        let Some(first) = self.points.first() else {
            return SampledPath::default();
        };
        let (cx, cy) = (first.x * scale, first.y * scale);
        let points = self
            .points
            .iter()
            .map(|p| CartesianPoint::new(p.x * scale - cx, p.y * scale - cy))
            .collect();
        SampledPath { points }
    }
}

impl From<Vec<CartesianPoint>> for SampledPath {
    fn from(points: Vec<CartesianPoint>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<CartesianPoint> for SampledPath {
    fn from_iter<I: IntoIterator<Item = CartesianPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
