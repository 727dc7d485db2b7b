//! # Epicycles Core
//!
//! Core types shared by every Epicycles crate:
//! - [`Phasor`]: complex numbers held in magnitude/angle form
//! - [`CartesianPoint`], [`Vector`] and [`SampledPath`]: the geometry that
//!   flows from the path sampler into the Fourier engine
//! - The error taxonomy used across the workspace

pub mod error;
pub mod geometry;
pub mod phasor;

pub use error::{Error, PathError, Result, SeriesError};
pub use geometry::{CartesianPoint, SampledPath, Vector};
pub use phasor::Phasor;
