//! Path sampling
//!
//! Walks the parsed commands left to right and turns every segment into a
//! fixed number of points. The resulting order is the time parameterization
//! used by the Fourier engine.

use crate::bezier::{bezier_point, sample_line, sample_parametric};
use crate::command::{parse_commands, CommandKind, PathCommandToken};
use crate::tokenizer::pair_up;
use epicycles_core::{CartesianPoint, PathError, SampledPath};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Samples emitted per line or per chained curve segment
pub const SAMPLES_PER_SEGMENT: usize = 100;

/// Sampler configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplerOptions {
    /// Points per straight segment and per chained curve segment
    pub samples_per_segment: usize,
    /// Sample a line back to the first point on `Z`/`z`
    pub close_path: bool,
}

impl Default for SamplerOptions {
    fn default() -> Self {
        Self {
            samples_per_segment: SAMPLES_PER_SEGMENT,
            close_path: false,
        }
    }
}

/// Turns path strings into [`SampledPath`]s
#[derive(Debug, Clone, Default)]
pub struct PathSampler {
    options: SamplerOptions,
}

impl PathSampler {
    /// Create a sampler
    pub fn new(options: SamplerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SamplerOptions {
        &self.options
    }

    /// Sample every command of `path_data` in order
    ///
    /// Fails on the first unsupported character or malformed operand list;
    /// nothing is returned for the part already sampled.
    pub fn sample(&self, path_data: &str) -> Result<SampledPath, PathError> {
        let commands = parse_commands(path_data)?;
        let mut samples: Vec<CartesianPoint> = Vec::new();
        let mut current = CartesianPoint::ORIGIN;

        for command in &commands {
            let emitted = match command.kind {
                CommandKind::MoveTo => self.run_move(command, current)?,
                CommandKind::LineTo => self.run_line(command, current)?,
                CommandKind::HorizontalLineTo | CommandKind::VerticalLineTo => {
                    self.run_axis_line(command, current)?
                }
                CommandKind::CubicBezierTo | CommandKind::QuadraticBezierTo => {
                    self.run_curve(command, current)?
                }
                CommandKind::ClosePath => {
                    let emitted = self.run_close(&samples, current);
                    debug!(
                        position = command.position,
                        samples = emitted.len(),
                        "close path"
                    );
                    samples.extend(emitted);
                    continue;
                }
            };

            debug!(
                command = %command.letter(),
                position = command.position,
                samples = emitted.len(),
                "sampled {}",
                command.kind
            );
            samples.extend(emitted);

            // The pen sits on the last emitted sample, not on the exact target.
            if let Some(last) = samples.last() {
                current = *last;
            }
        }

        debug!(
            commands = commands.len(),
            samples = samples.len(),
            "path sampled"
        );
        Ok(SampledPath::new(samples))
    }

    fn run_move(
        &self,
        command: &PathCommandToken,
        current: CartesianPoint,
    ) -> Result<Vec<CartesianPoint>, PathError> {
        let [x, y, rest @ ..] = command.operands.as_slice() else {
            return Err(command.missing_operands());
        };
        if !rest.is_empty() {
            warn!(
                position = command.position,
                ignored = rest.len(),
                "extra move operands ignored"
            );
        }

        let target = if command.relative {
            current.offset(*x, *y)
        } else {
            CartesianPoint::new(*x, *y)
        };
        Ok(vec![target])
    }

    fn run_line(
        &self,
        command: &PathCommandToken,
        current: CartesianPoint,
    ) -> Result<Vec<CartesianPoint>, PathError> {
        let targets = resolve_points(command, current)?;

        let mut from = current;
        let mut samples = Vec::with_capacity(targets.len() * self.options.samples_per_segment);
        for target in targets {
            samples.extend(sample_line(from, target, self.options.samples_per_segment));
            from = target;
        }
        Ok(samples)
    }

    fn run_axis_line(
        &self,
        command: &PathCommandToken,
        current: CartesianPoint,
    ) -> Result<Vec<CartesianPoint>, PathError> {
        let value = *command
            .operands
            .first()
            .ok_or_else(|| command.missing_operands())?;

        let target = match (command.kind, command.relative) {
            (CommandKind::HorizontalLineTo, true) => current.offset(value, 0.0),
            (CommandKind::HorizontalLineTo, false) => CartesianPoint::new(value, current.y),
            (_, true) => current.offset(0.0, value),
            (_, false) => CartesianPoint::new(current.x, value),
        };
        Ok(sample_line(
            current,
            target,
            self.options.samples_per_segment,
        ))
    }

    fn run_curve(
        &self,
        command: &PathCommandToken,
        current: CartesianPoint,
    ) -> Result<Vec<CartesianPoint>, PathError> {
        let mut control_points = vec![current];
        control_points.extend(resolve_points(command, current)?);

        let chained = control_points.len() / 2;
        let count = self.options.samples_per_segment * chained;

        Ok(sample_parametric(count, |t| {
            bezier_point(&control_points, t).unwrap_or(current)
        })
        .collect())
    }

    fn run_close(&self, samples: &[CartesianPoint], current: CartesianPoint) -> Vec<CartesianPoint> {
        match samples.first() {
            Some(start) if self.options.close_path => {
                sample_line(current, *start, self.options.samples_per_segment)
            }
            _ => Vec::new(),
        }
    }
}

/// Sample `path_data` with default options
pub fn sample(path_data: &str) -> Result<SampledPath, PathError> {
    PathSampler::default().sample(path_data)
}

/// Resolve operand pairs to absolute points
///
/// For relative commands the reference point moves only at on-curve points:
/// every target for lines, every 3rd pair for cubic curves, every 2nd for
/// quadratic curves.
fn resolve_points(
    command: &PathCommandToken,
    current: CartesianPoint,
) -> Result<Vec<CartesianPoint>, PathError> {
    let pairs = pair_up(&command.operands)
        .filter(|pairs| !pairs.is_empty())
        .ok_or_else(|| command.missing_operands())?;

    if !command.relative {
        return Ok(pairs.into_iter().map(CartesianPoint::from).collect());
    }

    let mut reference = current;
    let points = pairs
        .into_iter()
        .enumerate()
        .map(|(index, (dx, dy))| {
            let point = reference.offset(dx, dy);
            let on_curve = match command.kind {
                CommandKind::CubicBezierTo => index % 3 == 2,
                CommandKind::QuadraticBezierTo => index % 2 == 1,
                _ => true,
            };
            if on_curve {
                reference = point;
            }
            point
        })
        .collect();
    Ok(points)
}
