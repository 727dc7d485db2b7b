//! # Epicycles Path
//!
//! Turns path data (the `d` attribute of an SVG `<path>`) into a dense,
//! ordered list of points.
//!
//! ## Supported commands
//!
//! - **Move** `M`/`m`
//! - **Line** `L`/`l`, **Horizontal** `H`/`h`, **Vertical** `V`/`v`
//! - **Cubic** `C`/`c` and **Quadratic** `Q`/`q` curves, including chained segments
//! - **Close** `Z`/`z` (inert unless enabled in [`SamplerOptions`])
//!
//! Anything else is rejected.

pub mod bezier;
pub mod command;
pub mod sampler;
pub mod svg;
pub mod tokenizer;

pub use bezier::bezier_point;
pub use command::{parse_commands, CommandKind, PathCommandToken};
pub use sampler::{sample, PathSampler, SamplerOptions, SAMPLES_PER_SEGMENT};
pub use svg::{extract_path_data, load_svg};
pub use tokenizer::extract_numbers;
