//! Command-line arguments for the headless driver

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: epicycles [OPTIONS] <FILE.svg>
       epicycles [OPTIONS] --path <PATH DATA>

Options:
  --path <D>            Use path data directly instead of an SVG file
  --config <FILE>       Load settings from a .toml or .json file
  --coefficients <K>    Number of Fourier components
  --scale <S>           Scale applied to the samples
  -V, --version         Print version and build date
  -h, --help            Print this help";

/// Where the path comes from
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    SvgFile(PathBuf),
    PathData(String),
}

/// What the user asked for
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Options),
    Help,
    Version,
}

/// Parsed options for a run
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub source: Source,
    pub config: Option<PathBuf>,
    pub coefficients: Option<usize>,
    pub scale: Option<f64>,
}

/// Parse arguments, excluding the program name
pub fn parse_args<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut source = None;
    let mut config = None;
    let mut coefficients = None;
    let mut scale = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--path" => {
                let data = args.next().context("--path needs path data")?;
                set_source(&mut source, Source::PathData(data))?;
            }
            "--config" => {
                config = Some(PathBuf::from(
                    args.next().context("--config needs a file")?,
                ));
            }
            "--coefficients" => {
                let value = args.next().context("--coefficients needs a value")?;
                coefficients = Some(
                    value
                        .parse()
                        .with_context(|| format!("invalid coefficient count '{value}'"))?,
                );
            }
            "--scale" => {
                let value = args.next().context("--scale needs a value")?;
                scale = Some(
                    value
                        .parse()
                        .with_context(|| format!("invalid scale '{value}'"))?,
                );
            }
            flag if flag.starts_with('-') && flag.len() > 1 => bail!("unknown option '{flag}'"),
            file => set_source(&mut source, Source::SvgFile(PathBuf::from(file)))?,
        }
    }

    let source = source.context("no SVG file or --path given")?;
    Ok(Command::Run(Options {
        source,
        config,
        coefficients,
        scale,
    }))
}

fn set_source(slot: &mut Option<Source>, source: Source) -> Result<()> {
    if slot.is_some() {
        bail!("only one SVG file or --path may be given");
    }
    *slot = Some(source);
    Ok(())
}
