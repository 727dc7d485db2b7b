use anyhow::Context;
use epicycles::cli::{parse_args, Command, USAGE};
use epicycles::{compute_report, init_logging, resolve_config, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    let options = match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Command::Version => {
            println!("epicycles {VERSION} (built {BUILD_DATE})");
            return Ok(());
        }
        Command::Run(options) => options,
    };

    // Initialize logging
    init_logging()?;

    let config = resolve_config(&options)?;
    let report = compute_report(&options.source, &config)?;

    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    println!("{json}");

    Ok(())
}
