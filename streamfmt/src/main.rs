//! Render an agent's NDJSON event stream as a colorized transcript.
//!
//! Pipe an agent CLI's JSON output into `streamfmt` to follow the run:
//! assistant text, tool invocations, thinking ticks, and user turns.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use streamfmt::exit_codes;
use streamfmt::io::console::ColorMode;
use streamfmt::logging;
use streamfmt::stream::{FormatOptions, run};

#[derive(Parser)]
#[command(
    name = "streamfmt",
    version,
    about = "Render an agent's NDJSON event stream as a colorized transcript"
)]
struct Cli {
    /// When to emit ANSI colors.
    #[arg(long, value_enum, default_value_t = ColorMode::Always)]
    color: ColorMode,

    /// NDJSON file to read (`-` or omitted reads stdin).
    input: Option<PathBuf>,
}

fn main() {
    logging::init();
    if let Err(err) = run_cli() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::IO_ERROR);
    }
}

fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let options = FormatOptions {
        color: cli.color,
        input: cli.input,
    };
    run(&options)?;
    Ok(())
}
