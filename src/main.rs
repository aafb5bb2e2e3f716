use std::io::{self, Read};
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use tinygrep::cli::{trim_line_ending, Cli, ExitCode};

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("TINYGREP_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// Usage: echo <input_text> | tinygrep -E <pattern>
fn main() {
    init_logging();
    let cli = Cli::parse();

    let exit_code = match run(&cli) {
        Ok(matched) => ExitCode::from(matched),
        Err(e) => {
            eprintln!("tinygrep: {:#}", e);
            ExitCode::Error
        }
    };

    process::exit(exit_code as i32);
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let mut input = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut input)
        .context("read input text")?;

    let matched = tinygrep::match_line(trim_line_ending(&input), &cli.pattern)?;
    Ok(matched)
}
