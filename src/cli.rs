//! Command-line surface: argument parsing and exit codes.

use clap::Parser;

/// Match a line read from stdin against a pattern
#[derive(Debug, Parser)]
#[command(name = "tinygrep")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Pattern to match against the input line
    #[arg(
        short = 'E',
        long = "extended-regexp",
        value_name = "PATTERN",
        allow_hyphen_values = true
    )]
    pub pattern: String,
}

/// Process exit codes, grep style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// The pattern matched
    Matched = 0,
    /// The pattern did not match
    NoMatch = 1,
    /// Bad pattern or unreadable input
    Error = 2,
}

impl From<bool> for ExitCode {
    fn from(matched: bool) -> Self {
        if matched {
            ExitCode::Matched
        } else {
            ExitCode::NoMatch
        }
    }
}

/// Drop one trailing line ending so `$` sees the real end of the line.
pub fn trim_line_ending(input: &[u8]) -> &[u8] {
    let input = input.strip_suffix(b"\n").unwrap_or(input);
    input.strip_suffix(b"\r").unwrap_or(input)
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
