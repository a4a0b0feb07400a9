//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::adapters::fixed::FixedClock;

/// Top-level CLI parser for `commons`.
#[derive(Debug, Parser)]
#[command(
    name = "commons",
    version,
    about = "Expand value expressions and generate serial identifiers"
)]
pub struct Cli {
    /// YAML config file with default parameters and widths.
    ///
    /// Falls back to `$COMMONS_CONFIG`, then `.commons.yaml`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Expand `${...}` tokens in a template and print the result.
    Expand {
        /// Template text, e.g. `report.${currentTimestamp->yyyyMMdd}.csv`.
        template: String,
        /// Parameter for `${KEY}` tokens, as KEY=VALUE. Repeatable.
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,
        /// First serial number to hand out.
        #[arg(long)]
        start: Option<u64>,
        /// Render timestamps at this local time instead of now.
        #[arg(long, value_name = "DATETIME", value_parser = FixedClock::parse)]
        at: Option<FixedClock>,
    },
    /// Print serial identifiers, one per line.
    Id {
        /// Digits in the sequence suffix. At most 22 with `--numeric`.
        #[arg(long)]
        width: Option<usize>,
        /// How many identifiers to print.
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// Print the identifier as a number.
        #[arg(long)]
        numeric: bool,
        /// Render timestamps at this local time instead of now.
        #[arg(long, value_name = "DATETIME", value_parser = FixedClock::parse)]
        at: Option<FixedClock>,
    },
    /// Re-encode a JSON file with null fields dropped.
    Json {
        /// Path of the JSON file.
        path: PathBuf,
        /// Print on one line instead of indented.
        #[arg(long)]
        compact: bool,
    },
}

/// Parses a `KEY=VALUE` parameter. The value may itself contain `=`.
///
/// # Errors
///
/// Returns an error string if there is no `=` or the key is empty.
pub fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("Invalid parameter `{raw}`: expected KEY=VALUE")),
    }
}
