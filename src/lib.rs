//! Value-expression templates and serial identifiers.
//!
//! The library expands `${...}` tokens in templates ([`expr`]), generates
//! timestamp-plus-sequence identifiers ([`id`]) and carries a small set of
//! string, map, JSON and file helpers. The `commons` binary exposes the same
//! functionality on the command line.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod expr;
pub mod files;
pub mod id;
pub mod json;
pub mod maps;
pub mod ports;
pub mod strings;

pub use error::{Error, Result};

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> std::result::Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli)
}
