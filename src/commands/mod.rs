//! Command dispatch and handlers.

pub mod expand;
pub mod id;
pub mod json;

use tracing::debug;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::context::ServiceContext;

/// Dispatch a parsed command line to its handler.
///
/// Loads the config first; a config named explicitly (flag or environment)
/// must exist.
///
/// # Errors
///
/// Returns an error string if the config cannot be loaded or the selected
/// command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let config =
        Config::load(ctx.fs.as_ref(), cli.config.as_deref()).map_err(|e| e.to_string())?;
    debug!(?config, "config loaded");
    dispatch_with_context(&cli.command, ctx, &config)
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(
    command: &Command,
    ctx: ServiceContext,
    config: &Config,
) -> Result<(), String> {
    match command {
        Command::Expand { template, params, start, at } => {
            expand::run(ctx, config, template, params, *start, *at)
        }
        Command::Id { width, count, numeric, at } => {
            let options = id::IdOptions { width: *width, count: *count, numeric: *numeric };
            id::run(ctx, config, &options, *at)
        }
        Command::Json { path, compact } => json::run(&ctx, path, *compact),
    }
}
