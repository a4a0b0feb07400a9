//! `commons expand` command.

use std::collections::HashMap;

use tracing::debug;

use crate::adapters::fixed::FixedClock;
use crate::config::Config;
use crate::context::ServiceContext;

/// Execute the `expand` command.
///
/// `-p` parameters override the configured ones. The counter starts at
/// `start`, or at the configured `counter_start`.
///
/// # Errors
///
/// Returns an error string if the template holds a malformed directive or an
/// invalid format.
pub fn run(
    ctx: ServiceContext,
    config: &Config,
    template: &str,
    params: &[(String, String)],
    start: Option<u64>,
    at: Option<FixedClock>,
) -> Result<(), String> {
    let ctx = prepare(ctx, config, start, at);
    let params = config.merged_params(params.iter().cloned().collect());
    println!("{}", render(&ctx, template, &params)?);
    Ok(())
}

/// Applies the counter start and pinned clock to `ctx`.
pub(crate) fn prepare(
    ctx: ServiceContext,
    config: &Config,
    start: Option<u64>,
    at: Option<FixedClock>,
) -> ServiceContext {
    let ctx = ctx.with_counter_start(start.unwrap_or(config.counter_start));
    match at {
        Some(clock) => ctx.with_clock(Box::new(clock)),
        None => ctx,
    }
}

/// Expands `template` against the context.
///
/// # Errors
///
/// Returns the expansion error as a string.
pub fn render(
    ctx: &ServiceContext,
    template: &str,
    params: &HashMap<String, String>,
) -> Result<String, String> {
    debug!(template, params = params.len(), "expanding template");
    ctx.expander().expand(template, params).map_err(|e| e.to_string())
}
