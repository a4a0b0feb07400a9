//! `commons id` command.

use tracing::debug;

use crate::adapters::fixed::FixedClock;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::id::MAX_NUMERIC_WIDTH;

/// Flags for the `id` command.
#[derive(Debug, Clone, Copy)]
pub struct IdOptions {
    /// Sequence width; the configured `id_width` when `None`.
    pub width: Option<usize>,
    /// Number of identifiers.
    pub count: usize,
    /// Convert each identifier to a number.
    pub numeric: bool,
}

/// Execute the `id` command.
///
/// # Errors
///
/// Returns an error string if `--numeric` is combined with a width above
/// [`MAX_NUMERIC_WIDTH`].
pub fn run(
    ctx: ServiceContext,
    config: &Config,
    options: &IdOptions,
    at: Option<FixedClock>,
) -> Result<(), String> {
    let ctx = super::expand::prepare(ctx, config, None, at);
    for id in render(&ctx, config, options)? {
        println!("{id}");
    }
    Ok(())
}

/// Produces `options.count` identifiers.
///
/// The width is checked before any sequence value is drawn.
///
/// # Errors
///
/// Returns an error string if a numeric identifier would not fit.
pub fn render(
    ctx: &ServiceContext,
    config: &Config,
    options: &IdOptions,
) -> Result<Vec<String>, String> {
    let width = options.width.unwrap_or(config.id_width);
    debug!(width, count = options.count, numeric = options.numeric, "generating ids");

    if options.numeric && width > MAX_NUMERIC_WIDTH {
        return Err(format!(
            "Width {width} is too wide for --numeric: at most {MAX_NUMERIC_WIDTH} digits fit"
        ));
    }
    let generator = ctx.id_generator();
    (0..options.count)
        .map(|_| {
            if options.numeric {
                generator.next_id(width).map(|id| id.to_string()).map_err(|e| e.to_string())
            } else {
                Ok(generator.next_id_string(width))
            }
        })
        .collect()
}
