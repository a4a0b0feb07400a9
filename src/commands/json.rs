//! `commons json` command.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::context::ServiceContext;
use crate::json::{from_json, to_json, to_json_pretty};

/// Execute the `json` command.
///
/// # Errors
///
/// Returns an error string if the file cannot be read or is not JSON.
pub fn run(ctx: &ServiceContext, path: &Path, compact: bool) -> Result<(), String> {
    println!("{}", render(ctx, path, compact)?);
    Ok(())
}

/// Reads `path` and re-encodes it without null object fields.
///
/// # Errors
///
/// Returns an error string if the file cannot be read or is not JSON.
pub fn render(ctx: &ServiceContext, path: &Path, compact: bool) -> Result<String, String> {
    debug!(path = %path.display(), compact, "re-encoding json");
    let text = ctx.files().read_to_string(path).map_err(|e| e.to_string())?;
    let value: Value = from_json(&text).map_err(|e| e.to_string())?;
    let encoded = if compact { to_json(&value) } else { to_json_pretty(&value) };
    encoded.map_err(|e| e.to_string())
}
