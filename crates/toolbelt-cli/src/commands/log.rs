// Rust guideline compliant 2026-10-16

//! Implementation of the `tb log` command.

use crate::Context;
use anyhow::Result;
use toolbelt_core::Level;

/// Writes a single log line at the requested level.
///
/// # Errors
///
/// Returns an error if the level name is not recognized.
pub fn execute(ctx: &Context, level: &str, message: &str) -> Result<()> {
    let level: Level = level.parse()?;
    ctx.logger.log(level, format_args!("{message}"));
    Ok(())
}
