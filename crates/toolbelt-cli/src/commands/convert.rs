// Rust guideline compliant 2026-10-16

//! Implementation of the `tb convert` command.
//!
//! Re-encodes a file between compression formats, e.g. `reads.txt.gz` to
//! `reads.txt.xz`, with a spinner counting lines.

use crate::Context;
use anyhow::{Context as _, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use toolbelt_core::terminal::stdout_sink;
use toolbelt_core::{tb_info, Palette, ProgressOptions, ProgressReporter};

/// Copies `input` to `output`, converting compression by extension.
///
/// # Arguments
///
/// * `ctx` - Loaded configuration and logger
/// * `input` - Source file
/// * `output` - Destination file
/// * `interval` - Lines between progress updates (config default if None)
///
/// # Errors
///
/// Returns an error if either file cannot be opened, a line cannot be read
/// or written, or the output trailer cannot be written.
pub fn execute(ctx: &Context, input: PathBuf, output: PathBuf, interval: Option<u64>) -> Result<()> {
    let mut reader = toolbelt_core::zopen(&input)?;
    let mut writer = toolbelt_core::zcreate(&output, ctx.config.compression_level)?;
    tb_info!(
        ctx.logger,
        "converting {} -> {} ({})",
        input.display(),
        output.display(),
        writer.codec().name()
    );

    let mut options = ProgressOptions::from_config(&ctx.config);
    if let Some(interval) = interval {
        options = options.with_interval(interval);
    }
    let reporter = ProgressReporter::spinner(
        options,
        Palette::from_config(&ctx.config),
        stdout_sink(&ctx.config),
    )?;

    // Lines are copied byte for byte, so line endings and non-UTF-8 data
    // survive the conversion.
    let mut line = Vec::new();
    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .with_context(|| format!("Failed to read {}", input.display()))?;
        if read == 0 {
            break;
        }
        writer
            .write_all(&line)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        reporter.advance(1);
    }

    writer
        .finish()
        .with_context(|| format!("Failed to finish {}", output.display()))?;
    let summary = reporter.stop();
    tracing::debug!(lines = summary.count, "conversion finished");

    Ok(())
}
