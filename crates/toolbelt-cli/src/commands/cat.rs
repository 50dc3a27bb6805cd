// Rust guideline compliant 2026-10-16

//! Implementation of the `tb cat` command.

use anyhow::{Context as _, Result};
use std::io::{self, Write};
use std::path::PathBuf;

/// Streams each file to stdout, decompressing by extension.
///
/// # Errors
///
/// Returns an error if a file cannot be opened or decoded, or stdout is closed.
pub fn execute(files: Vec<PathBuf>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for path in files {
        let mut reader = toolbelt_core::zopen(&path)?;
        io::copy(&mut reader, &mut out)
            .with_context(|| format!("Failed to read {}", path.display()))?;
    }

    out.flush()?;
    Ok(())
}
