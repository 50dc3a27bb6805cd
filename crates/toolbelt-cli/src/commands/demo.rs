// Rust guideline compliant 2026-10-16

//! Implementation of the `tb demo` command.
//!
//! Prints one line at every log level, then drives a spinner or gauge with
//! fixed-size steps so the console output can be inspected by eye.

use crate::Context;
use anyhow::Result;
use std::thread;
use std::time::Duration;
use toolbelt_core::terminal::stdout_sink;
use toolbelt_core::{tb_debug, tb_error, tb_info, tb_warn};
use toolbelt_core::{Palette, ProgressOptions, ProgressReporter};

/// Settings for a demo run.
#[derive(Debug, Clone)]
pub struct DemoOptions {
    /// Draw a gauge instead of a spinner.
    pub gauge: bool,
    /// Items to count in total.
    pub total: u64,
    /// Items added per step.
    pub step: u64,
    /// Items between re-renders.
    pub interval: u64,
    /// Pause between steps.
    pub delay: Duration,
}

/// Runs the demo.
///
/// # Errors
///
/// Returns an error if the reporter cannot be started (zero interval or total).
pub fn execute(ctx: &Context, demo: DemoOptions) -> Result<()> {
    tb_info!(ctx.logger, "this should be info: {}", 1000);
    tb_debug!(ctx.logger, "this should be {}", "debug");
    tb_warn!(ctx.logger, "this should be warn: {:.6} {:.6}", 10.0, 10.0);
    tb_error!(ctx.logger, "this should be error");

    let options = ProgressOptions::from_config(&ctx.config)
        .with_interval(demo.interval)
        .with_total(demo.total);
    let palette = Palette::from_config(&ctx.config);
    let sink = stdout_sink(&ctx.config);
    let reporter = if demo.gauge {
        ProgressReporter::gauge(options, palette, sink)?
    } else {
        ProgressReporter::spinner(options, palette, sink)?
    };

    let step = demo.step.max(1);
    let mut done = 0;
    while done < demo.total {
        thread::sleep(demo.delay);
        let n = step.min(demo.total - done);
        reporter.advance(n);
        done += n;
    }
    reporter.stop();

    Ok(())
}
