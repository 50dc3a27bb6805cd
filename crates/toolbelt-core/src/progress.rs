// Rust guideline compliant 2026-10-16

//! Progress reporting for long-running CLI operations.
//!
//! A [`ProgressReporter`] counts completed items through a [`RateTracker`]
//! and re-renders a status line each time the count lands on a multiple
//! of the update interval. Two variants exist:
//!
//! - a spinner, whose glyph is animated by a background thread, and
//! - a gauge, which draws a fixed-width bar against a known total.
//!
//! Every write (animation ticks, advance-triggered renders and the final
//! summary) goes through one mutex, and [`ProgressReporter::stop`] joins the
//! animation thread before writing the summary, so nothing is written
//! after it returns.

pub mod glyphs;

use chrono::Local;
use crate::config::Config;
use crate::rate::{RateSample, RateTracker, Summary};
use crate::terminal::{write_styled, Palette, Sink};
use crate::time::{format_duration, format_timestamp, line_prefix, tag_column};
use crate::{Error, Result};
use glyphs::GlyphSet;
use std::io::{self, Write};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use termcolor::WriteColor;

/// Tag shown while work is in progress.
pub const RUNNING_TAG: &str = "[RUNNING]";

/// Tag shown on the completion line.
pub const COMPLETE_TAG: &str = "[✔]";

/// Erases the current line, moves up one line and clears to the end of screen.
const CLEAR_PREVIOUS: &str = "\x1b[2K\x1b[1A\x1b[J";

/// Returns the cursor to column 0 and erases the line.
const CLEAR_LINE: &str = "\r\x1b[2K";

const MIN_TICK: Duration = Duration::from_millis(1);

/// Settings for a progress reporter.
#[derive(Debug, Clone)]
pub struct ProgressOptions {
    /// Items between re-renders.
    pub update_interval: u64,
    /// Known total, required by the gauge.
    pub total: Option<u64>,
    /// Gauge bar width in characters.
    pub bar_width: usize,
    /// Spinner animation period.
    pub tick: Duration,
    /// Spinner frames.
    pub glyphs: GlyphSet,
}

impl Default for ProgressOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ProgressOptions {
    /// Builds options from the loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            update_interval: config.update_interval,
            total: None,
            bar_width: config.bar_width,
            tick: config.tick(),
            glyphs: glyphs::by_name(&config.spinner).unwrap_or(glyphs::LINE),
        }
    }

    /// Sets the known total for a gauge.
    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    /// Sets the update interval.
    pub fn with_interval(mut self, update_interval: u64) -> Self {
        self.update_interval = update_interval;
        self
    }
}

/// Renders the gauge bar: `[`, filled `#`, padding spaces, `]`.
///
/// The fill is `round(count / total * width)`, clamped to `width` when the
/// count runs past the total.
pub fn gauge_bar(count: u64, total: u64, width: usize) -> String {
    let filled = if total == 0 {
        width
    } else {
        let fraction = count as f64 / total as f64;
        ((fraction * width as f64).round() as usize).min(width)
    };
    format!("[{}{}]", "#".repeat(filled), " ".repeat(width - filled))
}

fn rate_suffix(sample: &RateSample) -> String {
    format!(
        "({:.3} items/sec [total], {:.3} items/sec [current interval])",
        sample.total_rate, sample.interval_rate
    )
}

enum Mode {
    Spinner {
        glyphs: GlyphSet,
        frame: usize,
        suffix: String,
    },
    Gauge {
        total: u64,
        width: usize,
    },
}

struct State {
    tracker: RateTracker,
    mode: Mode,
    palette: Palette,
    sink: Sink,
    broken: bool,
}

impl State {
    /// Runs a write against the sink unless an earlier write failed.
    ///
    /// The first failure is logged and silences the reporter for good.
    fn emit(&mut self, write: impl FnOnce(&mut dyn WriteColor, &Palette) -> io::Result<()>) {
        if self.broken {
            return;
        }
        let result = write(self.sink.as_mut(), &self.palette).and_then(|()| self.sink.flush());
        if let Err(err) = result {
            tracing::warn!(error = %err, "progress output failed, suppressing further updates");
            self.broken = true;
        }
    }

    fn draw_spinner(&mut self) {
        let Mode::Spinner {
            glyphs,
            frame,
            suffix,
        } = &self.mode
        else {
            return;
        };
        let glyph = glyphs[*frame % glyphs.len()];
        let line = format!("{}{}", line_prefix(RUNNING_TAG), glyph);
        let suffix = suffix.clone();
        self.emit(|out, palette| {
            out.write_all(CLEAR_LINE.as_bytes())?;
            write_styled(out, &palette.running, &line)?;
            out.write_all(suffix.as_bytes())
        });
    }

    fn tick(&mut self) {
        if let Mode::Spinner { frame, .. } = &mut self.mode {
            *frame = frame.wrapping_add(1);
        }
        self.draw_spinner();
    }

    fn render(&mut self, sample: RateSample) {
        match &mut self.mode {
            Mode::Spinner { suffix, .. } => {
                *suffix = format!(" {:>12} complete {}", sample.count, rate_suffix(&sample));
                self.draw_spinner();
            }
            Mode::Gauge { total, width } => {
                let line = format!(
                    "{}{}",
                    line_prefix(RUNNING_TAG),
                    gauge_bar(sample.count, *total, *width)
                );
                let rates = rate_suffix(&sample);
                self.emit(|out, palette| {
                    out.write_all(CLEAR_PREVIOUS.as_bytes())?;
                    write_styled(out, &palette.running, &line)?;
                    writeln!(out, " {rates}")
                });
            }
        }
    }

    fn finish(&mut self) -> Summary {
        let summary = self.tracker.finalize();
        let clear = match self.mode {
            Mode::Spinner { .. } => CLEAR_LINE,
            Mode::Gauge { .. } => CLEAR_PREVIOUS,
        };
        let timestamp = format!("{} ", format_timestamp(Local::now()));
        let tag = tag_column(COMPLETE_TAG);
        self.emit(|out, palette| {
            out.write_all(clear.as_bytes())?;
            out.write_all(timestamp.as_bytes())?;
            write_styled(out, &palette.complete, &tag)?;
            write!(out, "{} ", summary.count)?;
            write_styled(out, &palette.complete, "[complete]")?;
            writeln!(
                out,
                " (total time: {}, {:.3} items/sec [total])",
                format_duration(summary.elapsed),
                summary.rate
            )
        });
        summary
    }
}

struct Ticker {
    shutdown: Sender<()>,
    handle: JoinHandle<()>,
}

impl Ticker {
    fn spawn(state: Arc<Mutex<State>>, tick: Duration) -> Result<Self> {
        let (shutdown, signal) = mpsc::channel::<()>();
        let tick = tick.max(MIN_TICK);
        let handle = thread::Builder::new()
            .name("toolbelt-spinner".to_string())
            .spawn(move || loop {
                match signal.recv_timeout(tick) {
                    Err(RecvTimeoutError::Timeout) => lock(&state).tick(),
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            })?;
        Ok(Self { shutdown, handle })
    }

    /// Signals the animation thread and waits for it to exit.
    fn stop(self) {
        let _ = self.shutdown.send(());
        if self.handle.join().is_err() {
            tracing::warn!("spinner animation thread panicked");
        }
    }
}

fn lock(state: &Mutex<State>) -> MutexGuard<'_, State> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Spinner or gauge progress indicator writing to a terminal sink.
pub struct ProgressReporter {
    state: Arc<Mutex<State>>,
    ticker: Option<Ticker>,
}

impl ProgressReporter {
    /// Starts an indeterminate spinner.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if the update interval is zero, or
    /// an IO error if the animation thread cannot be spawned.
    pub fn spinner(options: ProgressOptions, palette: Palette, sink: Sink) -> Result<Self> {
        let glyphs = if options.glyphs.is_empty() {
            glyphs::LINE
        } else {
            options.glyphs
        };
        let state = State {
            tracker: RateTracker::new(options.update_interval)?,
            mode: Mode::Spinner {
                glyphs,
                frame: 0,
                suffix: String::new(),
            },
            palette,
            sink,
            broken: false,
        };
        let state = Arc::new(Mutex::new(state));
        lock(&state).draw_spinner();
        let ticker = Ticker::spawn(Arc::clone(&state), options.tick)?;

        Ok(Self {
            state,
            ticker: Some(ticker),
        })
    }

    /// Starts a bounded gauge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingTotal`] if `options.total` is absent or zero,
    /// and [`Error::InvalidInterval`] if the update interval is zero.
    pub fn gauge(options: ProgressOptions, palette: Palette, sink: Sink) -> Result<Self> {
        let total = options.total.filter(|total| *total > 0).ok_or(Error::MissingTotal)?;
        let mut state = State {
            tracker: RateTracker::new(options.update_interval)?,
            mode: Mode::Gauge {
                total,
                width: options.bar_width,
            },
            palette,
            sink,
            broken: false,
        };
        let line = line_prefix(RUNNING_TAG);
        state.emit(|out, palette| {
            write_styled(out, &palette.running, &line)?;
            writeln!(out)
        });

        Ok(Self {
            state: Arc::new(Mutex::new(state)),
            ticker: None,
        })
    }

    /// Records `n` completed items, re-rendering on interval boundaries.
    pub fn advance(&self, n: u64) {
        let mut state = lock(&self.state);
        if let Some(sample) = state.tracker.advance(n) {
            state.render(sample);
        }
    }

    /// Items counted so far.
    pub fn count(&self) -> u64 {
        lock(&self.state).tracker.count()
    }

    /// Stops the animation and writes the completion line.
    ///
    /// # Returns
    ///
    /// The final count, elapsed time and cumulative rate.
    pub fn stop(mut self) -> Summary {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
        let summary = lock(&self.state).finish();
        summary
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::MemorySink;

    fn quiet_options(interval: u64) -> ProgressOptions {
        ProgressOptions {
            update_interval: interval,
            total: None,
            bar_width: 20,
            tick: Duration::from_secs(3600),
            glyphs: glyphs::LINE,
        }
    }

    #[test]
    fn test_gauge_bar_half_full() {
        assert_eq!(gauge_bar(55, 100, 20), format!("[{}{}]", "#".repeat(11), " ".repeat(9)));
    }

    #[test]
    fn test_gauge_bar_bounds() {
        assert_eq!(gauge_bar(0, 100, 4), "[    ]");
        assert_eq!(gauge_bar(100, 100, 4), "[####]");
        assert_eq!(gauge_bar(250, 100, 4), "[####]");
    }

    #[test]
    fn test_gauge_requires_total() {
        let sink = MemorySink::new();
        let result = ProgressReporter::gauge(quiet_options(10), Palette::plain(), Box::new(sink));
        assert!(matches!(result, Err(Error::MissingTotal)));

        let sink = MemorySink::new();
        let result = ProgressReporter::gauge(
            quiet_options(10).with_total(0),
            Palette::plain(),
            Box::new(sink),
        );
        assert!(matches!(result, Err(Error::MissingTotal)));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let sink = MemorySink::new();
        let result = ProgressReporter::spinner(quiet_options(0), Palette::plain(), Box::new(sink));
        assert!(matches!(result, Err(Error::InvalidInterval)));
    }

    #[test]
    fn test_gauge_renders_on_boundary() {
        let sink = MemorySink::new();
        let reporter = ProgressReporter::gauge(
            quiet_options(10).with_total(40),
            Palette::plain(),
            Box::new(sink.clone()),
        )
        .unwrap();

        reporter.advance(5);
        assert!(!sink.contents().contains("items/sec"));
        reporter.advance(5);
        assert!(sink.contents().contains("[#####               ]"));
        assert!(sink.contents().contains("items/sec [current interval]"));

        let summary = reporter.stop();
        assert_eq!(summary.count, 10);
    }

    #[test]
    fn test_completion_line_format() {
        let sink = MemorySink::new();
        let reporter = ProgressReporter::gauge(
            quiet_options(1000).with_total(10),
            Palette::plain(),
            Box::new(sink.clone()),
        )
        .unwrap();
        reporter.advance(3);
        reporter.stop();

        let output = sink.contents();
        let last = output.rsplit(CLEAR_PREVIOUS).next().unwrap();
        let expected = format!(" {}3 [complete] (total time: ", tag_column(COMPLETE_TAG));
        assert!(last[23..].starts_with(&expected), "unexpected line: {last}");
        assert!(last.ends_with(" items/sec [total])\n"));
    }

    #[test]
    fn test_spinner_suffix_shows_count() {
        let sink = MemorySink::new();
        let reporter =
            ProgressReporter::spinner(quiet_options(2), Palette::plain(), Box::new(sink.clone()))
                .unwrap();
        reporter.advance(2);
        assert!(sink.contents().contains(&format!(" {:>12} complete (", 2)));
        reporter.stop();
        assert!(sink.contents().ends_with(" items/sec [total])\n"));
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl WriteColor for BrokenSink {
        fn supports_color(&self) -> bool {
            false
        }

        fn set_color(&mut self, _spec: &termcolor::ColorSpec) -> io::Result<()> {
            Ok(())
        }

        fn reset(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_broken_sink_does_not_stop_counting() {
        let reporter = ProgressReporter::gauge(
            quiet_options(1).with_total(3),
            Palette::plain(),
            Box::new(BrokenSink),
        )
        .unwrap();
        reporter.advance(1);
        reporter.advance(1);
        assert_eq!(reporter.count(), 2);
        assert_eq!(reporter.stop().count, 2);
    }
}
