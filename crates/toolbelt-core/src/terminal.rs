// Rust guideline compliant 2026-10-16

//! Terminal styling and output sinks.
//!
//! Style bindings live in a [`Palette`] built once at startup and handed
//! to the logger and progress reporters, instead of process-wide globals.

use crate::config::{ColorMode, Config};
use std::env;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Boxed, thread-safe colored writer used by the logger and reporters.
pub type Sink = Box<dyn WriteColor + Send>;

/// Determines if colored output should be used on a standard stream.
///
/// In `auto` mode, respects the NO_COLOR environment variable and whether
/// `stream` is a TTY.
pub fn should_use_color(mode: ColorMode, stream: atty::Stream) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if env::var_os("NO_COLOR").is_some() {
                return false;
            }
            atty::is(stream)
        }
    }
}

/// Maps a color mode to the termcolor choice for one standard stream.
pub fn color_choice(mode: ColorMode, stream: atty::Stream) -> ColorChoice {
    if should_use_color(mode, stream) {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    }
}

/// Opens standard output as a sink honoring the configured color mode.
pub fn stdout_sink(config: &Config) -> Sink {
    Box::new(StandardStream::stdout(color_choice(
        config.color,
        atty::Stream::Stdout,
    )))
}

/// Opens standard error as a sink honoring the configured color mode.
pub fn stderr_sink(config: &Config) -> Sink {
    Box::new(StandardStream::stderr(color_choice(
        config.color,
        atty::Stream::Stderr,
    )))
}

/// Color bindings for each kind of console line.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Info-level log lines.
    pub info: ColorSpec,
    /// Debug-level log lines.
    pub debug: ColorSpec,
    /// Warn-level log lines.
    pub warn: ColorSpec,
    /// Error-level log lines.
    pub error: ColorSpec,
    /// In-progress reporter lines.
    pub running: ColorSpec,
    /// Completion tag and marker.
    pub complete: ColorSpec,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            info: fg(Color::White),
            debug: fg(Color::Cyan),
            warn: fg(Color::Magenta),
            error: fg(Color::Red),
            running: fg(Color::Yellow),
            complete: fg(Color::Green),
        }
    }
}

impl Palette {
    /// A palette that applies no styling.
    pub fn plain() -> Self {
        Self {
            info: ColorSpec::new(),
            debug: ColorSpec::new(),
            warn: ColorSpec::new(),
            error: ColorSpec::new(),
            running: ColorSpec::new(),
            complete: ColorSpec::new(),
        }
    }

    /// Builds the palette for the configured color mode.
    ///
    /// Colors are kept whenever either standard stream may show them; each
    /// sink drops the styling on its own when its stream is not a terminal.
    pub fn from_config(config: &Config) -> Self {
        if should_use_color(config.color, atty::Stream::Stdout)
            || should_use_color(config.color, atty::Stream::Stderr)
        {
            Self::default()
        } else {
            Self::plain()
        }
    }
}

fn fg(color: Color) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color));
    spec
}

/// Writes `text` in `spec`, always resetting the style afterwards.
pub(crate) fn write_styled(out: &mut dyn WriteColor, spec: &ColorSpec, text: &str) -> io::Result<()> {
    out.set_color(spec)?;
    let written = out.write_all(text.as_bytes());
    let reset = out.reset();
    written.and(reset)
}

/// In-memory sink that can be cloned and inspected after writing.
///
/// Useful for capturing reporter or logger output in tests and for
/// callers that post-process console lines.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far as UTF-8 text.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl WriteColor for MemorySink {
    fn supports_color(&self) -> bool {
        false
    }

    fn set_color(&mut self, _spec: &ColorSpec) -> io::Result<()> {
        Ok(())
    }

    fn reset(&mut self) -> io::Result<()> {
        Ok(())
    }
}
