// Rust guideline compliant 2026-10-16

//! Leveled, timestamped, colored console logging.
//!
//! Each call writes one line: `<timestamp> <[LEVEL] padded> <message>`,
//! styled with the level's palette color. Writes to a sink are serialized
//! by a mutex so concurrent callers never interleave partial lines.

use crate::config::Config;
use crate::terminal::{stderr_sink, stdout_sink, write_styled, Palette, Sink};
use crate::time::line_prefix;
use crate::{Error, Result};
use std::fmt;
use std::io::Write;
use std::sync::Mutex;
use termcolor::ColorSpec;

/// Log severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Debug,
    Warn,
    Error,
}

impl Level {
    /// Bracketed tag written in the level column.
    pub fn tag(self) -> &'static str {
        match self {
            Level::Info => "[INFO]",
            Level::Debug => "[DEBUG]",
            Level::Warn => "[WARN]",
            Level::Error => "[ERROR]",
        }
    }

    fn style(self, palette: &Palette) -> &ColorSpec {
        match self {
            Level::Info => &palette.info,
            Level::Debug => &palette.debug,
            Level::Warn => &palette.warn,
            Level::Error => &palette.error,
        }
    }
}

impl std::str::FromStr for Level {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            other => Err(Error::Config(format!(
                "log level must be info, debug, warn, or error, got '{other}'"
            ))),
        }
    }
}

/// Formats a complete log line, including the trailing newline.
pub fn format_line(level: Level, args: fmt::Arguments<'_>) -> String {
    format!("{}{}\n", line_prefix(level.tag()), args)
}

/// Console logger holding its palette and output sinks.
pub struct Logger {
    palette: Palette,
    out: Mutex<Sink>,
    errors: Option<Mutex<Sink>>,
}

impl Logger {
    /// Creates a logger writing every level to `out`.
    pub fn new(palette: Palette, out: Sink) -> Self {
        Self {
            palette,
            out: Mutex::new(out),
            errors: None,
        }
    }

    /// Routes error-level lines to a separate sink.
    pub fn with_error_sink(mut self, errors: Sink) -> Self {
        self.errors = Some(Mutex::new(errors));
        self
    }

    /// Builds a stdout logger from configuration.
    ///
    /// Error lines go to stderr unless `errors_to_stderr` is disabled.
    pub fn from_config(config: &Config) -> Self {
        let logger = Self::new(Palette::from_config(config), stdout_sink(config));
        if config.errors_to_stderr {
            logger.with_error_sink(stderr_sink(config))
        } else {
            logger
        }
    }

    /// Writes one line at `level`.
    ///
    /// Write failures are dropped; logging never fails the caller.
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        let line = format_line(level, args);
        let (text, newline) = line.split_at(line.len() - 1);
        let sink = match (&self.errors, level) {
            (Some(errors), Level::Error) => errors,
            _ => &self.out,
        };
        let mut out = sink.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let _ = write_styled(out.as_mut(), level.style(&self.palette), text)
            .and_then(|()| out.write_all(newline.as_bytes()))
            .and_then(|()| out.flush());
    }

    /// Writes one info-level line.
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    /// Writes one debug-level line.
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    /// Writes one warn-level line.
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    /// Writes one error-level line.
    ///
    /// Goes to the error sink when one is set.
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }
}

/// Logs at info level: `tb_info!(logger, "read {} records", n)`.
#[macro_export]
macro_rules! tb_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(format_args!($($arg)+))
    };
}

/// Logs at debug level.
#[macro_export]
macro_rules! tb_debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(format_args!($($arg)+))
    };
}

/// Logs at warn level.
#[macro_export]
macro_rules! tb_warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(format_args!($($arg)+))
    };
}

/// Logs at error level.
#[macro_export]
macro_rules! tb_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(format_args!($($arg)+))
    };
}
