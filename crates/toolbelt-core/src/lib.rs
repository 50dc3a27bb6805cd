// Rust guideline compliant 2026-10-16

//! Toolbelt Core Library
//!
//! Small building blocks for command-line tools:
//! - Transparent compressed file I/O (gzip, bzip2, xz)
//! - Typed accessors over parsed clap arguments
//! - Leveled, timestamped, colored console logging
//! - Spinner and gauge progress reporters with throughput rates
//! - Configuration loading and tracing setup

pub mod args;
pub mod config;
pub mod error;
pub mod logger;
pub mod logging;
pub mod progress;
pub mod rate;
pub mod terminal;
pub mod time;
pub mod zio;

pub use args::Args;
pub use config::{ColorMode, Config};
pub use error::{Error, Result};
pub use logger::{Level, Logger};
pub use progress::{ProgressOptions, ProgressReporter};
pub use rate::{RateSample, RateTracker, Summary};
pub use terminal::{MemorySink, Palette, Sink};
pub use zio::{zcreate, zopen, Codec, ZWriter};
