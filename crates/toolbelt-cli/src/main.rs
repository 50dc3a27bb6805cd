// Rust guideline compliant 2026-10-16

//! Toolbelt CLI Application
//!
//! Command-line front end for the toolbelt utilities: compressed file
//! streaming and conversion, console logging and progress reporting.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use toolbelt_cli::commands;
use toolbelt_cli::commands::demo::DemoOptions;
use toolbelt_cli::Context;

#[derive(Parser, Debug)]
#[command(
    name = "tb",
    version,
    about = "Toolbelt: compressed I/O, logging and progress for the command line",
    long_about = "Toolbelt bundles small helpers for command-line tools. Files ending in .gz, .bz2 or .xz are decoded and encoded transparently; everything else is read and written as-is.",
    after_help = "Examples:\n  tb cat reads.fa.gz\n  tb convert reads.fa.gz reads.fa.xz --interval 10000\n  tb demo --gauge --total 100 --step 10\n  tb log warn \"disk almost full\"\n  tb hex 0x1f\n"
)]
struct Cli {
    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Diagnostic log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Append diagnostic logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Print files to stdout, decompressing by extension
    Cat {
        /// Files to print
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Re-encode a line-oriented file, choosing codecs by extension
    Convert {
        /// Source file
        input: PathBuf,

        /// Destination file
        output: PathBuf,

        /// Lines between progress updates
        #[arg(long)]
        interval: Option<u64>,
    },

    /// Show every log level and a progress reporter
    Demo {
        /// Use a gauge instead of a spinner
        #[arg(long)]
        gauge: bool,

        /// Items to count
        #[arg(long, default_value_t = 100)]
        total: u64,

        /// Items per step
        #[arg(long, default_value_t = 10)]
        step: u64,

        /// Items between re-renders
        #[arg(long, default_value_t = 10)]
        interval: u64,

        /// Milliseconds to wait between steps
        #[arg(long, default_value_t = 300)]
        delay_ms: u64,
    },

    /// Write one log line
    Log {
        /// Level (info, debug, warn, error)
        level: String,

        /// Message text
        message: String,
    },

    /// Parse a hexadecimal value and print it in decimal
    Hex {
        /// Value such as ff or 0x1f
        #[arg(value_parser = toolbelt_core::args::parse_hex, allow_hyphen_values = true)]
        value: i64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _guard = toolbelt_core::logging::init_tracing(&cli.log_level, cli.log_file.as_deref())?;
    let ctx = Context::load(cli.config.as_deref(), cli.no_color)?;

    match cli.command {
        Some(Commands::Cat { files }) => {
            commands::cat::execute(files)?;
        }
        Some(Commands::Convert {
            input,
            output,
            interval,
        }) => {
            commands::convert::execute(&ctx, input, output, interval)?;
        }
        Some(Commands::Demo {
            gauge,
            total,
            step,
            interval,
            delay_ms,
        }) => {
            commands::demo::execute(
                &ctx,
                DemoOptions {
                    gauge,
                    total,
                    step,
                    interval,
                    delay: Duration::from_millis(delay_ms),
                },
            )?;
        }
        Some(Commands::Log { level, message }) => {
            commands::log::execute(&ctx, &level, &message)?;
        }
        Some(Commands::Hex { value }) => {
            commands::hex::execute(value);
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
