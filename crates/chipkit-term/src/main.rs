//! chipkit terminal host entry point.
//!
//! # Usage
//!
//! ```bash
//! # Modern key names, logs discarded
//! chipkit-term
//!
//! # Old-browser key events, right-to-left layout, debug log to a file
//! chipkit-term --legacy --rtl --log-file chipkit.log --log-level debug
//! ```

use std::{fs::File, path::PathBuf, sync::Mutex};

use chipkit_term::{HostConfig, TerminalSession};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Interactive chip trailing action in the terminal
#[derive(Parser, Debug)]
#[command(name = "chipkit-term")]
#[command(about = "Drive a chip trailing action from the terminal")]
#[command(version)]
struct Args {
    /// Chip identifier reported in navigation details
    #[arg(long, default_value = "chip-1")]
    chip_id: String,

    /// Right-to-left layout
    #[arg(long)]
    rtl: bool,

    /// Send legacy key names with numeric key codes
    #[arg(long)]
    legacy: bool,

    /// Start with aria-hidden="true"
    #[arg(long)]
    hidden: bool,

    /// Write logs to this file (the terminal is in raw mode)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
        let file = File::create(path)?;

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
            .with(filter)
            .init();
    }

    let config = HostConfig {
        chip_id: args.chip_id,
        is_rtl: args.rtl,
        legacy_keys: args.legacy,
        hidden: args.hidden,
    };

    TerminalSession::new(config)?.run()?;

    Ok(())
}
