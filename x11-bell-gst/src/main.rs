//! x11-bell-gst - Main entry point
//!
//! Usage: `x11-bell-gst SOUND`
//!
//! Connects to the X server named by `DISPLAY` and plays SOUND through
//! GStreamer whenever an XKB BellNotify event arrives.

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::debug;
use x11_bell_common::config::LoggingConfig;

fn main() -> ExitCode {
    if let Err(e) = init_tracing() {
        eprintln!("{:#}", e);
    }

    debug!("Starting {}", x11_bell_gst::app::build_identification());

    let status = x11_bell_gst::app::run(std::env::args_os());

    if let Some(line) = status.diagnostic() {
        eprintln!("{}", line);
    }
    debug!("Exiting with status {}", status.code());

    status.into()
}

/// Log to stderr, filtered by `RUST_LOG` (quiet by default)
fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(LoggingConfig::default().env_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(anyhow::Error::msg)
        .context("Failed to initialise logging")
}
