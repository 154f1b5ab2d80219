//! Command-line configuration
//!
//! Exactly one positional argument: the sound to play. There is no
//! configuration file and no display override; `DISPLAY` picks the server.
//!
//! GStreamer's own `--gst-*` options are removed before parsing and ignored.
//! Only the `--gst-option=value` form is recognised; `GST_DEBUG` and friends
//! still work through the environment.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;
use thiserror::Error;
use tracing::info;
use x11_bell_common::config::resolve_sound_uri;

/// Prefix shared by all GStreamer command-line options
pub const GST_OPTION_PREFIX: &str = "--gst-";

/// Split `--gst-*` options off the command line.
///
/// Returns the remaining arguments and the removed options, both in order.
/// Nothing after a `--` separator is treated as an option.
pub fn split_gst_options<I, T>(args: I) -> (Vec<OsString>, Vec<OsString>)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut remaining = Vec::new();
    let mut gst_options = Vec::new();
    let mut after_separator = false;

    for arg in args.into_iter().map(Into::into) {
        let is_gst_option = !after_separator
            && arg
                .to_str()
                .is_some_and(|s| s.starts_with(GST_OPTION_PREFIX));

        if arg == "--" {
            after_separator = true;
        }

        if is_gst_option {
            gst_options.push(arg);
        } else {
            remaining.push(arg);
        }
    }

    (remaining, gst_options)
}

/// Command-line arguments for x11-bell-gst
#[derive(Parser, Debug)]
#[command(name = "x11-bell-gst")]
#[command(about = "Plays a sound through GStreamer whenever the X11 keyboard bell rings")]
#[command(version)]
pub struct Args {
    /// Sound to play on every bell, as a URI or a local file path
    #[arg(value_name = "SOUND")]
    pub sound: String,
}

/// Why the command line did not yield a configuration
#[derive(Error, Debug)]
pub enum ArgsError {
    /// `--help` or `--version`; not a failure
    #[error("{0}")]
    InfoRequested(clap::Error),

    /// Wrong argument count or unknown flag
    #[error("Invalid arguments: {0}")]
    Parse(clap::Error),

    /// The sound argument is not usable as a URI
    #[error(transparent)]
    Resource(#[from] x11_bell_common::Error),
}

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URI handed to playbin
    pub sound_uri: String,
}

impl Config {
    /// Parse `args` (program name first) into a configuration
    pub fn from_args<I, T>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let (args, gst_options) = split_gst_options(args);
        if !gst_options.is_empty() {
            info!("Ignoring GStreamer options: {:?}", gst_options);
        }

        let args = Args::try_parse_from(args).map_err(|e| match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ArgsError::InfoRequested(e),
            _ => ArgsError::Parse(e),
        })?;

        Ok(Self {
            sound_uri: resolve_sound_uri(&args.sound)?,
        })
    }
}
