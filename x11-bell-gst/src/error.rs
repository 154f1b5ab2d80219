//! Error types for x11-bell-gst
//!
//! Every variant here collapses into one of the process exit statuses; the
//! variants exist so the logs can say which step went wrong.

use gstreamer as gst;
use gstreamer::glib;
use thiserror::Error;
use x11rb::errors::{ConnectError, ConnectionError, ReplyError};

/// Failure while negotiating the XKB bell session with the X server
#[derive(Error, Debug)]
pub enum SetupError {
    /// Could not reach the display at all
    #[error("Failed to connect to X server: {0}")]
    Connect(#[from] ConnectError),

    /// A request could not be written to the connection
    #[error("Failed to send request: {0}")]
    Request(#[from] ConnectionError),

    /// The server does not know the XKB extension
    #[error("XKB extension not present on the X server")]
    ExtensionMissing,

    /// UseExtension produced no reply
    #[error("XKB UseExtension failed: {0}")]
    UseExtension(#[source] ReplyError),

    /// The server refused our XKB version
    #[error("XKB {wanted_major}.{wanted_minor} not supported (server has {server_major}.{server_minor})")]
    Unsupported {
        wanted_major: u16,
        wanted_minor: u16,
        server_major: u16,
        server_minor: u16,
    },

    /// Subscribing to bell notifications was rejected
    #[error("XKB SelectEvents failed: {0}")]
    SelectEvents(#[source] ReplyError),

    /// Setting the per-client auto-reset flags was rejected
    #[error("XKB PerClientFlags failed: {0}")]
    PerClientFlags(#[source] ReplyError),

    /// Queued requests could not be flushed to the server
    #[error("Failed to flush requests: {0}")]
    Flush(#[source] ConnectionError),
}

/// Failure of the playback pipeline
#[derive(Error, Debug)]
pub enum PlaybackError {
    /// gstreamer::init failed
    #[error("GStreamer initialisation failed: {0}")]
    Init(#[from] glib::Error),

    /// Runtime GStreamer is older than what we support
    #[error("GStreamer {found_major}.x is older than the minimum {min_major}.x")]
    TooOld { found_major: u32, min_major: u32 },

    /// The playbin element could not be created
    #[error("Failed to create pipeline element: {0}")]
    Element(#[from] glib::BoolError),

    /// The pipeline has no message bus
    #[error("Pipeline has no bus")]
    MissingBus,

    /// The pipeline refused a state change
    #[error("Pipeline state change failed: {0}")]
    StateChange(#[from] gst::StateChangeError),

    /// An element posted an error while playing
    #[error("Playback error from {source_element}: {message}")]
    Stream {
        source_element: String,
        message: String,
    },
}

/// Main error type for x11-bell-gst
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),
}

/// Convenience Result type using x11-bell-gst Error
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Exit status this failure maps to
    pub fn exit_status(&self) -> x11_bell_common::ExitStatus {
        use x11_bell_common::ExitStatus;

        match self {
            Error::Setup(_) => ExitStatus::X11Error,
            Error::Playback(_) => ExitStatus::Gstreamer,
        }
    }
}
