//! Process exit statuses
//!
//! The numeric values are stable; supervisors and wrapper scripts match on them.

use crate::outcome::LoopOutcome;

/// Line printed to stderr for every protocol-class failure
pub const X11_ERROR_DIAGNOSTIC: &str = "A X11 error.";

/// Final status of one x11-bell-gst process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    /// Setup, protocol or connection failure on the X11 side
    X11Error = 220,
    /// GStreamer unusable: too old, failed to initialise, or no playbin
    Gstreamer = 221,
    /// Wrong argument count or an unusable sound argument
    InvalidArguments = 222,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// One-line stderr diagnostic, if this status prints one
    pub fn diagnostic(self) -> Option<&'static str> {
        match self {
            ExitStatus::X11Error => Some(X11_ERROR_DIAGNOSTIC),
            ExitStatus::Success | ExitStatus::Gstreamer | ExitStatus::InvalidArguments => None,
        }
    }
}

impl From<LoopOutcome> for ExitStatus {
    fn from(outcome: LoopOutcome) -> Self {
        if outcome.is_clean() {
            ExitStatus::Success
        } else {
            ExitStatus::X11Error
        }
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        std::process::ExitCode::from(status.code())
    }
}
