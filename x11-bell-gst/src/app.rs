//! Process entry: initialise, configure, set up the bell session, run the
//! loop, and reduce whatever happened to an exit status.

use std::ffi::OsString;

use tracing::info;
use x11_bell_common::{ExitStatus, LoopOutcome};

use crate::bell_loop::BellLoop;
use crate::config::{ArgsError, Config};
use crate::playback::{init_gstreamer, BellPipeline};
use crate::x11::BellConnection;
use crate::Result;

/// Version, checkout, build date and target, as captured by build.rs
pub fn build_identification() -> String {
    format!(
        "x11-bell-gst v{} ({}) built {} for {}",
        env!("CARGO_PKG_VERSION"),
        env!("X11_BELL_GIT_DESCRIBE"),
        env!("X11_BELL_BUILD_DATE"),
        env!("X11_BELL_BUILD_TARGET")
    )
}

/// Run x11-bell-gst with `args` (program name first)
pub fn run<I, T>(args: I) -> ExitStatus
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    // GStreamer comes before argument checks
    if let Err(e) = init_gstreamer() {
        info!("{}", e);
        return ExitStatus::Gstreamer;
    }

    let config = match status_for_args(args) {
        Ok(config) => config,
        Err(status) => return status,
    };

    match watch_bell(&config) {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            info!("{}", e);
            e.exit_status()
        }
    }
}

/// Parse the command line, or return the status the process exits with.
///
/// `--help` and `--version` print their text and yield `Success`.
pub fn status_for_args<I, T>(args: I) -> std::result::Result<Config, ExitStatus>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Config::from_args(args) {
        Ok(config) => Ok(config),
        Err(ArgsError::InfoRequested(info)) => {
            let _ = info.print();
            Err(ExitStatus::Success)
        }
        Err(e) => {
            info!("{}", e);
            Err(ExitStatus::InvalidArguments)
        }
    }
}

/// Build the pipeline, set up the bell session and run the loop to its end.
///
/// The connection and pipeline are released when this returns, on every path.
pub fn watch_bell(config: &Config) -> Result<LoopOutcome> {
    let player = BellPipeline::new(&config.sound_uri)?;
    let mut connection = BellConnection::connect()?;
    let event_code = connection.event_code();

    Ok(BellLoop::new(&mut connection, player, event_code).run())
}
