//! GStreamer playbin pipeline for the bell sound

use gstreamer as gst;
use gstreamer::prelude::*;
use tracing::{debug, info, warn};

use super::{PlaybackState, Player};
use crate::error::PlaybackError;

/// Oldest GStreamer major version we run against
pub const MIN_GSTREAMER_MAJOR: u32 = 1;

/// Initialise GStreamer and check the runtime version
pub fn init_gstreamer() -> Result<(), PlaybackError> {
    gst::init()?;

    let (major, minor, micro, nano) = gst::version();
    debug!("GStreamer runtime {}.{}.{}.{}", major, minor, micro, nano);

    if major < MIN_GSTREAMER_MAJOR {
        return Err(PlaybackError::TooOld {
            found_major: major,
            min_major: MIN_GSTREAMER_MAJOR,
        });
    }
    Ok(())
}

/// Reusable playbin that plays one URI per `play()` call
pub struct BellPipeline {
    playbin: gst::Element,
    bus: gst::Bus,
    state: PlaybackState,
}

impl BellPipeline {
    /// Create the pipeline for `uri`. Requires `init_gstreamer` first.
    pub fn new(uri: &str) -> Result<Self, PlaybackError> {
        info!("Creating bell pipeline for: {}", uri);

        let playbin = gst::ElementFactory::make("playbin")
            .name("bell")
            .property("uri", uri)
            .build()?;

        let bus = playbin.bus().ok_or(PlaybackError::MissingBus)?;

        Ok(Self {
            playbin,
            bus,
            state: PlaybackState::Idle,
        })
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Start the pipeline and block on its bus until EOS or an error
    fn run_until_eos(&self) -> Result<(), PlaybackError> {
        self.playbin.set_state(gst::State::Playing)?;

        for msg in self.bus.iter_timed(gst::ClockTime::NONE) {
            use gst::MessageView;

            match msg.view() {
                MessageView::Eos(..) => {
                    debug!("End of stream");
                    return Ok(());
                }
                MessageView::Error(err) => {
                    return Err(PlaybackError::Stream {
                        source_element: err
                            .src()
                            .map(|s| s.path_string().to_string())
                            .unwrap_or_else(|| "pipeline".to_string()),
                        message: err.error().to_string(),
                    });
                }
                _ => {}
            }
        }

        // The bus only runs dry when it is flushing
        Ok(())
    }

    fn reset(&self) {
        if let Err(e) = self.playbin.set_state(gst::State::Null) {
            warn!("Failed to reset bell pipeline: {}", e);
        }
    }
}

impl Player for BellPipeline {
    fn play(&mut self) -> Result<(), PlaybackError> {
        debug_assert_eq!(self.state, PlaybackState::Idle);
        self.state = PlaybackState::Playing;
        debug!("Bell pipeline {}", self.state);

        let result = self.run_until_eos();

        // Back to Null on every path so the next cycle starts from the top
        self.reset();
        self.state = PlaybackState::Idle;
        debug!("Bell pipeline {}", self.state);

        result
    }
}

impl Drop for BellPipeline {
    fn drop(&mut self) {
        self.reset();
    }
}
