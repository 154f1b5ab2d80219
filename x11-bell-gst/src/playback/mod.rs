//! Playback controller
//!
//! One reusable pipeline per process. `play()` runs a whole playback cycle
//! and only returns once the sound has finished.

pub mod pipeline;

use std::fmt;

use crate::error::PlaybackError;

pub use pipeline::{init_gstreamer, BellPipeline, MIN_GSTREAMER_MAJOR};

/// Playback session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing,
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackState::Idle => write!(f, "idle"),
            PlaybackState::Playing => write!(f, "playing"),
        }
    }
}

/// Something that can play the bell sound to completion
pub trait Player {
    /// Play once, blocking the calling thread until end-of-stream.
    ///
    /// Takes `&mut self`, so a second call cannot start before the first
    /// has returned.
    fn play(&mut self) -> Result<(), PlaybackError>;
}

impl<P: Player + ?Sized> Player for &mut P {
    fn play(&mut self) -> Result<(), PlaybackError> {
        (**self).play()
    }
}
