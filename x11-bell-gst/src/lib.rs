//! # x11-bell-gst
//!
//! Plays a sound through GStreamer every time the X11 keyboard bell rings.
//!
//! **Purpose:** Redirect the XKB bell per display and per sound device. One
//! process serves one X server and one sound output; run several for
//! multi-server or multi-card setups.
//!
//! **Architecture:** Single thread. An XKB bell session on an x11rb
//! connection feeds a wait/play/drain loop that drives a GStreamer playbin.

pub mod app;
pub mod bell_loop;
pub mod config;
pub mod error;
pub mod playback;
pub mod x11;

pub use error::{Error, Result};
