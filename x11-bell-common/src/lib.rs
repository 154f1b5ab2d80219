//! # X11 Bell Common Library
//!
//! Shared code for the x11-bell-gst workspace:
//! - Error and result types
//! - Process exit statuses
//! - Control loop outcomes and connection fault categories
//! - Sound resource resolution and logging configuration

pub mod config;
pub mod error;
pub mod exit;
pub mod outcome;

pub use error::{Error, Result};
pub use exit::ExitStatus;
pub use outcome::{ConnectionFault, LoopOutcome};
