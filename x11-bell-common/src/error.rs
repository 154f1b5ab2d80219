//! Common error types for x11-bell-gst

use thiserror::Error;

/// Common result type for x11-bell-gst operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by the workspace crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Sound argument that cannot be handed to the media framework
    #[error("Invalid sound resource: {0}")]
    InvalidResource(String),
}
