//! Terminal conditions of the bell control loop

use std::fmt;

/// Category of a lost or broken server connection.
///
/// The transport reports socket/stream failures (including the server going
/// away at the end of a session) as `Closed`. Everything else the connection
/// can fail with is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionFault {
    /// Socket, pipe or stream error; the usual signal that the session ended
    Closed,
    /// Any other unrecoverable connection error
    Other,
}

impl fmt::Display for ConnectionFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionFault::Closed => write!(f, "connection closed"),
            ConnectionFault::Other => write!(f, "connection failed"),
        }
    }
}

/// How the control loop ended. The loop has no other exit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopOutcome {
    /// Blocking retrieve reported the connection gone
    ConnectionClosed,
    /// The server delivered an error packet
    ProtocolError,
    /// A non-blocking poll found the connection unhealthy
    ConnectionError(ConnectionFault),
}

impl LoopOutcome {
    /// Whether this outcome counts as a normal shutdown
    pub fn is_clean(&self) -> bool {
        matches!(
            self,
            LoopOutcome::ConnectionClosed | LoopOutcome::ConnectionError(ConnectionFault::Closed)
        )
    }
}

impl fmt::Display for LoopOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoopOutcome::ConnectionClosed => write!(f, "connection closed while waiting"),
            LoopOutcome::ProtocolError => write!(f, "protocol error"),
            LoopOutcome::ConnectionError(fault) => write!(f, "{} while draining", fault),
        }
    }
}
