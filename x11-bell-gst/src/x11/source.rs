//! Event source abstraction
//!
//! The two ways the control loop pulls packets off a connection.

use super::event::RawEvent;
use x11_bell_common::ConnectionFault;

/// A stream of raw protocol packets from one server connection
pub trait EventSource {
    /// Block until the next packet arrives.
    ///
    /// `Err` means the connection is gone and no packet will ever arrive.
    fn wait_for_event(&mut self) -> Result<RawEvent, ConnectionFault>;

    /// Return the next queued packet without blocking.
    ///
    /// `Ok(None)` means the queue is empty and the connection is healthy.
    fn poll_for_event(&mut self) -> Result<Option<RawEvent>, ConnectionFault>;
}

impl<S: EventSource + ?Sized> EventSource for &mut S {
    fn wait_for_event(&mut self) -> Result<RawEvent, ConnectionFault> {
        (**self).wait_for_event()
    }

    fn poll_for_event(&mut self) -> Result<Option<RawEvent>, ConnectionFault> {
        (**self).poll_for_event()
    }
}
