//! Event classification
//!
//! Sorts each packet from the event queue into bell notifications, error
//! packets and everything else. Pure; no connection state is touched.

use super::event::RawEvent;
use x11rb::protocol::xkb;

/// Response type the server uses for error packets
pub const ERROR_RESPONSE_TYPE: u8 = 0;

/// XKB sub-type carried by BellNotify events
pub const BELL_NOTIFY_SUB_TYPE: u8 = xkb::BELL_NOTIFY_EVENT;

/// What a raw packet means to the control loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    BellNotification,
    Other,
    ProtocolError,
}

/// Classify `event` given the XKB base event code assigned for this session
pub fn classify(event_code: u8, event: &RawEvent) -> EventKind {
    if event.response_type() == ERROR_RESPONSE_TYPE {
        EventKind::ProtocolError
    } else if event.base_type() != event_code {
        EventKind::Other
    } else if event.sub_type() == Some(BELL_NOTIFY_SUB_TYPE) {
        EventKind::BellNotification
    } else {
        EventKind::Other
    }
}
