//! Raw protocol packets pulled off the event queue

/// One undecoded event or error packet.
///
/// The X server delivers errors for unchecked requests through the event
/// queue, so an error packet looks like any other event here until it is
/// classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEvent {
    bytes: Vec<u8>,
}

/// Bit set in the response type of events forwarded with SendEvent
pub const SEND_EVENT_MASK: u8 = 0x80;

impl RawEvent {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Response type as sent, including the SendEvent bit.
    ///
    /// An empty packet reads as 0, the error sentinel.
    pub fn response_type(&self) -> u8 {
        self.bytes.first().copied().unwrap_or(0)
    }

    /// Response type with the SendEvent bit cleared
    pub fn base_type(&self) -> u8 {
        self.response_type() & !SEND_EVENT_MASK
    }

    /// Extension sub-type (`xkbType` for XKB events)
    pub fn sub_type(&self) -> Option<u8> {
        self.bytes.get(1).copied()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for RawEvent {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}
