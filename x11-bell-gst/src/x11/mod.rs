//! X11 side: connection, XKB bell session setup, event classification

pub mod classify;
pub mod event;
pub mod session;
pub mod source;

pub use classify::{classify, EventKind};
pub use event::RawEvent;
pub use session::{BellConnection, XKB_WANTED_MAJOR, XKB_WANTED_MINOR};
pub use source::EventSource;
