//! XKB bell session
//!
//! Connects to the default display, subscribes to XKB BellNotify events and
//! switches the server's own audible bell off, so the only bell heard is the
//! one we play.
//!
//! Known limitation: some Xorg versions do not restore the audible bell when
//! the client exits, even with AutoReset controls set. Nothing on the client
//! side can fix that.

use tracing::{debug, info};
use x11rb::connection::Connection;
use x11rb::errors::ConnectionError;
use x11rb::protocol::xkb::{self, ConnectionExt as _};
use x11rb::protocol::xproto;
use x11rb::rust_connection::RustConnection;
use x11_bell_common::ConnectionFault;

use super::event::RawEvent;
use super::source::EventSource;
use crate::error::SetupError;

/// XKB version requested in UseExtension
pub const XKB_WANTED_MAJOR: u16 = 1;
pub const XKB_WANTED_MINOR: u16 = 0;

/// Live X server connection with the bell session set up
pub struct BellConnection {
    conn: RustConnection,
    event_code: u8,
}

impl BellConnection {
    /// Connect to the display named by `DISPLAY` and set up the bell session
    pub fn connect() -> Result<Self, SetupError> {
        let (conn, screen) = x11rb::connect(None)?;
        debug!("Connected to X server, default screen {}", screen);

        let event_code = setup(&conn)?;
        info!("Listening for XKB bell notifications (event code {})", event_code);

        Ok(Self { conn, event_code })
    }

    /// XKB base event code assigned to this connection
    pub fn event_code(&self) -> u8 {
        self.event_code
    }
}

impl EventSource for BellConnection {
    fn wait_for_event(&mut self) -> Result<RawEvent, ConnectionFault> {
        self.conn
            .wait_for_raw_event()
            .map(RawEvent::from)
            .map_err(|e| connection_fault(&e))
    }

    fn poll_for_event(&mut self) -> Result<Option<RawEvent>, ConnectionFault> {
        self.conn
            .poll_for_raw_event()
            .map(|event| event.map(RawEvent::from))
            .map_err(|e| connection_fault(&e))
    }
}

impl Drop for BellConnection {
    fn drop(&mut self) {
        debug!("Closing X server connection");
    }
}

/// Socket and stream failures are how the server going away shows up
fn connection_fault(err: &ConnectionError) -> ConnectionFault {
    debug!("X server connection error: {}", err);
    match err {
        ConnectionError::IoError(_) => ConnectionFault::Closed,
        _ => ConnectionFault::Other,
    }
}

/// Negotiate XKB, subscribe to bell notifications and mute the server bell.
///
/// Returns the XKB base event code for this connection.
pub fn setup<C: Connection>(conn: &C) -> Result<u8, SetupError> {
    let device: xkb::DeviceSpec = xkb::ID::USE_CORE_KBD.into();

    // QueryExtension goes out first; its reply is only needed at the end
    conn.prefetch_extension_information(xkb::X11_EXTENSION_NAME)?;

    let use_cookie = match conn.xkb_use_extension(XKB_WANTED_MAJOR, XKB_WANTED_MINOR) {
        Ok(cookie) => cookie,
        Err(ConnectionError::UnsupportedExtension) => return Err(SetupError::ExtensionMissing),
        Err(e) => return Err(e.into()),
    };

    let select_cookie = conn.xkb_select_events(
        device,
        xkb::EventType::from(0u8),
        xkb::EventType::BELL_NOTIFY,
        xkb::MapPart::from(0u8),
        xkb::MapPart::from(0u8),
        &xkb::SelectEventsAux::new(),
    )?;

    let pcf_cookie = conn.xkb_per_client_flags(
        device,
        xkb::PerClientFlag::AUTO_RESET_CONTROLS,
        xkb::PerClientFlag::AUTO_RESET_CONTROLS,
        xkb::BoolCtrl::AUDIBLE_BELL_MASK,
        xkb::BoolCtrl::AUDIBLE_BELL_MASK,
        xkb::BoolCtrl::AUDIBLE_BELL_MASK,
    )?;

    let use_reply = use_cookie.reply().map_err(SetupError::UseExtension)?;
    check_use_extension(&use_reply)?;

    select_cookie.check().map_err(SetupError::SelectEvents)?;

    let pcf_reply = pcf_cookie.reply().map_err(SetupError::PerClientFlags)?;
    debug!(
        "Per-client flags: auto_ctrls={:#x} auto_ctrls_values={:#x}",
        u32::from(pcf_reply.auto_ctrls),
        u32::from(pcf_reply.auto_ctrls_values)
    );

    disable_audible_bell(conn, device)?;

    let xkb_info = conn
        .extension_information(xkb::X11_EXTENSION_NAME)?
        .ok_or(SetupError::ExtensionMissing)?;

    conn.flush().map_err(SetupError::Flush)?;

    Ok(xkb_info.first_event)
}

/// Reject a UseExtension reply that refuses our XKB version
fn check_use_extension(reply: &xkb::UseExtensionReply) -> Result<(), SetupError> {
    if !reply.supported {
        return Err(SetupError::Unsupported {
            wanted_major: XKB_WANTED_MAJOR,
            wanted_minor: XKB_WANTED_MINOR,
            server_major: reply.server_major,
            server_minor: reply.server_minor,
        });
    }
    debug!(
        "XKB {}.{} supported by server",
        reply.server_major, reply.server_minor
    );
    Ok(())
}

/// Clear the AudibleBell control on the core keyboard.
///
/// Sent unchecked: a rejection arrives later as an error packet and ends
/// the control loop.
fn disable_audible_bell<C: Connection>(
    conn: &C,
    device: xkb::DeviceSpec,
) -> Result<(), ConnectionError> {
    let no_mods = xproto::ModMask::from(0u8);
    let no_vmods = xkb::VMod::from(0u8);
    let no_ax_options = xkb::AXOption::from(0u8);
    let no_ctrls = xkb::BoolCtrl::from(0u8);
    let per_key_repeat = [0u8; 32];

    conn.xkb_set_controls(
        device,
        no_mods,
        no_mods,
        no_mods,
        no_mods,
        no_vmods,
        no_vmods,
        no_vmods,
        no_vmods,
        0,
        0,
        no_ax_options,
        xkb::BoolCtrl::AUDIBLE_BELL_MASK,
        no_ctrls,
        xkb::Control::CONTROLS_ENABLED,
        0,
        0,
        0,
        0,
        0,
        0,
        0,
        0,
        0,
        0,
        no_ctrls,
        no_ctrls,
        no_ax_options,
        no_ax_options,
        &per_key_repeat,
    )?;

    debug!("Server audible bell disabled");
    Ok(())
}
