//! Test helpers for driving the bell loop without an X server or GStreamer
//!
//! - `ScriptedSource`: replays a fixed sequence of packets and faults
//! - `RecordingPlayer`: counts play() calls and checks they never overlap
//! - Packet builders for bell, unrelated and error packets

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use x11_bell_common::{ConnectionFault, LoopOutcome};
use x11_bell_gst::bell_loop::{BellLoop, LoopStats};
use x11_bell_gst::error::PlaybackError;
use x11_bell_gst::playback::Player;
use x11_bell_gst::x11::classify::BELL_NOTIFY_SUB_TYPE;
use x11_bell_gst::x11::{EventSource, RawEvent};

/// XKB base event code used by every script
pub const XKB_EVENT_CODE: u8 = 85;

/// Core KeyPress event type
const KEY_PRESS: u8 = 2;

/// XKB StateNotify sub-type
const XKB_STATE_NOTIFY: u8 = 2;

/// Every call the loop makes into its collaborators, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Wait,
    Poll,
    PlayStart,
    PlayEnd,
}

/// One scripted answer from the event source
#[derive(Debug, Clone)]
pub enum Step {
    /// A packet, returned by either wait or poll
    Packet(RawEvent),
    /// Nothing queued; only valid for poll
    Empty,
    /// Connection failure
    Fault(ConnectionFault),
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

/// Event source that replays a script.
///
/// An exhausted script behaves like a server that went away: poll reports an
/// empty queue, wait reports the connection closed.
pub struct ScriptedSource {
    steps: VecDeque<Step>,
    log: CallLog,
}

impl ScriptedSource {
    pub fn new(steps: Vec<Step>, log: CallLog) -> Self {
        Self {
            steps: steps.into(),
            log,
        }
    }

    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl EventSource for ScriptedSource {
    fn wait_for_event(&mut self) -> Result<RawEvent, ConnectionFault> {
        self.log.borrow_mut().push(Call::Wait);
        match self.steps.pop_front() {
            Some(Step::Packet(event)) => Ok(event),
            Some(Step::Fault(fault)) => Err(fault),
            Some(Step::Empty) => panic!("wait_for_event reached an Empty step; it would block forever"),
            None => Err(ConnectionFault::Closed),
        }
    }

    fn poll_for_event(&mut self) -> Result<Option<RawEvent>, ConnectionFault> {
        self.log.borrow_mut().push(Call::Poll);
        match self.steps.pop_front() {
            Some(Step::Packet(event)) => Ok(Some(event)),
            Some(Step::Empty) | None => Ok(None),
            Some(Step::Fault(fault)) => Err(fault),
        }
    }
}

/// Player that records calls and optionally fails every playback
pub struct RecordingPlayer {
    log: CallLog,
    playing: bool,
    fail: bool,
}

impl RecordingPlayer {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            playing: false,
            fail: false,
        }
    }

    pub fn failing(log: CallLog) -> Self {
        Self {
            fail: true,
            ..Self::new(log)
        }
    }
}

impl Player for RecordingPlayer {
    fn play(&mut self) -> Result<(), PlaybackError> {
        assert!(!self.playing, "play() entered while a previous call was active");
        self.playing = true;
        self.log.borrow_mut().push(Call::PlayStart);
        self.log.borrow_mut().push(Call::PlayEnd);
        self.playing = false;

        if self.fail {
            Err(PlaybackError::Stream {
                source_element: "/bell/filesrc0".to_string(),
                message: "Resource not found.".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

/// Result of running a script to completion
pub struct ScriptRun {
    pub outcome: LoopOutcome,
    pub calls: Vec<Call>,
    pub stats: LoopStats,
    pub unconsumed: usize,
}

impl ScriptRun {
    pub fn plays(&self) -> usize {
        self.calls.iter().filter(|c| **c == Call::PlayStart).count()
    }
}

/// Run the bell loop over `steps` with a well-behaved player
pub fn run_script(steps: Vec<Step>) -> ScriptRun {
    let log = CallLog::default();
    run_with_player(steps, RecordingPlayer::new(log.clone()), log)
}

/// Run the bell loop over `steps` with a player whose playback always fails
pub fn run_script_failing_player(steps: Vec<Step>) -> ScriptRun {
    let log = CallLog::default();
    run_with_player(steps, RecordingPlayer::failing(log.clone()), log)
}

fn run_with_player(steps: Vec<Step>, player: RecordingPlayer, log: CallLog) -> ScriptRun {
    let mut source = ScriptedSource::new(steps, log.clone());
    let mut bell_loop = BellLoop::new(&mut source, player, XKB_EVENT_CODE);
    let outcome = bell_loop.run();
    let stats = bell_loop.stats();
    drop(bell_loop);

    let calls = log.borrow().clone();
    ScriptRun {
        outcome,
        calls,
        stats,
        unconsumed: source.remaining(),
    }
}

fn packet(response_type: u8, sub_type: u8) -> Step {
    let mut bytes = vec![0u8; 32];
    bytes[0] = response_type;
    bytes[1] = sub_type;
    Step::Packet(RawEvent::new(bytes))
}

/// XKB BellNotify as generated by the server
pub fn bell() -> Step {
    packet(XKB_EVENT_CODE, BELL_NOTIFY_SUB_TYPE)
}

/// XKB BellNotify forwarded with SendEvent
pub fn synthetic_bell() -> Step {
    packet(XKB_EVENT_CODE | 0x80, BELL_NOTIFY_SUB_TYPE)
}

/// XKB event that is not a bell
pub fn xkb_state_notify() -> Step {
    packet(XKB_EVENT_CODE, XKB_STATE_NOTIFY)
}

/// Core event unrelated to XKB
pub fn key_press() -> Step {
    packet(KEY_PRESS, 38)
}

/// Error packet (BadValue)
pub fn x11_error() -> Step {
    packet(0, 2)
}
