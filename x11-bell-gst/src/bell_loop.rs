//! Bell control loop
//!
//! Each iteration has three phases:
//!
//! 1. **Wait**: block on the event queue until a bell notification arrives.
//! 2. **Play**: play the sound to completion. Nothing else runs meanwhile.
//! 3. **Drain**: poll without blocking and throw away whatever queued up
//!    during playback, including further bells, then go back to Wait.
//!
//! Draining discards, never queues: a burst of bells, or a bell triggered by
//! the playback itself, plays once.
//!
//! The loop ends only on an error packet or a dead connection.

use std::ops::ControlFlow;

use tracing::{debug, info, warn};
use x11_bell_common::LoopOutcome;

use crate::playback::Player;
use crate::x11::{classify, EventKind, EventSource};

/// Counters kept across iterations, for logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    /// Completed play() calls, successful or not
    pub bells_played: u64,
    /// Bell notifications discarded during Drain
    pub bells_suppressed: u64,
    /// Unrelated events skipped in either phase
    pub events_ignored: u64,
    /// play() calls that reported an error
    pub playback_failures: u64,
}

/// Drives a player from the bell notifications of one event source
pub struct BellLoop<S, P> {
    source: S,
    player: P,
    event_code: u8,
    stats: LoopStats,
}

impl<S: EventSource, P: Player> BellLoop<S, P> {
    pub fn new(source: S, player: P, event_code: u8) -> Self {
        Self {
            source,
            player,
            event_code,
            stats: LoopStats::default(),
        }
    }

    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    /// Run until the connection ends or the server reports an error
    pub fn run(&mut self) -> LoopOutcome {
        let outcome = loop {
            if let ControlFlow::Break(outcome) = self.wait_for_bell() {
                break outcome;
            }

            self.play_bell();

            if let ControlFlow::Break(outcome) = self.drain() {
                break outcome;
            }
        };

        info!(
            "Bell loop ended ({}): {} played, {} suppressed, {} playback failures",
            outcome,
            self.stats.bells_played,
            self.stats.bells_suppressed,
            self.stats.playback_failures
        );
        outcome
    }

    /// Wait phase
    fn wait_for_bell(&mut self) -> ControlFlow<LoopOutcome> {
        loop {
            let event = match self.source.wait_for_event() {
                Ok(event) => event,
                Err(fault) => {
                    debug!("Wait ended: {}", fault);
                    return ControlFlow::Break(LoopOutcome::ConnectionClosed);
                }
            };

            match classify(self.event_code, &event) {
                EventKind::BellNotification => {
                    debug!("Bell notification");
                    return ControlFlow::Continue(());
                }
                EventKind::ProtocolError => {
                    info!("X11 error packet while waiting: {:02x?}", event.as_bytes());
                    return ControlFlow::Break(LoopOutcome::ProtocolError);
                }
                EventKind::Other => self.stats.events_ignored += 1,
            }
        }
    }

    /// Play phase. Playback failures are logged and the loop carries on.
    fn play_bell(&mut self) {
        if let Err(e) = self.player.play() {
            warn!("Bell playback failed: {}", e);
            self.stats.playback_failures += 1;
        }
        self.stats.bells_played += 1;
    }

    /// Drain phase
    fn drain(&mut self) -> ControlFlow<LoopOutcome> {
        loop {
            let event = match self.source.poll_for_event() {
                Ok(Some(event)) => event,
                Ok(None) => return ControlFlow::Continue(()),
                Err(fault) => {
                    debug!("Drain ended: {}", fault);
                    return ControlFlow::Break(LoopOutcome::ConnectionError(fault));
                }
            };

            match classify(self.event_code, &event) {
                EventKind::BellNotification => {
                    debug!("Suppressing bell queued during playback");
                    self.stats.bells_suppressed += 1;
                }
                EventKind::ProtocolError => {
                    info!("X11 error packet while draining: {:02x?}", event.as_bytes());
                    return ControlFlow::Break(LoopOutcome::ProtocolError);
                }
                EventKind::Other => self.stats.events_ignored += 1,
            }
        }
    }
}
