//! Limit break cast monitor.
//!
//! Fires once per distinct qualifying action: a new action id that belongs
//! to the trigger set plays a sound and becomes the tracked action; the
//! tracked action is cleared once the player stops casting, which re-arms
//! the monitor for the same action id.

use std::collections::HashSet;

use tracing::debug;

use crate::host::{GameStateAccessor, HostSignal};

use super::PlayRequest;

/// Watches the local player's current cast for qualifying actions.
///
/// Action id 0 is the sentinel for "no tracked action".
#[derive(Debug)]
pub struct CastMonitor {
    previous: u32,
    triggers: HashSet<u32>,
}

impl CastMonitor {
    pub fn new(triggers: HashSet<u32>) -> Self {
        Self {
            previous: 0,
            triggers,
        }
    }

    pub fn handle_signal(
        &mut self,
        signal: &HostSignal,
        game: &dyn GameStateAccessor,
    ) -> Option<PlayRequest> {
        if !matches!(signal, HostSignal::FrameTick) {
            return None;
        }

        // No local player, or not an object that can cast: routine, skip.
        let cast = game.current_cast()?;

        if cast.action_id != self.previous && self.triggers.contains(&cast.action_id) {
            self.previous = cast.action_id;
            debug!(action_id = cast.action_id, "qualifying cast detected");
            return Some(PlayRequest::CastStarted {
                action_id: cast.action_id,
            });
        }

        // Re-arm once the player is idle. Checked only when the rule above
        // did not fire; both can never apply on the same tick.
        if !cast.is_casting && self.previous != 0 {
            self.previous = 0;
        }

        None
    }

    /// Clear the tracked action (toggle-off path).
    pub fn reset(&mut self) {
        self.previous = 0;
    }

    /// Currently tracked action id (0 = none)
    pub fn tracked_action(&self) -> u32 {
        self.previous
    }
}
