//! Limit break gauge depletion monitor.
//!
//! Compares the gauge's stored units against the value seen on the
//! previous frame; a drop means a limit break was used and a sound should
//! play. Frame handling is armed by the duty lifecycle: it starts when a
//! duty starts with a party present and stops when the duty completes.

use tracing::debug;

use crate::host::{ChatSink, GameStateAccessor, HostSignal};

use super::PlayRequest;

/// Watches `LimitGauge::current_units` for frame-over-frame drops.
#[derive(Debug, Default)]
pub struct GaugeMonitor {
    /// Units observed at the end of the previous frame's evaluation
    previous: u16,
    /// Whether frame ticks are currently acted on (duty in progress)
    armed: bool,
}

impl GaugeMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_signal(
        &mut self,
        signal: &HostSignal,
        game: &dyn GameStateAccessor,
        chat: &dyn ChatSink,
    ) -> Option<PlayRequest> {
        match signal {
            HostSignal::FrameTick => self.on_frame(game, chat),
            HostSignal::DutyStarted { duty_id } => {
                chat.print("Duty Started");
                // Solo duties have an empty party list; nothing to watch there.
                self.armed = game.party_size() > 0;
                self.previous = 0;
                debug!(duty_id, armed = self.armed, "duty started, gauge baseline reset");
                None
            }
            HostSignal::DutyCompleted { duty_id } => {
                chat.print("Duty Complete. Stopping monitoring.");
                self.armed = false;
                debug!(duty_id, "duty complete, gauge monitor disarmed");
                None
            }
            HostSignal::DutyWiped { duty_id } => {
                self.previous = 0;
                debug!(duty_id, "duty wiped, gauge baseline reset");
                None
            }
        }
    }

    fn on_frame(
        &mut self,
        game: &dyn GameStateAccessor,
        chat: &dyn ChatSink,
    ) -> Option<PlayRequest> {
        if !self.armed {
            return None;
        }

        let Some(gauge) = game.limit_gauge() else {
            chat.print("Could not retrieve limit break gauge.");
            return None;
        };

        let request = (gauge.current_units < self.previous).then(|| PlayRequest::GaugeSpent {
            from: self.previous,
            to: gauge.current_units,
        });
        self.previous = gauge.current_units;
        request
    }

    /// Disarm and zero the comparison baseline (toggle-off path).
    pub fn reset(&mut self) {
        self.previous = 0;
        self.armed = false;
    }

    /// Units seen on the last evaluated frame
    pub fn previous_units(&self) -> u16 {
        self.previous
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}
