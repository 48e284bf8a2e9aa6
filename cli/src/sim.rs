//! Simulated game state.
//!
//! Stands in for the game client's native structures so the monitoring
//! engine can be driven by hand: REPL commands mutate these values and
//! the engine reads them back through `GameStateAccessor` on each
//! simulated frame.

use lbchime_core::{CastSnapshot, GameStateAccessor, LimitGauge};

/// Mutable stand-in for the client's game state.
#[derive(Debug)]
pub struct SimGameState {
    pub gauge: Option<LimitGauge>,
    pub cast: Option<CastSnapshot>,
    pub party_size: usize,
}

impl Default for SimGameState {
    fn default() -> Self {
        Self {
            gauge: Some(LimitGauge {
                bar_count: 1,
                current_units: 0,
                units_per_bar: 10_000,
            }),
            cast: None,
            // Matches the client when solo: the party list is empty
            party_size: 0,
        }
    }
}

impl SimGameState {
    pub fn set_gauge(&mut self, current_units: u16, bar_count: u8) {
        self.gauge = Some(LimitGauge {
            bar_count,
            current_units,
            units_per_bar: 10_000,
        });
    }

    /// Make the gauge controller unreadable (the host-unavailable sentinel)
    pub fn clear_gauge(&mut self) {
        self.gauge = None;
    }

    pub fn set_cast(&mut self, action_id: u32, is_casting: bool) {
        self.cast = Some(CastSnapshot {
            action_id,
            is_casting,
        });
    }

    /// Remove the cast subject entirely (no local player)
    pub fn clear_cast(&mut self) {
        self.cast = None;
    }
}

impl GameStateAccessor for SimGameState {
    fn limit_gauge(&self) -> Option<LimitGauge> {
        self.gauge
    }

    fn current_cast(&self) -> Option<CastSnapshot> {
        self.cast
    }

    fn party_size(&self) -> usize {
        self.party_size
    }
}
