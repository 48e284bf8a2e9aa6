//! The two trigger monitors.
//!
//! Each watches one in-game condition across frame ticks and asks for a
//! sound when it sees a qualifying transition. They are alternatives, not
//! layers: the configured `MonitorMode` selects exactly one at startup.

pub mod cast;
pub mod gauge;

#[cfg(test)]
mod cast_tests;

pub use cast::CastMonitor;
pub use gauge::GaugeMonitor;

use crate::host::{ChatSink, GameStateAccessor, HostSignal};

/// Why a monitor wants a sound played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayRequest {
    /// Stored limit break units dropped since the previous frame
    GaugeSpent { from: u16, to: u16 },
    /// A qualifying action started that wasn't being tracked
    CastStarted { action_id: u32 },
}

/// Whichever monitor the service is running.
#[derive(Debug)]
pub enum Monitor {
    Gauge(GaugeMonitor),
    Cast(CastMonitor),
}

impl Monitor {
    /// Route one host signal to the underlying monitor. At most one play
    /// request comes back per signal.
    pub fn handle_signal(
        &mut self,
        signal: &HostSignal,
        game: &dyn GameStateAccessor,
        chat: &dyn ChatSink,
    ) -> Option<PlayRequest> {
        match self {
            Monitor::Gauge(monitor) => monitor.handle_signal(signal, game, chat),
            Monitor::Cast(monitor) => monitor.handle_signal(signal, game),
        }
    }

    /// Return all retained comparison state to its zero value.
    pub fn reset(&mut self) {
        match self {
            Monitor::Gauge(monitor) => monitor.reset(),
            Monitor::Cast(monitor) => monitor.reset(),
        }
    }
}
