//! Per-frame game state access.
//!
//! The real client reads these values out of native game structures; that
//! access lives entirely behind `GameStateAccessor` so the monitors only
//! ever see value types or an "unavailable" `None`.

/// Snapshot of the limit break gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitGauge {
    /// Number of bars currently unlocked for the party
    pub bar_count: u8,
    /// Stored units across all bars. The only field that drives triggering.
    pub current_units: u16,
    /// Units one full bar holds
    pub units_per_bar: u16,
}

impl LimitGauge {
    /// Total capacity of the unlocked bars
    pub fn max_units(&self) -> u32 {
        u32::from(self.bar_count) * u32::from(self.units_per_bar)
    }
}

/// Snapshot of the local player's current action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastSnapshot {
    /// Id of the action being (or last) cast
    pub action_id: u32,
    /// Whether the player is mid-cast right now
    pub is_casting: bool,
}

/// Read access to the host's game state. Every method returns immediately;
/// `None` means the underlying source is unavailable this frame (no
/// gauge controller instance, no local player object, wrong object kind).
pub trait GameStateAccessor {
    fn limit_gauge(&self) -> Option<LimitGauge>;
    fn current_cast(&self) -> Option<CastSnapshot>;
    fn party_size(&self) -> usize;
}
