//! Events delivered by the host to subscribed handlers.

/// One host-side occurrence the monitors react to.
///
/// `FrameTick` is the per-frame update callback; the duty variants mirror
/// the client's duty lifecycle events and carry the opaque duty id the
/// host supplies (unused by the monitors themselves).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSignal {
    FrameTick,
    DutyStarted { duty_id: u16 },
    DutyCompleted { duty_id: u16 },
    DutyWiped { duty_id: u16 },
}

impl HostSignal {
    /// The duty id carried by lifecycle signals, if any
    pub fn duty_id(&self) -> Option<u16> {
        match self {
            HostSignal::FrameTick => None,
            HostSignal::DutyStarted { duty_id }
            | HostSignal::DutyCompleted { duty_id }
            | HostSignal::DutyWiped { duty_id } => Some(*duty_id),
        }
    }
}
