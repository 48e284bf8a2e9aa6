//! Tests for cast trigger detection
//!
//! Verifies that:
//! - A sound fires once per distinct qualifying action
//! - The tracked action re-arms only after the player stops casting
//! - An absent cast subject is a silent no-op

use std::collections::HashSet;

use crate::host::{CastSnapshot, GameStateAccessor, HostSignal, LimitGauge};

use super::{CastMonitor, PlayRequest};

// ═══════════════════════════════════════════════════════════════════════════
// Test Helpers
// ═══════════════════════════════════════════════════════════════════════════

struct SimGame {
    cast: Option<CastSnapshot>,
}

impl GameStateAccessor for SimGame {
    fn limit_gauge(&self) -> Option<LimitGauge> {
        None
    }

    fn current_cast(&self) -> Option<CastSnapshot> {
        self.cast
    }

    fn party_size(&self) -> usize {
        0
    }
}

fn monitor_with_triggers(ids: &[u32]) -> CastMonitor {
    CastMonitor::new(ids.iter().copied().collect::<HashSet<_>>())
}

fn tick(monitor: &mut CastMonitor, action_id: u32, is_casting: bool) -> Option<PlayRequest> {
    let game = SimGame {
        cast: Some(CastSnapshot {
            action_id,
            is_casting,
        }),
    };
    monitor.handle_signal(&HostSignal::FrameTick, &game)
}

// ═══════════════════════════════════════════════════════════════════════════
// Trigger Detection
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn fires_once_per_distinct_qualifying_cast() {
    let mut monitor = monitor_with_triggers(&[200]);

    let sequence = [
        (0, false),
        (200, true),
        (200, true),
        (0, false),
        (200, true),
    ];
    let emitted: Vec<bool> = sequence
        .into_iter()
        .map(|(action, acting)| tick(&mut monitor, action, acting).is_some())
        .collect();

    // Index 1: new qualifying action. Index 3 resets the tracked action,
    // so index 4 qualifies again. Two emissions, not three.
    assert_eq!(emitted, vec![false, true, false, false, true]);
}

#[test]
fn request_carries_action_id() {
    let mut monitor = monitor_with_triggers(&[203]);

    let request = tick(&mut monitor, 203, true);

    assert_eq!(request, Some(PlayRequest::CastStarted { action_id: 203 }));
    assert_eq!(monitor.tracked_action(), 203);
}

#[test]
fn non_qualifying_actions_never_fire() {
    let mut monitor = monitor_with_triggers(&[200]);

    assert!(tick(&mut monitor, 300, true).is_none());
    assert!(tick(&mut monitor, 301, true).is_none());
    assert_eq!(monitor.tracked_action(), 0);
}

#[test]
fn distinct_qualifying_action_fires_while_still_casting() {
    let mut monitor = monitor_with_triggers(&[200, 201]);
    tick(&mut monitor, 200, true);

    // Tracked action changes without an idle frame in between
    assert!(tick(&mut monitor, 201, true).is_some());
    assert_eq!(monitor.tracked_action(), 201);
}

#[test]
fn repeat_cast_requires_idle_frame_to_rearm() {
    let mut monitor = monitor_with_triggers(&[200]);
    tick(&mut monitor, 200, true);

    // Still the same action: no re-fire, tracked value untouched
    assert!(tick(&mut monitor, 200, true).is_none());
    assert_eq!(monitor.tracked_action(), 200);

    // Idle frame clears the tracked action, same id fires again
    assert!(tick(&mut monitor, 0, false).is_none());
    assert_eq!(monitor.tracked_action(), 0);
    assert!(tick(&mut monitor, 200, true).is_some());
}

#[test]
fn idle_reset_applies_even_for_non_qualifying_action_id() {
    let mut monitor = monitor_with_triggers(&[200]);
    tick(&mut monitor, 200, true);

    // Not casting while a stale non-qualifying id is reported: the tracked
    // action still resets.
    assert!(tick(&mut monitor, 300, false).is_none());
    assert_eq!(monitor.tracked_action(), 0);
}

// ═══════════════════════════════════════════════════════════════════════════
// Edge Cases
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn absent_subject_is_silent_noop() {
    let mut monitor = monitor_with_triggers(&[200]);
    tick(&mut monitor, 200, true);

    let game = SimGame { cast: None };
    assert!(monitor.handle_signal(&HostSignal::FrameTick, &game).is_none());
    assert_eq!(monitor.tracked_action(), 200);
}

#[test]
fn duty_signals_are_ignored() {
    let mut monitor = monitor_with_triggers(&[200]);
    tick(&mut monitor, 200, true);

    let game = SimGame {
        cast: Some(CastSnapshot {
            action_id: 0,
            is_casting: false,
        }),
    };
    assert!(
        monitor
            .handle_signal(&HostSignal::DutyStarted { duty_id: 9 }, &game)
            .is_none()
    );
    assert_eq!(monitor.tracked_action(), 200);
}
