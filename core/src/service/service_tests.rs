//! Tests for the toggle state machine and trigger-to-audio fan-out
//!
//! Verifies that:
//! - Signals are ignored while disabled
//! - One trigger condition queues exactly one play event
//! - A toggle cycle leaves no duplicate emission paths
//! - Toggling off resets retained comparison state
//! - An empty sound catalog fails construction

use std::sync::Arc;

use tokio::sync::mpsc;

use lbchime_types::{AppConfig, AudioSettings, MonitorMode};

use crate::audio::{AudioError, AudioEvent, audio_channel};
use crate::host::{CastSnapshot, GameStateAccessor, HostSignal, LimitGauge, NullChat};

use super::MonitorService;

// ═══════════════════════════════════════════════════════════════════════════
// Test Helpers
// ═══════════════════════════════════════════════════════════════════════════

struct SimGame {
    units: u16,
    cast: Option<CastSnapshot>,
}

impl SimGame {
    fn with_units(units: u16) -> Self {
        Self { units, cast: None }
    }

    fn with_cast(action_id: u32, is_casting: bool) -> Self {
        Self {
            units: 0,
            cast: Some(CastSnapshot {
                action_id,
                is_casting,
            }),
        }
    }
}

impl GameStateAccessor for SimGame {
    fn limit_gauge(&self) -> Option<LimitGauge> {
        Some(LimitGauge {
            bar_count: 3,
            current_units: self.units,
            units_per_bar: 10_000,
        })
    }

    fn current_cast(&self) -> Option<CastSnapshot> {
        self.cast
    }

    fn party_size(&self) -> usize {
        4
    }
}

fn test_config(mode: MonitorMode) -> AppConfig {
    AppConfig {
        mode,
        audio: AudioSettings {
            sound_files: vec!["a.wav".to_string(), "b.wav".to_string()],
            ..AudioSettings::default()
        },
        ..AppConfig::default()
    }
}

fn make_service(mode: MonitorMode) -> (MonitorService, mpsc::Receiver<AudioEvent>) {
    let (tx, rx) = audio_channel();
    let service = MonitorService::new(&test_config(mode), tx, Arc::new(NullChat)).unwrap();
    (service, rx)
}

fn queued(rx: &mut mpsc::Receiver<AudioEvent>) -> Vec<AudioEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

fn gauge_tick(service: &mut MonitorService, units: u16) {
    service.handle_signal(&HostSignal::FrameTick, &SimGame::with_units(units));
}

fn start_duty(service: &mut MonitorService) {
    service.handle_signal(
        &HostSignal::DutyStarted { duty_id: 1 },
        &SimGame::with_units(0),
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// Toggle Gating
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn disabled_service_ignores_signals() {
    let (mut service, mut rx) = make_service(MonitorMode::Gauge);

    start_duty(&mut service);
    gauge_tick(&mut service, 10);
    gauge_tick(&mut service, 2);

    assert!(!service.is_enabled());
    assert!(queued(&mut rx).is_empty());
}

#[test]
fn trigger_queues_exactly_one_play_event() {
    let (mut service, mut rx) = make_service(MonitorMode::Gauge);
    assert!(service.toggle());

    start_duty(&mut service);
    gauge_tick(&mut service, 10);
    gauge_tick(&mut service, 5);

    let events = queued(&mut rx);
    assert_eq!(events.len(), 1);
    let AudioEvent::Play { file } = &events[0];
    assert!(file == "a.wav" || file == "b.wav");
}

#[test]
fn toggle_cycle_leaves_single_emission_path() {
    let (mut service, mut rx) = make_service(MonitorMode::Gauge);
    service.toggle();
    service.toggle();
    service.toggle();

    start_duty(&mut service);
    gauge_tick(&mut service, 10);
    gauge_tick(&mut service, 4);

    // One trigger condition, one play event - not two
    assert_eq!(queued(&mut rx).len(), 1);
}

#[test]
fn toggle_off_resets_comparison_state() {
    let (mut service, mut rx) = make_service(MonitorMode::Gauge);
    service.toggle();
    start_duty(&mut service);
    gauge_tick(&mut service, 10);

    service.toggle();
    service.toggle();
    start_duty(&mut service);

    // Below the pre-toggle value but above the reset baseline: no trigger
    gauge_tick(&mut service, 8);
    assert!(queued(&mut rx).is_empty());

    gauge_tick(&mut service, 3);
    assert_eq!(queued(&mut rx).len(), 1);
}

// ═══════════════════════════════════════════════════════════════════════════
// Cast Mode
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn cast_mode_fires_on_qualifying_action() {
    let (mut service, mut rx) = make_service(MonitorMode::Cast);
    service.toggle();

    // 200 is in the default trigger set
    service.handle_signal(&HostSignal::FrameTick, &SimGame::with_cast(200, true));
    service.handle_signal(&HostSignal::FrameTick, &SimGame::with_cast(200, true));

    assert_eq!(queued(&mut rx).len(), 1);
}

// ═══════════════════════════════════════════════════════════════════════════
// Configuration Faults
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn empty_catalog_fails_construction() {
    let mut config = test_config(MonitorMode::Gauge);
    config.audio.sound_files.clear();
    let (tx, _rx) = audio_channel();

    let result = MonitorService::new(&config, tx, Arc::new(NullChat));

    assert!(matches!(result, Err(AudioError::EmptyCatalog)));
}
