//! Monitor service: the toggle state machine around one monitor.
//!
//! Owns whichever monitor the config selects, gates it behind the enabled
//! flag, and fans confirmed triggers out to the audio channel. Starts
//! disabled; the host's toggle command flips it, no arguments consulted.

#[cfg(test)]
mod service_tests;

use std::sync::Arc;

use tracing::{debug, info, warn};

use lbchime_types::{AppConfig, MonitorMode};

use crate::audio::{AudioError, AudioEvent, AudioSender, SoundCatalog};
use crate::host::{ChatSink, GameStateAccessor, HostSignal};
use crate::monitor::{CastMonitor, GaugeMonitor, Monitor, PlayRequest};

pub struct MonitorService {
    enabled: bool,
    monitor: Monitor,
    catalog: SoundCatalog,
    audio_tx: AudioSender,
    chat: Arc<dyn ChatSink>,
}

impl MonitorService {
    /// Build the service from config. Fails when the sound catalog is
    /// empty - a configuration fault the host surfaces at startup instead
    /// of discovering on the first trigger.
    pub fn new(
        config: &AppConfig,
        audio_tx: AudioSender,
        chat: Arc<dyn ChatSink>,
    ) -> Result<Self, AudioError> {
        let catalog = SoundCatalog::new(config.audio.sound_files.clone())?;
        let monitor = match config.mode {
            MonitorMode::Gauge => Monitor::Gauge(GaugeMonitor::new()),
            MonitorMode::Cast => Monitor::Cast(CastMonitor::new(
                config.triggers.action_ids.iter().copied().collect(),
            )),
        };

        Ok(Self {
            enabled: false,
            monitor,
            catalog,
            audio_tx,
            chat,
        })
    }

    /// Flip the monitoring state and report the new one. The toggle takes
    /// no arguments; any command text the host passes along is ignored.
    pub fn toggle(&mut self) -> bool {
        if self.enabled {
            self.disable();
            self.chat.print("Limit break monitor deactivated");
        } else {
            self.enabled = true;
            info!("monitoring enabled");
            self.chat.print("Limit break monitor activated");
        }
        self.enabled
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Feed one host signal through the active monitor. Does nothing
    /// while disabled, whatever the host still delivers.
    pub fn handle_signal(&mut self, signal: &HostSignal, game: &dyn GameStateAccessor) {
        if !self.enabled {
            return;
        }

        if let Some(request) = self.monitor.handle_signal(signal, game, self.chat.as_ref()) {
            self.queue_sound(request);
        }
    }

    fn queue_sound(&self, request: PlayRequest) {
        let file = self.catalog.pick(&mut rand::rng()).to_string();
        debug!(?request, file, "trigger fired");

        // Fire-and-forget: a full or closed queue drops the clip, never
        // stalls the frame that produced it.
        if let Err(err) = self.audio_tx.try_send(AudioEvent::Play { file }) {
            warn!("dropping play request: {err}");
        }
    }

    fn disable(&mut self) {
        self.enabled = false;
        self.monitor.reset();
        info!("monitoring disabled");
    }
}

impl Drop for MonitorService {
    fn drop(&mut self) {
        // Shutdown always lands in the disabled state; the host adapter
        // releases its event subscriptions alongside.
        if self.enabled {
            self.disable();
        }
    }
}
