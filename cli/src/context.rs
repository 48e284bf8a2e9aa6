//! Shared state for the CLI harness.
//!
//! This is a lightweight container standing in for the game client: it
//! owns the event bus, the simulated game state, and the monitor service,
//! and manages the service's one host-signal subscription.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::warn;

use lbchime_core::config::{AppConfigExt, bundled_sounds_dir};
use lbchime_core::{
    AudioError, AudioService, ChatSink, EventBus, HandlerId, MonitorService, SoundResolver,
    audio_channel,
};
use lbchime_types::AppConfig;

use crate::sim::SimGameState;

/// Chat sink that prints to the terminal, standing in for the client's
/// chat log.
struct TerminalChat;

impl ChatSink for TerminalChat {
    fn print(&self, message: &str) {
        println!("[chat] {message}");
    }

    fn print_error(&self, message: &str) {
        eprintln!("[chat] error: {message}");
    }
}

pub struct CliContext {
    pub config: AppConfig,
    pub service: Rc<RefCell<MonitorService>>,
    pub game: Rc<RefCell<SimGameState>>,
    pub bus: EventBus,
    subscription: Option<HandlerId>,
    /// Keeps the playback service alive for the session
    pub audio_task: JoinHandle<()>,
}

impl CliContext {
    /// Wire up config, playback service, and monitor service. Fails on an
    /// empty sound catalog. Must be called from within a tokio runtime.
    pub fn new() -> Result<Self, AudioError> {
        let config = match AppConfig::try_load() {
            Ok(config) => config,
            Err(err) => {
                warn!("{err}, using defaults");
                AppConfig::default()
            }
        };

        let chat: Arc<dyn ChatSink> = Arc::new(TerminalChat);
        let (audio_tx, audio_rx) = audio_channel();
        let resolver = SoundResolver::new(config.user_sounds_dir(), bundled_sounds_dir());
        let settings = Arc::new(RwLock::new(config.audio.clone()));
        let audio_task = tokio::spawn(
            AudioService::new(audio_rx, settings, resolver, Arc::clone(&chat)).run(),
        );

        let service = MonitorService::new(&config, audio_tx, chat)?;

        Ok(Self {
            config,
            service: Rc::new(RefCell::new(service)),
            game: Rc::new(RefCell::new(SimGameState::default())),
            bus: EventBus::new(),
            subscription: None,
            audio_task,
        })
    }

    /// Subscribe the monitor service to host signals. Idempotent.
    pub fn attach(&mut self) {
        if self.subscription.is_some() {
            return;
        }
        let service = Rc::clone(&self.service);
        let game = Rc::clone(&self.game);
        self.subscription = Some(self.bus.subscribe(move |signal| {
            service.borrow_mut().handle_signal(signal, &*game.borrow());
        }));
    }

    /// Drop the host-signal subscription. No-op when not attached.
    pub fn detach(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.bus.unsubscribe(id);
        }
    }
}
