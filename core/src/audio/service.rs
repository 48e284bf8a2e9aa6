//! Audio playback service.
//!
//! Runs in a background task, receiving AudioEvents via channel. Each
//! playback is dispatched to its own detached thread; a slow or failed
//! clip can never stall the service loop, let alone the frame path that
//! queued it. Failures are reported to the chat sink and go nowhere else.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rodio::{Decoder, OutputStream, Sink};
use tokio::sync::{RwLock, mpsc};
use tracing::debug;

use lbchime_types::AudioSettings;

use crate::host::ChatSink;

use super::error::AudioError;
use super::events::AudioEvent;
use super::resolver::SoundResolver;

/// Audio service that resolves and plays trigger sounds
pub struct AudioService {
    /// Channel to receive audio events
    event_rx: mpsc::Receiver<AudioEvent>,

    /// Shared audio settings (can be updated at runtime)
    settings: Arc<RwLock<AudioSettings>>,

    resolver: SoundResolver,

    chat: Arc<dyn ChatSink>,
}

impl AudioService {
    pub fn new(
        event_rx: mpsc::Receiver<AudioEvent>,
        settings: Arc<RwLock<AudioSettings>>,
        resolver: SoundResolver,
        chat: Arc<dyn ChatSink>,
    ) -> Self {
        Self {
            event_rx,
            settings,
            resolver,
            chat,
        }
    }

    /// Run the audio service (blocking async loop)
    pub async fn run(mut self) {
        while let Some(event) = self.event_rx.recv().await {
            // Read settings and extract what we need, then drop the guard
            let (enabled, volume) = {
                let settings = self.settings.read().await;
                (settings.enabled, settings.volume)
            };

            // Master audio toggle
            if !enabled {
                continue;
            }

            match &event {
                AudioEvent::Play { file } => self.play(file, volume),
            }
        }
    }

    /// Resolve a sound file and hand it to a playback thread.
    fn play(&self, file: &str, volume: u8) {
        let path = match self.resolver.resolve(file) {
            Ok(path) => path,
            Err(err) => {
                self.chat.print_error(&err.to_string());
                return;
            }
        };

        self.chat.print(&format!("Playing: {file}"));
        debug!(?path, volume, "dispatching playback");

        let chat = Arc::clone(&self.chat);
        std::thread::spawn(move || {
            if let Err(err) = play_file(&path, volume) {
                chat.print_error(&format!("Error playing sound: {err}"));
            }
        });
    }
}

/// Decode and play one file to completion on the calling thread.
fn play_file(path: &Path, volume: u8) -> Result<(), AudioError> {
    let (_stream, stream_handle) = OutputStream::try_default().map_err(AudioError::Device)?;

    let file = File::open(path).map_err(|source| AudioError::Open {
        path: PathBuf::from(path),
        source,
    })?;
    let source = Decoder::new(BufReader::new(file)).map_err(|source| AudioError::Decode {
        path: PathBuf::from(path),
        source,
    })?;

    let sink = Sink::try_new(&stream_handle)?;
    sink.set_volume(f32::from(volume) / 100.0);
    sink.append(source);
    sink.sleep_until_end();
    Ok(())
}
