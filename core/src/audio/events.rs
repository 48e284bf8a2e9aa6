//! Audio event types for monitor/service integration

use tokio::sync::mpsc;

/// Events that can trigger audio playback
#[derive(Debug, Clone)]
pub enum AudioEvent {
    /// Play one sound file (relative to the sounds directory)
    Play { file: String },
}

/// Sender handle for queueing audio events
pub type AudioSender = mpsc::Sender<AudioEvent>;

/// Create a new audio channel
pub fn audio_channel() -> (AudioSender, mpsc::Receiver<AudioEvent>) {
    // Buffer size of 64 should be plenty for trigger sounds
    mpsc::channel(64)
}
