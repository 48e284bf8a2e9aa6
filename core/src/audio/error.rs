//! Error types for sound selection and playback

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while selecting, resolving, or playing sounds
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no sound files configured; add at least one to the sound list")]
    EmptyCatalog,

    #[error("sound file '{file}' does not exist (looked in {user:?} and {bundled:?})")]
    SoundNotFound {
        file: String,
        user: PathBuf,
        bundled: PathBuf,
    },

    #[error("no audio output device available")]
    Device(#[source] rodio::StreamError),

    #[error("failed to open sound file {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode sound file {path:?}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    #[error("failed to create playback sink")]
    Sink(#[from] rodio::PlayError),
}
