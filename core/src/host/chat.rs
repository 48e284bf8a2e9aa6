//! Diagnostic/chat output channel.

/// Fire-and-forget text output to the player. Implementations must never
/// fail back into the caller; a dropped message is acceptable, a panic is
/// not. `Send + Sync` because the audio service reports playback faults
/// from its own task.
pub trait ChatSink: Send + Sync {
    fn print(&self, message: &str);
    fn print_error(&self, message: &str);
}

/// Sink that discards everything. Useful for embedding without a chat
/// surface and for tests that don't inspect output.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullChat;

impl ChatSink for NullChat {
    fn print(&self, _message: &str) {}
    fn print_error(&self, _message: &str) {}
}
