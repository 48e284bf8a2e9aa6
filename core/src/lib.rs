pub mod audio;
pub mod config;
pub mod host;
pub mod monitor;
pub mod service;

// Re-exports for convenience
pub use audio::{
    AudioError, AudioEvent, AudioSender, AudioService, SoundCatalog, SoundResolver, audio_channel,
};
pub use config::{AppConfigExt, ConfigError};
pub use host::{CastSnapshot, ChatSink, EventBus, GameStateAccessor, HandlerId, HostSignal, LimitGauge};
pub use monitor::{CastMonitor, GaugeMonitor, Monitor, PlayRequest};
pub use service::MonitorService;
