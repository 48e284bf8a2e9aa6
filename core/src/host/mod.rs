//! Narrow interfaces over everything the game client host provides.
//!
//! The monitoring logic never talks to a concrete host. Chat output, game
//! state snapshots, and event delivery all go through the traits in this
//! module so the engine can be driven by the real client, the CLI harness,
//! or a test fixture interchangeably.

pub mod bus;
pub mod chat;
pub mod signal;
pub mod snapshot;

pub use bus::{EventBus, HandlerId};
pub use chat::{ChatSink, NullChat};
pub use signal::HostSignal;
pub use snapshot::{CastSnapshot, GameStateAccessor, LimitGauge};
