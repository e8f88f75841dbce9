//! `orderflow-events` — synchronous publish/subscribe mechanics.
//!
//! Channels are plain in-process objects: no queue, no background task, no
//! async. Business meaning lives in the crates that own the channels.

pub mod channel;
pub mod error;
pub mod listener;

pub use channel::EventChannel;
pub use error::{BoxError, DispatchError};
pub use listener::{Listener, ListenerResult};
