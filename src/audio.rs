//! Audio backend seam.
//!
//! `AudioBackend` is the synchronous command interface the playback
//! controller drives; `RodioBackend` is the production adapter over rodio.
//! Rodio mixes on its own thread, but every call into it happens from the
//! event-loop thread.

mod backend;
mod output;
mod types;

pub use backend::AudioBackend;
pub use output::RodioBackend;
pub use types::{LoadError, SeekError};

#[cfg(test)]
mod fake;
#[cfg(test)]
pub use fake::{FakeBackend, FakeHandle};
