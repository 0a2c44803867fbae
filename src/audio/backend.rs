use std::time::Duration;

use crate::library::Track;

use super::types::{LoadError, SeekError};

/// Synchronous command interface to the playback engine.
///
/// All calls are expected to return quickly; nothing here blocks for the
/// duration of playback. The backend is the source of truth for playback
/// position while a track is running.
pub trait AudioBackend {
    /// Prepare `track` for playback, paused at the start.
    fn load(&mut self, track: &Track) -> Result<(), LoadError>;
    /// Start or restart output for the loaded track.
    fn play(&mut self);
    fn pause(&mut self);
    fn resume(&mut self);
    /// Stop output and unload the current track.
    fn stop(&mut self);
    /// Jump to an absolute position. Delta handling and clamping live in the
    /// controller; the backend only has to honor the target or reject it.
    fn seek_to(&mut self, position: Duration) -> Result<(), SeekError>;
    /// Volume in `[0.0, 1.0]`, applied to current and future tracks.
    fn set_volume(&mut self, volume: f32);
    fn position(&self) -> Duration;
    /// True once the loaded track has played to its end.
    fn is_finished(&self) -> bool;
}
