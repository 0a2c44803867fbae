use std::time::Duration;

use thiserror::Error;

use crate::audio::{AudioBackend, LoadError, SeekError};
use crate::library::Track;
use crate::playlist::{Direction, Playlist, RepeatMode};

/// Where the state machine currently is.
///
/// `Loading` only exists inside `play_index`; by the time an operation
/// returns, the status is one of the other four.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    /// No track loaded (startup, load failure, or playlist exhausted).
    Idle,
    Loading,
    Playing,
    Paused,
    Stopped,
}

impl Status {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Idle => "-",
            Self::Loading => "...",
            Self::Playing => ">",
            Self::Paused => "||",
            Self::Stopped => "[]",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Loading => "Loading",
            Self::Playing => "Playing",
            Self::Paused => "Paused",
            Self::Stopped => "Stopped",
        }
    }
}

/// Classified, non-fatal failure of a control operation.
#[derive(Debug, Error)]
pub enum ControlError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Seek(#[from] SeekError),
}

pub struct PlaybackController<B: AudioBackend> {
    playlist: Playlist,
    backend: B,
    status: Status,
    position: Duration,
    volume: f32,
}

impl<B: AudioBackend> PlaybackController<B> {
    pub fn new(playlist: Playlist, mut backend: B, volume: f32) -> Self {
        let volume = volume.clamp(0.0, 1.0);
        backend.set_volume(volume);
        Self {
            playlist,
            backend,
            status: Status::Idle,
            position: Duration::ZERO,
            volume,
        }
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn position(&self) -> Duration {
        self.position
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.playlist.current_track()
    }

    /// Select and start the track at `index`. Out-of-range indices are
    /// ignored, matching playlist select semantics. A load failure drops the
    /// controller back to idle and reports the classified error.
    pub fn play_index(&mut self, index: usize) -> Result<(), ControlError> {
        if index >= self.playlist.len() {
            return Ok(());
        }
        self.playlist.select(index);
        self.status = Status::Loading;

        let track = match self.playlist.current_track() {
            Some(t) => t.clone(),
            None => {
                self.status = Status::Idle;
                return Ok(());
            }
        };

        match self.backend.load(&track) {
            Ok(()) => {
                self.backend.play();
                self.status = Status::Playing;
                self.position = Duration::ZERO;
                Ok(())
            }
            Err(e) => {
                // Never leave the status claiming playback the backend refused.
                self.playlist.clear_current();
                self.status = Status::Idle;
                self.position = Duration::ZERO;
                Err(e.into())
            }
        }
    }

    /// Playing -> Paused, Paused -> Playing; no-op in every other state.
    pub fn toggle_pause(&mut self) {
        match self.status {
            Status::Playing => {
                self.position = self.backend.position();
                self.backend.pause();
                self.status = Status::Paused;
            }
            Status::Paused => {
                self.backend.resume();
                self.status = Status::Playing;
            }
            _ => {}
        }
    }

    pub fn stop(&mut self) {
        self.backend.stop();
        self.status = Status::Stopped;
        self.position = Duration::ZERO;
    }

    /// Seek by a signed number of seconds, clamped to `[0, duration]`.
    /// Reaching or passing the end behaves exactly like natural end-of-track.
    pub fn seek_by(&mut self, delta_seconds: i64) -> Result<(), ControlError> {
        if !matches!(self.status, Status::Playing | Status::Paused) {
            return Ok(());
        }

        let current = self.backend.position();
        let target = if delta_seconds < 0 {
            current.saturating_sub(Duration::from_secs(delta_seconds.unsigned_abs()))
        } else {
            current + Duration::from_secs(delta_seconds as u64)
        };

        let duration = self.playlist.current_track().and_then(|t| t.duration);
        if let Some(total) = duration {
            if target >= total {
                return self.handle_track_end();
            }
        }

        // On rejection the backend leaves its position untouched, so ours
        // stays where it was too.
        self.backend.seek_to(target)?;
        self.position = target;
        Ok(())
    }

    /// Manual next/previous. Exhaustion of the playlist (repeat permitting
    /// no wrap) lands in idle after a final backend stop.
    pub fn advance(&mut self, direction: Direction) -> Result<(), ControlError> {
        match self.playlist.step(direction) {
            Some(index) => self.play_index(index),
            None => {
                self.to_idle();
                Ok(())
            }
        }
    }

    pub fn change_volume(&mut self, delta: f32) {
        self.volume = (self.volume + delta).clamp(0.0, 1.0);
        self.backend.set_volume(self.volume);
    }

    pub fn cycle_repeat(&mut self) {
        self.playlist.cycle_repeat();
    }

    pub fn toggle_shuffle(&mut self) {
        self.playlist.toggle_shuffle();
    }

    /// Swap in a freshly scanned track list (folder browse). Playback stops;
    /// the caller decides what to play next.
    pub fn replace_tracks(&mut self, tracks: Vec<Track>) {
        self.backend.stop();
        self.status = Status::Idle;
        self.position = Duration::ZERO;
        self.playlist.replace_tracks(tracks);
    }

    /// Once-per-tick heartbeat: refresh position from the backend and detect
    /// natural end-of-track.
    pub fn tick(&mut self) -> Result<(), ControlError> {
        if self.status == Status::Playing {
            self.position = self.backend.position();
            if self.backend.is_finished() {
                return self.handle_track_end();
            }
        }
        Ok(())
    }

    /// End-of-track policy: repeat-one restarts the same track (overriding
    /// shuffle for the current track only), everything else advances.
    fn handle_track_end(&mut self) -> Result<(), ControlError> {
        if self.playlist.repeat() == RepeatMode::One {
            if let Some(current) = self.playlist.current() {
                return self.play_index(current);
            }
        }
        self.advance(Direction::Next)
    }

    fn to_idle(&mut self) {
        self.backend.stop();
        self.playlist.clear_current();
        self.status = Status::Idle;
        self.position = Duration::ZERO;
    }
}
