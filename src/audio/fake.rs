//! Scriptable in-memory backend for controller and app tests.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::library::Track;

use super::backend::AudioBackend;
use super::types::{LoadError, SeekError};

#[derive(Debug, Default)]
pub struct FakeState {
    pub loads: Vec<PathBuf>,
    pub seeks: Vec<Duration>,
    pub stops: u32,
    pub playing: bool,
    pub position: Duration,
    pub volume: f32,
    pub finished: bool,
    pub fail_load: bool,
    pub fail_seek: bool,
}

pub type FakeHandle = Arc<Mutex<FakeState>>;

/// Test double: records every backend call and lets tests script position,
/// end-of-track and failures through the shared handle.
pub struct FakeBackend {
    state: FakeHandle,
}

impl FakeBackend {
    pub fn new() -> (Self, FakeHandle) {
        let state: FakeHandle = Arc::new(Mutex::new(FakeState::default()));
        (
            Self {
                state: state.clone(),
            },
            state,
        )
    }
}

impl AudioBackend for FakeBackend {
    fn load(&mut self, track: &Track) -> Result<(), LoadError> {
        let mut s = self.state.lock().unwrap();
        if s.fail_load {
            return Err(LoadError::Unsupported {
                path: track.path.clone(),
            });
        }
        s.loads.push(track.path.clone());
        s.playing = false;
        s.position = Duration::ZERO;
        s.finished = false;
        Ok(())
    }

    fn play(&mut self) {
        self.state.lock().unwrap().playing = true;
    }

    fn pause(&mut self) {
        self.state.lock().unwrap().playing = false;
    }

    fn resume(&mut self) {
        self.state.lock().unwrap().playing = true;
    }

    fn stop(&mut self) {
        let mut s = self.state.lock().unwrap();
        s.stops += 1;
        s.playing = false;
        s.position = Duration::ZERO;
        s.finished = false;
    }

    fn seek_to(&mut self, position: Duration) -> Result<(), SeekError> {
        let mut s = self.state.lock().unwrap();
        if s.fail_seek {
            return Err(SeekError::Rejected("scripted rejection".into()));
        }
        s.seeks.push(position);
        s.position = position;
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) {
        self.state.lock().unwrap().volume = volume;
    }

    fn position(&self) -> Duration {
        self.state.lock().unwrap().position
    }

    fn is_finished(&self) -> bool {
        self.state.lock().unwrap().finished
    }
}
