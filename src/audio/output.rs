//! Rodio-backed `AudioBackend` implementation.
//!
//! Seeking rebuilds the sink with `Source::skip_duration`, which works for
//! the common formats without requiring seekable decoders. Elapsed time is
//! tracked as accumulated-time-plus-running-stopwatch, so pausing freezes
//! the position without asking the mixer.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use crate::library::Track;

use super::backend::AudioBackend;
use super::types::{LoadError, SeekError};

pub struct RodioBackend {
    stream: OutputStream,
    sink: Option<Sink>,
    loaded: Option<PathBuf>,
    started_at: Option<Instant>,
    accumulated: Duration,
    volume: f32,
}

impl RodioBackend {
    pub fn new() -> Result<Self, rodio::StreamError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a TUI app.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            loaded: None,
            started_at: None,
            accumulated: Duration::ZERO,
            volume: 1.0,
        })
    }

    /// Create a paused sink for `path` that starts at `start_at`.
    fn create_sink_at(&self, path: &Path, start_at: Duration) -> Result<Sink, LoadError> {
        let file = File::open(path).map_err(|e| LoadError::from_io(path, e))?;

        let source = Decoder::new(BufReader::new(file))
            .map_err(|_| LoadError::Unsupported {
                path: path.to_path_buf(),
            })?
            // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
            .skip_duration(start_at);

        let sink = Sink::connect_new(self.stream.mixer());
        sink.append(source);
        sink.pause();
        sink.set_volume(self.volume);
        Ok(sink)
    }

    fn drop_sink(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
    }
}

impl AudioBackend for RodioBackend {
    fn load(&mut self, track: &Track) -> Result<(), LoadError> {
        let new_sink = self.create_sink_at(&track.path, Duration::ZERO)?;
        self.drop_sink();
        self.sink = Some(new_sink);
        self.loaded = Some(track.path.clone());
        self.started_at = None;
        self.accumulated = Duration::ZERO;
        Ok(())
    }

    fn play(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.play();
            self.started_at = Some(Instant::now());
        }
    }

    fn pause(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.pause();
            if let Some(st) = self.started_at.take() {
                self.accumulated += st.elapsed();
            }
        }
    }

    fn resume(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.play();
            self.started_at = Some(Instant::now());
        }
    }

    fn stop(&mut self) {
        self.drop_sink();
        self.loaded = None;
        self.started_at = None;
        self.accumulated = Duration::ZERO;
    }

    fn seek_to(&mut self, position: Duration) -> Result<(), SeekError> {
        let path = self.loaded.clone().ok_or(SeekError::NothingLoaded)?;
        let was_playing = self.started_at.is_some();

        // Build the replacement sink before tearing the old one down, so a
        // rejected seek leaves playback untouched.
        let new_sink = self
            .create_sink_at(&path, position)
            .map_err(|e| SeekError::Rejected(e.to_string()))?;

        self.drop_sink();
        if was_playing {
            new_sink.play();
            self.started_at = Some(Instant::now());
        } else {
            self.started_at = None;
        }
        self.sink = Some(new_sink);
        self.accumulated = position;
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(s) = self.sink.as_ref() {
            s.set_volume(volume);
        }
    }

    fn position(&self) -> Duration {
        self.accumulated + self.started_at.map_or(Duration::ZERO, |st| st.elapsed())
    }

    fn is_finished(&self) -> bool {
        self.sink.as_ref().map(|s| s.empty()).unwrap_or(false)
    }
}
