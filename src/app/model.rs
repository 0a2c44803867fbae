use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::audio::AudioBackend;
use crate::browse::{Browser, Picked};
use crate::config::Settings;
use crate::input::Intent;
use crate::library;
use crate::playback::PlaybackController;
use crate::playlist::Direction;
use crate::tags::TagCache;

/// How long a transient status message stays on screen.
const MESSAGE_TTL: Duration = Duration::from_secs(4);

pub struct App<B: AudioBackend> {
    pub controller: PlaybackController<B>,
    pub tags: TagCache,
    /// List cursor; follows the playing track on advance.
    pub selected: usize,
    pub keys_panel: bool,
    /// `Some` while the folder browser is open.
    pub browser: Option<Browser>,
    pub current_dir: Option<PathBuf>,
    message: Option<(String, Instant)>,
}

impl<B: AudioBackend> App<B> {
    pub fn new(controller: PlaybackController<B>) -> Self {
        Self {
            controller,
            tags: TagCache::new(),
            selected: 0,
            keys_panel: false,
            browser: None,
            current_dir: None,
            message: None,
        }
    }

    /// Transient status message, if one is active.
    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().map(|(m, _)| m.as_str())
    }

    pub fn set_message(&mut self, text: impl Into<String>) {
        self.message = Some((text.into(), Instant::now() + MESSAGE_TTL));
    }

    pub(crate) fn expire_message_at(&mut self, now: Instant) {
        if let Some((_, deadline)) = self.message {
            if now >= deadline {
                self.message = None;
            }
        }
    }

    fn report<E: Display>(&mut self, result: Result<(), E>) {
        if let Err(e) = result {
            self.set_message(e.to_string());
        }
    }

    /// Apply one intent. `Quit` is handled by the event loop and never
    /// reaches this point.
    pub fn dispatch(&mut self, intent: Intent, settings: &Settings) {
        if self.browser.is_some() {
            self.dispatch_browse(intent, settings);
            return;
        }

        match intent {
            Intent::MoveUp => {
                self.selected = self.selected.saturating_sub(1);
            }
            Intent::MoveDown => {
                let len = self.controller.playlist().len();
                if len > 0 {
                    self.selected = (self.selected + 1).min(len - 1);
                }
            }
            Intent::Confirm => {
                let result = self.controller.play_index(self.selected);
                self.report(result);
                self.follow_current();
            }
            Intent::TogglePause => self.controller.toggle_pause(),
            Intent::Stop => self.controller.stop(),
            Intent::SeekBack => {
                let step = settings.controls.seek_seconds as i64;
                let result = self.controller.seek_by(-step);
                self.report(result);
            }
            Intent::SeekForward => {
                let step = settings.controls.seek_seconds as i64;
                let result = self.controller.seek_by(step);
                self.report(result);
            }
            Intent::Next => {
                let result = self.controller.advance(Direction::Next);
                self.report(result);
                self.follow_current();
            }
            Intent::Previous => {
                let result = self.controller.advance(Direction::Previous);
                self.report(result);
                self.follow_current();
            }
            Intent::ToggleRepeat => self.controller.cycle_repeat(),
            Intent::ToggleShuffle => self.controller.toggle_shuffle(),
            Intent::VolumeUp => self.controller.change_volume(settings.controls.volume_step),
            Intent::VolumeDown => self.controller.change_volume(-settings.controls.volume_step),
            Intent::ToggleKeysPanel => self.keys_panel = !self.keys_panel,
            Intent::Browse => self.open_browser(settings),
            Intent::BrowseUpDir | Intent::Quit => {}
        }
    }

    fn dispatch_browse(&mut self, intent: Intent, settings: &Settings) {
        let extensions = settings.library.extensions.clone();
        let Some(browser) = self.browser.as_mut() else {
            return;
        };

        match intent {
            Intent::MoveUp => browser.move_up(),
            Intent::MoveDown => browser.move_down(),
            Intent::BrowseUpDir => {
                let result = browser.ascend(&extensions);
                self.report(result);
            }
            Intent::Confirm => match browser.confirm(&extensions) {
                Ok(Picked::File(path)) => self.load_picked_file(path, settings),
                Ok(Picked::Descended) | Ok(Picked::Nothing) => {}
                Err(e) => self.set_message(e.to_string()),
            },
            // A second `b` cancels browsing.
            Intent::Browse => self.browser = None,
            _ => {}
        }
    }

    fn open_browser(&mut self, settings: &Settings) {
        let start = self
            .current_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        match Browser::open(&start, &settings.library.extensions) {
            Ok(browser) => self.browser = Some(browser),
            Err(e) => self.set_message(e.to_string()),
        }
    }

    /// A file was picked in the browser: reload the playlist from its
    /// containing folder and start playing the picked track, so next and
    /// previous keep moving through its neighbors.
    fn load_picked_file(&mut self, file: PathBuf, settings: &Settings) {
        let dir = file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("/"));

        let tracks = library::scan(&dir, &settings.library);
        let start = tracks.iter().position(|t| t.path == file).unwrap_or(0);

        self.controller.replace_tracks(tracks);
        self.browser = None;
        self.current_dir = Some(dir);
        self.selected = start;

        let result = self.controller.play_index(start);
        self.report(result);
    }

    /// Once-per-tick bookkeeping: let the controller detect end-of-track,
    /// follow an auto-advance with the cursor, expire stale messages.
    pub fn tick(&mut self) {
        let before = self.controller.playlist().current();
        let result = self.controller.tick();
        self.report(result);

        let after = self.controller.playlist().current();
        if after != before {
            self.follow_current();
        }

        self.expire_message_at(Instant::now());
    }

    /// Tag panel lines for the playing track, falling back to the selection.
    pub fn current_tag_lines(&mut self) -> Vec<String> {
        let path = self
            .controller
            .current_track()
            .map(|t| t.path.clone())
            .or_else(|| {
                self.controller
                    .playlist()
                    .tracks()
                    .get(self.selected)
                    .map(|t| t.path.clone())
            });

        match path {
            Some(p) => self.tags.summary(&p),
            None => Vec::new(),
        }
    }

    fn follow_current(&mut self) {
        if let Some(i) = self.controller.playlist().current() {
            self.selected = i;
        }
    }
}
