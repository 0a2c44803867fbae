use std::env;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::RodioBackend;
use crate::config::{RepeatSetting, Settings};
use crate::playback::PlaybackController;
use crate::playlist::{Playlist, RepeatMode};

mod event_loop;
mod startup;

pub use startup::UsageError;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load_or_default();

    let startup = startup::resolve(env::args().nth(1), &settings)?;

    let mut playlist = Playlist::from_tracks(startup.tracks);
    playlist.set_repeat(match settings.playback.repeat {
        RepeatSetting::Off => RepeatMode::Off,
        RepeatSetting::All => RepeatMode::All,
        RepeatSetting::One => RepeatMode::One,
    });
    if settings.playback.shuffle {
        playlist.toggle_shuffle();
    }

    let backend = RodioBackend::new()?;
    let controller = PlaybackController::new(playlist, backend, settings.playback.volume);
    let mut app = App::new(controller);
    app.current_dir = Some(startup.dir);
    app.keys_panel = settings.ui.keys_panel;

    if let Some(index) = startup.start {
        if let Err(e) = app.controller.play_index(index) {
            app.set_message(e.to_string());
        }
        app.selected = app.controller.playlist().current().unwrap_or(index);
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);

    // Stop audio before the screen flips back so nothing keeps playing
    // after the prompt returns.
    app.controller.stop();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
