use std::io::Stdout;
use std::time::Duration;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::AudioBackend;
use crate::config::Settings;
use crate::input::{self, Intent};
use crate::ui;

/// Main terminal loop: advance playback state, draw, then wait up to one
/// tick for input. `event::poll` inside `poll_intent` doubles as the
/// inter-frame delay, so an idle session redraws at the configured tick
/// rate. Returns `Ok(())` when the user quits.
pub fn run<B: AudioBackend>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    settings: &Settings,
    app: &mut App<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    let tick = Duration::from_millis(settings.ui.tick_ms);

    loop {
        app.tick();

        let tag_lines = app.current_tag_lines();
        terminal.draw(|f| ui::draw(f, app, &tag_lines, settings))?;

        match input::poll_intent(tick)? {
            Some(Intent::Quit) => return Ok(()),
            Some(intent) => app.dispatch(intent, settings),
            None => {}
        }
    }
}
