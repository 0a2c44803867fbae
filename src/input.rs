//! Key input: a bounded poll that yields at most one normalized intent per
//! tick, so the event loop never blocks on the keyboard.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

/// A normalized user action derived from a raw key event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Intent {
    MoveUp,
    MoveDown,
    Confirm,
    SeekBack,
    SeekForward,
    Next,
    Previous,
    Stop,
    ToggleRepeat,
    ToggleShuffle,
    Browse,
    /// Go up one directory; only meaningful while browsing.
    BrowseUpDir,
    ToggleKeysPanel,
    VolumeUp,
    VolumeDown,
    TogglePause,
    Quit,
}

/// Wait up to `timeout` for a key press and map it to an intent.
///
/// The timeout doubles as the inter-tick delay: with no input pending this
/// returns `None` after the full wait, with input it returns early.
pub fn poll_intent(timeout: Duration) -> io::Result<Option<Intent>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(map_key(key));
            }
        }
    }
    Ok(None)
}

/// Closed key table; unrecognized keys yield no intent.
pub fn map_key(key: KeyEvent) -> Option<Intent> {
    match key.code {
        KeyCode::Char(' ') => Some(Intent::TogglePause),
        KeyCode::Up => Some(Intent::MoveUp),
        KeyCode::Down => Some(Intent::MoveDown),
        KeyCode::Enter => Some(Intent::Confirm),
        KeyCode::Left => Some(Intent::SeekBack),
        KeyCode::Right => Some(Intent::SeekForward),
        KeyCode::Backspace => Some(Intent::BrowseUpDir),
        KeyCode::Char('n') => Some(Intent::Next),
        KeyCode::Char('p') => Some(Intent::Previous),
        KeyCode::Char('s') => Some(Intent::Stop),
        KeyCode::Char('r') => Some(Intent::ToggleRepeat),
        KeyCode::Char('h') => Some(Intent::ToggleShuffle),
        KeyCode::Char('b') => Some(Intent::Browse),
        KeyCode::Char('k') => Some(Intent::ToggleKeysPanel),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Intent::VolumeUp),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(Intent::VolumeDown),
        KeyCode::Char('q') => Some(Intent::Quit),
        _ => None,
    }
}
