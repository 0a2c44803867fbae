//! UI rendering for the terminal user interface.
//!
//! `draw` is a pure function of app state: it never blocks and never
//! mutates the controller. All tag resolution happens before the frame is
//! built, so the closures here only format.

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::audio::AudioBackend;
use crate::browse::Browser;
use crate::config::Settings;
use crate::playback::Status;

/// Format a `Duration` as `MM:SS`; `--:--` when unknown.
fn format_mmss(d: Option<Duration>) -> String {
    match d {
        Some(d) => {
            let secs = d.as_secs();
            format!("{:02}:{:02}", secs / 60, secs % 60)
        }
        None => "--:--".to_string(),
    }
}

/// Textual progress bar: `[####-----]` scaled to `width` cells.
fn progress_bar(elapsed: Duration, total: Option<Duration>, width: usize) -> String {
    let inner = width.saturating_sub(2).max(1);
    let filled = match total {
        Some(total) if !total.is_zero() => {
            let ratio = elapsed.as_secs_f64() / total.as_secs_f64();
            ((ratio.clamp(0.0, 1.0)) * inner as f64) as usize
        }
        _ => 0,
    };
    format!("[{}{}]", "#".repeat(filled), "-".repeat(inner - filled))
}

fn volume_bar(volume: f32, width: usize) -> String {
    let inner = width.saturating_sub(2).max(1);
    let filled = ((volume.clamp(0.0, 1.0)) * inner as f32).round() as usize;
    let filled = filled.min(inner);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(inner - filled))
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn keys_text(seek_seconds: u64) -> String {
    [
        "Space: Play/Pause".to_string(),
        "Enter: Play selected".to_string(),
        "Up/Down: Select track".to_string(),
        format!("Left/Right: Seek {seek_seconds}s back/forward"),
        "n/p: Next/Prev track".to_string(),
        "s: Stop".to_string(),
        "r: Cycle repeat".to_string(),
        "h: Toggle shuffle".to_string(),
        "b: Browse folder".to_string(),
        "k: Toggle keys panel".to_string(),
        "+/-: Volume".to_string(),
        "q: Quit".to_string(),
    ]
    .join("\n")
}

fn footer_text(seek_seconds: u64) -> String {
    format!(
        "[space] play/pause | [enter] play selected | [n/p] next/prev | [</>] seek {seek_seconds}s \
         | [s] stop | [r] repeat | [h] shuffle | [b] browse | [k] keys | [+/-] volume | [q] quit"
    )
}

/// Render the entire UI into `frame` from a read-only view of `app`.
pub fn draw<B: AudioBackend>(
    frame: &mut Frame,
    app: &App<B>,
    tag_lines: &[String],
    settings: &Settings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(1),
            Constraint::Length(8),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(settings.ui.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" cubeplayer ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    draw_status(frame, app, chunks[1]);

    // Main pane: browser when open, track list otherwise.
    match &app.browser {
        Some(browser) => draw_browser(frame, browser, chunks[2]),
        None => draw_tracks(frame, app, chunks[2]),
    }

    // Tags
    let tags = Paragraph::new(tag_lines.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" tags ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(tags, chunks[3]);

    // Footer
    let footer = Paragraph::new(footer_text(settings.controls.seek_seconds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);

    // Overlay keys popup (keeps the list visible under it).
    if app.keys_panel {
        let popup_area = centered_rect_sized(36, 14, chunks[2]);
        frame.render_widget(Clear, popup_area);
        let keys = Paragraph::new(keys_text(settings.controls.seek_seconds)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" keys (k closes) ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        );
        frame.render_widget(keys, popup_area);
    }
}

fn draw_status<B: AudioBackend>(frame: &mut Frame, app: &App<B>, area: Rect) {
    let controller = &app.controller;
    let playlist = controller.playlist();
    let status = controller.status();

    let mut lines: Vec<String> = Vec::new();

    let track_line = match controller.current_track() {
        Some(track) => format!("{} {}", status.glyph(), track.display),
        None => format!("{} {}", status.glyph(), status.label()),
    };
    lines.push(track_line);

    let total = controller.current_track().and_then(|t| t.duration);
    let elapsed = if status == Status::Playing || status == Status::Paused {
        Some(controller.position())
    } else {
        None
    };
    lines.push(format!(
        "{} / {}  {}",
        format_mmss(elapsed),
        format_mmss(total),
        progress_bar(elapsed.unwrap_or(Duration::ZERO), total, 24),
    ));

    lines.push(format!(
        "Repeat: {}  Shuffle: {}  Vol: {:3.0}% {}",
        playlist.repeat().label(),
        if playlist.shuffle() { "ON" } else { "OFF" },
        controller.volume() * 100.0,
        volume_bar(controller.volume(), 12),
    ));

    if let Some(msg) = app.message() {
        lines.push(format!("! {msg}"));
    } else if let Some(dir) = &app.current_dir {
        lines.push(format!("Dir: {}", dir.display()));
    }

    let status_par = Paragraph::new(lines.join("\n"))
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, area);
}

fn draw_tracks<B: AudioBackend>(frame: &mut Frame, app: &App<B>, area: Rect) {
    let playlist = app.controller.playlist();
    let current = playlist.current();

    let items: Vec<ListItem> = playlist
        .tracks()
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let marker = if Some(i) == current { "> " } else { "  " };
            ListItem::new(format!("{}{:02}. {}", marker, i + 1, track.display))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" tracks "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("* ");

    let mut state = ListState::default();
    if !playlist.is_empty() {
        state.select(Some(app.selected.min(playlist.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_browser(frame: &mut Frame, browser: &Browser, area: Rect) {
    let items: Vec<ListItem> = browser
        .entries()
        .iter()
        .map(|entry| {
            let suffix = if entry.is_dir { "/" } else { "" };
            ListItem::new(format!("{}{}", entry.name, suffix))
        })
        .collect();

    let title = format!(" browse: {} ", browser.dir().display());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !browser.entries().is_empty() {
        state.select(Some(browser.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}
