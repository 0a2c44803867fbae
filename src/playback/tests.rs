use std::path::PathBuf;
use std::time::Duration;

use crate::audio::{FakeBackend, FakeHandle};
use crate::library::Track;
use crate::playlist::{Direction, Playlist, RepeatMode};

use super::{ControlError, PlaybackController, Status};

fn track(name: &str) -> Track {
    Track {
        path: PathBuf::from(format!("/music/{name}")),
        title: name.into(),
        artist: None,
        duration: Some(Duration::from_secs(20)),
        display: name.into(),
    }
}

fn controller(
    names: &[&str],
    repeat: RepeatMode,
) -> (PlaybackController<FakeBackend>, FakeHandle) {
    let mut playlist = Playlist::from_tracks(names.iter().map(|n| track(n)).collect());
    playlist.set_repeat(repeat);
    let (backend, handle) = FakeBackend::new();
    (PlaybackController::new(playlist, backend, 0.7), handle)
}

fn loads(handle: &FakeHandle) -> Vec<String> {
    handle
        .lock()
        .unwrap()
        .loads
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn play_index_loads_and_plays() {
    let (mut c, handle) = controller(&["a.mp3", "b.mp3"], RepeatMode::Off);

    c.play_index(1).unwrap();
    assert_eq!(c.status(), Status::Playing);
    assert_eq!(c.playlist().current(), Some(1));
    assert_eq!(loads(&handle), vec!["b.mp3"]);
    assert!(handle.lock().unwrap().playing);
}

#[test]
fn play_index_out_of_range_is_a_no_op() {
    let (mut c, handle) = controller(&["a.mp3"], RepeatMode::Off);
    c.play_index(5).unwrap();
    assert_eq!(c.status(), Status::Idle);
    assert!(loads(&handle).is_empty());
}

#[test]
fn load_failure_reverts_to_idle_without_claiming_playback() {
    let (mut c, handle) = controller(&["a.mp3"], RepeatMode::Off);
    handle.lock().unwrap().fail_load = true;

    let err = c.play_index(0).unwrap_err();
    assert!(matches!(err, ControlError::Load(_)));
    assert_eq!(c.status(), Status::Idle);
    assert_eq!(c.playlist().current(), None);
    assert!(!handle.lock().unwrap().playing);
}

#[test]
fn toggle_pause_is_its_own_inverse_and_position_never_decreases() {
    let (mut c, handle) = controller(&["a.mp3"], RepeatMode::Off);
    c.play_index(0).unwrap();

    handle.lock().unwrap().position = Duration::from_secs(7);
    c.tick().unwrap();
    let before = c.position();

    c.toggle_pause();
    assert_eq!(c.status(), Status::Paused);
    assert!(c.position() >= before);

    c.toggle_pause();
    assert_eq!(c.status(), Status::Playing);
    handle.lock().unwrap().position = Duration::from_secs(8);
    c.tick().unwrap();
    assert!(c.position() >= before);
}

#[test]
fn toggle_pause_outside_playing_or_paused_does_nothing() {
    let (mut c, handle) = controller(&["a.mp3"], RepeatMode::Off);
    c.toggle_pause();
    assert_eq!(c.status(), Status::Idle);

    c.play_index(0).unwrap();
    c.stop();
    c.toggle_pause();
    assert_eq!(c.status(), Status::Stopped);
    assert!(!handle.lock().unwrap().playing);
}

#[test]
fn stop_resets_position() {
    let (mut c, handle) = controller(&["a.mp3"], RepeatMode::Off);
    c.play_index(0).unwrap();
    handle.lock().unwrap().position = Duration::from_secs(5);
    c.tick().unwrap();

    c.stop();
    assert_eq!(c.status(), Status::Stopped);
    assert_eq!(c.position(), Duration::ZERO);
    assert_eq!(handle.lock().unwrap().stops, 1);
}

#[test]
fn seek_clamps_to_track_start() {
    let (mut c, handle) = controller(&["a.mp3"], RepeatMode::Off);
    c.play_index(0).unwrap();
    handle.lock().unwrap().position = Duration::from_secs(3);

    c.seek_by(-30).unwrap();
    assert_eq!(c.position(), Duration::ZERO);
    assert_eq!(handle.lock().unwrap().seeks, vec![Duration::ZERO]);
}

#[test]
fn seek_forward_moves_within_the_track() {
    let (mut c, handle) = controller(&["a.mp3"], RepeatMode::Off);
    c.play_index(0).unwrap();
    handle.lock().unwrap().position = Duration::from_secs(3);

    c.seek_by(5).unwrap();
    assert_eq!(c.position(), Duration::from_secs(8));
}

#[test]
fn seek_past_end_with_repeat_off_acts_like_end_of_track() {
    let (mut c, handle) = controller(&["a.mp3", "b.mp3"], RepeatMode::Off);
    c.play_index(0).unwrap();
    handle.lock().unwrap().position = Duration::from_secs(18);

    // Track duration is 20s; +5s lands past the end, so the controller
    // advances instead of seeking.
    c.seek_by(5).unwrap();
    assert_eq!(c.playlist().current(), Some(1));
    assert_eq!(c.status(), Status::Playing);
    assert_eq!(loads(&handle), vec!["a.mp3", "b.mp3"]);
    assert!(handle.lock().unwrap().seeks.is_empty());
}

#[test]
fn seek_past_end_on_last_track_without_repeat_goes_idle() {
    let (mut c, handle) = controller(&["a.mp3"], RepeatMode::Off);
    c.play_index(0).unwrap();
    handle.lock().unwrap().position = Duration::from_secs(19);

    c.seek_by(10).unwrap();
    assert_eq!(c.status(), Status::Idle);
    assert_eq!(c.playlist().current(), None);
}

#[test]
fn rejected_seek_leaves_position_unchanged() {
    let (mut c, handle) = controller(&["a.mp3"], RepeatMode::Off);
    c.play_index(0).unwrap();
    handle.lock().unwrap().position = Duration::from_secs(4);
    c.tick().unwrap();
    handle.lock().unwrap().fail_seek = true;

    let err = c.seek_by(5).unwrap_err();
    assert!(matches!(err, ControlError::Seek(_)));
    assert_eq!(c.position(), Duration::from_secs(4));
}

#[test]
fn seek_while_stopped_is_a_no_op() {
    let (mut c, handle) = controller(&["a.mp3"], RepeatMode::Off);
    c.seek_by(5).unwrap();
    assert!(handle.lock().unwrap().seeks.is_empty());
}

#[test]
fn natural_end_advances_to_the_next_track() {
    let (mut c, handle) = controller(&["a.mp3", "b.mp3", "c.mp3"], RepeatMode::Off);
    c.play_index(0).unwrap();

    handle.lock().unwrap().finished = true;
    c.tick().unwrap();

    assert_eq!(c.playlist().current(), Some(1));
    assert_eq!(c.status(), Status::Playing);
    assert_eq!(loads(&handle), vec!["a.mp3", "b.mp3"]);
}

#[test]
fn repeat_one_restarts_the_same_track_at_end() {
    let (mut c, handle) = controller(&["a.mp3", "b.mp3", "c.mp3"], RepeatMode::One);
    c.play_index(1).unwrap();

    handle.lock().unwrap().finished = true;
    c.tick().unwrap();

    assert_eq!(c.playlist().current(), Some(1));
    assert_eq!(c.status(), Status::Playing);
    assert_eq!(loads(&handle), vec!["b.mp3", "b.mp3"]);
}

#[test]
fn single_track_end_without_repeat_goes_idle_and_stays_there() {
    let (mut c, handle) = controller(&["a.mp3"], RepeatMode::Off);
    c.play_index(0).unwrap();

    handle.lock().unwrap().finished = true;
    c.tick().unwrap();
    assert_eq!(c.status(), Status::Idle);
    assert_eq!(c.playlist().current(), None);
    assert_eq!(loads(&handle).len(), 1);

    // Further ticks must not attempt another advance.
    c.tick().unwrap();
    c.tick().unwrap();
    assert_eq!(c.status(), Status::Idle);
    assert_eq!(loads(&handle).len(), 1);
}

#[test]
fn end_with_repeat_all_wraps_to_the_first_track() {
    let (mut c, handle) = controller(&["a.mp3", "b.mp3"], RepeatMode::All);
    c.play_index(1).unwrap();

    handle.lock().unwrap().finished = true;
    c.tick().unwrap();
    assert_eq!(c.playlist().current(), Some(0));
    assert_eq!(loads(&handle), vec!["b.mp3", "a.mp3"]);
}

#[test]
fn manual_next_cycles_with_repeat_all() {
    let (mut c, _handle) = controller(&["a.mp3", "b.mp3", "c.mp3"], RepeatMode::All);
    c.play_index(0).unwrap();

    let mut visited = vec![c.playlist().current().unwrap()];
    for _ in 0..3 {
        c.advance(Direction::Next).unwrap();
        visited.push(c.playlist().current().unwrap());
    }
    assert_eq!(visited, vec![0, 1, 2, 0]);
}

#[test]
fn manual_next_past_the_end_without_repeat_goes_idle() {
    let (mut c, _handle) = controller(&["a.mp3", "b.mp3"], RepeatMode::Off);
    c.play_index(1).unwrap();
    c.advance(Direction::Next).unwrap();
    assert_eq!(c.status(), Status::Idle);
}

#[test]
fn shuffled_advances_visit_every_track_once_per_cycle() {
    let names: Vec<String> = (0..8).map(|i| format!("t{i}.mp3")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let (mut c, _handle) = controller(&refs, RepeatMode::All);
    c.play_index(0).unwrap();
    c.toggle_shuffle();

    let mut visited = vec![c.playlist().current().unwrap()];
    for _ in 0..7 {
        c.advance(Direction::Next).unwrap();
        visited.push(c.playlist().current().unwrap());
    }

    let mut sorted = visited.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..8).collect::<Vec<_>>());
}

#[test]
fn change_volume_clamps_and_reaches_the_backend() {
    let (mut c, handle) = controller(&["a.mp3"], RepeatMode::Off);
    assert!((c.volume() - 0.7).abs() < f32::EPSILON);

    c.change_volume(0.6);
    assert!((c.volume() - 1.0).abs() < f32::EPSILON);
    assert!((handle.lock().unwrap().volume - 1.0).abs() < f32::EPSILON);

    c.change_volume(-2.0);
    assert!((c.volume() - 0.0).abs() < f32::EPSILON);
    assert!((handle.lock().unwrap().volume - 0.0).abs() < f32::EPSILON);
}

#[test]
fn volume_applies_regardless_of_status() {
    let (mut c, handle) = controller(&["a.mp3"], RepeatMode::Off);
    c.change_volume(-0.2);
    assert!((handle.lock().unwrap().volume - 0.5).abs() < 1e-6);
    assert_eq!(c.status(), Status::Idle);
}

#[test]
fn replace_tracks_stops_playback_and_clears_cursor() {
    let (mut c, handle) = controller(&["a.mp3"], RepeatMode::Off);
    c.play_index(0).unwrap();

    c.replace_tracks(vec![track("x.mp3"), track("y.mp3")]);
    assert_eq!(c.status(), Status::Idle);
    assert_eq!(c.playlist().current(), None);
    assert_eq!(c.playlist().len(), 2);
    assert!(handle.lock().unwrap().stops >= 1);
}
