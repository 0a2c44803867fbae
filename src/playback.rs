//! Playback control state machine.
//!
//! `PlaybackController` owns the playlist and the audio backend, translates
//! control intents into backend calls, and detects natural end-of-track
//! once per tick. No error escapes its public operations unclassified.

mod controller;

pub use controller::{ControlError, PlaybackController, Status};

#[cfg(test)]
mod tests;
