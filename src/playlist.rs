//! Ordered track list with a current-index cursor, repeat modes and a
//! shuffle order.
//!
//! The playlist never talks to the audio backend; `PlaybackController`
//! drives all mutations and decides when a computed step actually plays.

use rand::seq::SliceRandom;

use crate::library::Track;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RepeatMode {
    /// Stop at the end of the list.
    Off,
    /// Wrap around to the other end of the list.
    All,
    /// Restart the current track when it ends.
    One,
}

impl Default for RepeatMode {
    fn default() -> Self {
        Self::Off
    }
}

impl RepeatMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::All => "All",
            Self::One => "One",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

pub struct Playlist {
    tracks: Vec<Track>,
    current: Option<usize>,
    repeat: RepeatMode,
    shuffle: bool,
    shuffle_order: Vec<usize>,
}

impl Playlist {
    pub fn from_tracks(tracks: Vec<Track>) -> Self {
        let shuffle_order = (0..tracks.len()).collect();
        Self {
            tracks,
            current: None,
            repeat: RepeatMode::default(),
            shuffle: false,
            shuffle_order,
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current.and_then(|i| self.tracks.get(i))
    }

    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    #[cfg(test)]
    pub fn shuffle_order(&self) -> &[usize] {
        &self.shuffle_order
    }

    /// Set the cursor directly; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.tracks.len() {
            self.current = Some(index);
        }
    }

    pub fn clear_current(&mut self) {
        self.current = None;
    }

    pub fn set_repeat(&mut self, mode: RepeatMode) {
        self.repeat = mode;
    }

    pub fn cycle_repeat(&mut self) {
        self.repeat = match self.repeat {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        };
    }

    /// Flip shuffle; turning it on draws a fresh permutation with the
    /// current track pinned to the front (it counts as already played).
    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
        if self.shuffle {
            self.regenerate_order();
        }
    }

    /// Swap the track list out wholesale (folder browse). Keeps repeat and
    /// shuffle settings, clears the cursor, redraws the shuffle order.
    pub fn replace_tracks(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
        self.current = None;
        self.shuffle_order = (0..self.tracks.len()).collect();
        if self.shuffle {
            self.regenerate_order();
        }
    }

    fn regenerate_order(&mut self) {
        let mut order: Vec<usize> = (0..self.tracks.len()).collect();
        order.shuffle(&mut rand::rng());
        if let Some(cur) = self.current {
            if let Some(pos) = order.iter().position(|&i| i == cur) {
                order.remove(pos);
                order.insert(0, cur);
            }
        }
        self.shuffle_order = order;
    }

    /// Compute the index a next/previous step would land on, without moving
    /// the cursor. Wraps only when repeat is `All`; `None` means the list is
    /// exhausted in that direction (or empty).
    pub fn step(&self, direction: Direction) -> Option<usize> {
        if self.tracks.is_empty() {
            return None;
        }

        let order: Vec<usize> = if self.shuffle {
            self.shuffle_order.clone()
        } else {
            (0..self.tracks.len()).collect()
        };

        let pos = match self.current {
            Some(cur) => match order.iter().position(|&i| i == cur) {
                Some(p) => p,
                None => return Some(order[0]),
            },
            None => return Some(order[0]),
        };

        let len = order.len();
        let next_pos = match direction {
            Direction::Next => {
                if pos + 1 < len {
                    Some(pos + 1)
                } else if self.repeat == RepeatMode::All {
                    Some(0)
                } else {
                    None
                }
            }
            Direction::Previous => {
                if pos > 0 {
                    Some(pos - 1)
                } else if self.repeat == RepeatMode::All {
                    Some(len - 1)
                } else {
                    None
                }
            }
        };

        next_pos.map(|p| order[p])
    }
}
