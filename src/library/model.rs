use std::path::PathBuf;
use std::time::Duration;

/// A single audio file known to the player.
#[derive(Debug, Clone)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
    pub artist: Option<String>,
    pub duration: Option<Duration>,
    /// What the track list shows; derived from tags, falling back to the
    /// file stem when no usable title tag exists.
    pub display: String,
}
