//! Track model and filesystem scanning.
//!
//! A `Track` is immutable once it lands in a playlist; scanning walks a
//! folder with `walkdir` and probes titles/durations with `lofty`.

mod model;
mod scan;

pub use model::Track;
pub use scan::{scan, single_track};

pub(crate) use scan::is_audio_file;
