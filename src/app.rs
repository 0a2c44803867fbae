//! Application model: the single owner of player state.
//!
//! `App` holds the playback controller, tag cache and UI flags, and turns
//! normalized intents into controller calls. The renderer only ever sees it
//! as a read-only snapshot.

mod model;

pub use model::*;
