//! Memoized tag lookup for the tags panel.
//!
//! Reads happen at most once per path: failures are cached as a sentinel so
//! a corrupt file does not get re-probed on every redraw tick.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use lofty::prelude::{Accessor, TaggedFileExt};
use lofty::probe::Probe;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("tags unavailable: {0}")]
pub struct TagError(String);

#[derive(Debug, Clone, PartialEq, Eq)]
enum TagEntry {
    Available(Vec<(String, String)>),
    Unavailable,
}

#[derive(Default)]
pub struct TagCache {
    entries: HashMap<PathBuf, TagEntry>,
}

impl TagCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display lines for the tags panel, reading and caching on first use.
    pub fn summary(&mut self, path: &Path) -> Vec<String> {
        match self.entry_with(path, read_tags) {
            TagEntry::Available(pairs) => pairs
                .iter()
                .map(|(k, v)| format!("{k}: {v}"))
                .collect(),
            TagEntry::Unavailable => vec!["Tags unavailable".to_string()],
        }
    }

    fn entry_with<F>(&mut self, path: &Path, read: F) -> &TagEntry
    where
        F: FnOnce(&Path) -> Result<Vec<(String, String)>, TagError>,
    {
        self.entries
            .entry(path.to_path_buf())
            .or_insert_with(|| match read(path) {
                Ok(pairs) => TagEntry::Available(pairs),
                Err(_) => TagEntry::Unavailable,
            })
    }
}

fn read_tags(path: &Path) -> Result<Vec<(String, String)>, TagError> {
    let tagged = Probe::open(path)
        .and_then(|p| p.read())
        .map_err(|e| TagError(e.to_string()))?;

    let tag = tagged
        .primary_tag()
        .or_else(|| tagged.first_tag())
        .ok_or_else(|| TagError("no tags present".to_string()))?;

    let text = |v: Option<std::borrow::Cow<'_, str>>| -> String {
        v.map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "unknown".to_string())
    };

    Ok(vec![
        ("Title".to_string(), text(tag.title())),
        ("Artist".to_string(), text(tag.artist())),
        ("Album".to_string(), text(tag.album())),
        (
            "Year".to_string(),
            tag.year()
                .map(|y| y.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        ),
        ("Genre".to_string(), text(tag.genre())),
        (
            "Track#".to_string(),
            tag.track()
                .map(|t| t.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        ),
    ])
}
