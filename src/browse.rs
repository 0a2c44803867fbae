//! Thin directory-listing wrapper behind the `b` key.
//!
//! Lists subdirectories and supported audio files, directories first. Picking
//! a file hands it back to the app, which reloads the playlist from the
//! containing folder.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::library::is_audio_file;

#[derive(Debug, Clone)]
pub struct BrowseEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

pub struct Browser {
    dir: PathBuf,
    entries: Vec<BrowseEntry>,
    selected: usize,
}

/// What confirming the selected entry resolved to.
pub enum Picked {
    /// Descended into a directory (or went up via `..`).
    Descended,
    /// An audio file was chosen.
    File(PathBuf),
    Nothing,
}

impl Browser {
    pub fn open(dir: &Path, extensions: &[String]) -> io::Result<Self> {
        let dir = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
        let entries = list_entries(&dir, extensions)?;
        Ok(Self {
            dir,
            entries,
            selected: 0,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entries(&self) -> &[BrowseEntry] {
        &self.entries
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if !self.entries.is_empty() {
            self.selected = (self.selected + 1).min(self.entries.len() - 1);
        }
    }

    /// Confirm the selected entry: descend into directories, hand files back.
    pub fn confirm(&mut self, extensions: &[String]) -> io::Result<Picked> {
        let Some(entry) = self.entries.get(self.selected).cloned() else {
            return Ok(Picked::Nothing);
        };

        if entry.is_dir {
            self.change_dir(entry.path, extensions)?;
            Ok(Picked::Descended)
        } else {
            Ok(Picked::File(entry.path))
        }
    }

    /// Go up one directory; a no-op at the filesystem root.
    pub fn ascend(&mut self, extensions: &[String]) -> io::Result<()> {
        if let Some(parent) = self.dir.parent().map(Path::to_path_buf) {
            self.change_dir(parent, extensions)?;
        }
        Ok(())
    }

    fn change_dir(&mut self, dir: PathBuf, extensions: &[String]) -> io::Result<()> {
        self.entries = list_entries(&dir, extensions)?;
        self.dir = dir;
        self.selected = 0;
        Ok(())
    }
}

fn list_entries(dir: &Path, extensions: &[String]) -> io::Result<Vec<BrowseEntry>> {
    let mut entries: Vec<BrowseEntry> = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|s| s.to_str()).map(String::from) else {
            continue;
        };

        if path.is_dir() {
            entries.push(BrowseEntry {
                name,
                path,
                is_dir: true,
            });
        } else if is_audio_file(&path, extensions) {
            entries.push(BrowseEntry {
                name,
                path,
                is_dir: false,
            });
        }
    }

    entries.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });

    if let Some(parent) = dir.parent() {
        entries.insert(
            0,
            BrowseEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_dir: true,
            },
        );
    }

    Ok(entries)
}
