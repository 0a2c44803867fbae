use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::Settings;
use crate::library::{self, Track};

/// Missing or unusable command-line argument. The binary maps this to
/// exit code 2.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("usage: cubeplayer <file-or-folder>")]
    MissingArgument,
    #[error("no such file or folder: {}", .0.display())]
    BadPath(PathBuf),
}

/// What the command-line argument resolved to.
#[derive(Debug)]
pub struct Startup {
    pub tracks: Vec<Track>,
    /// Index to auto-play when the argument named a single file.
    pub start: Option<usize>,
    pub dir: PathBuf,
}

/// Turn the first CLI argument into an initial playlist.
///
/// A folder loads every audio file inside it; a file becomes a one-track
/// playlist that starts playing immediately.
pub fn resolve(arg: Option<String>, settings: &Settings) -> Result<Startup, UsageError> {
    let arg = arg.ok_or(UsageError::MissingArgument)?;
    let path = Path::new(&arg);

    if path.is_dir() {
        return Ok(Startup {
            tracks: library::scan(path, &settings.library),
            start: None,
            dir: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(UsageError::BadPath(path.to_path_buf()));
    }

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok(Startup {
        tracks: vec![library::single_track(path)],
        start: Some(0),
        dir,
    })
}
