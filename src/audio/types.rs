use std::path::PathBuf;

use thiserror::Error;

/// Why a track could not be loaded. All variants are recoverable: the
/// controller drops back to idle and the loop keeps running.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },
    #[error("unsupported or corrupt audio: {}", path.display())]
    Unsupported { path: PathBuf },
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source: err },
        }
    }
}

/// A seek the backend refused. Position is left unchanged by contract.
#[derive(Debug, Error)]
pub enum SeekError {
    #[error("nothing is loaded to seek in")]
    NothingLoaded,
    #[error("seek rejected: {0}")]
    Rejected(String),
}
