//! Error type shared by the scanning, rendering and persistence layers.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a single operation.
///
/// Per-entry problems during a scan or a combine pass never show up here;
/// they are logged and the affected entry is skipped.
#[derive(Debug, Error)]
pub enum Error {
    /// The project root could not be listed.
    #[error("{}: cannot read project root", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The project root exists but is not a directory.
    #[error("{}: Not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// A path given relative to a project lies outside its root.
    #[error("{}: not inside the project root", .0.display())]
    OutsideRoot(PathBuf),

    /// Reading or writing a named file failed.
    #[error("{}: I/O error", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown extension category: {0}")]
    UnknownCategory(String),

    #[error("unknown preset: {0} (expected default, godot, unity or node)")]
    UnknownPreset(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
