//! Errors reported when creating or searching for paths.

use std::{io, path::PathBuf};

use thiserror::Error;

/// [`Result`](std::result::Result) with [`Error`] as the default error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors encountered by path operations.
///
/// Environment resolution never fails, so every variant comes from touching the filesystem.
#[derive(Debug, Error)]
pub enum Error {
    /// Filesystem operation on `path` failed. `source` is the error reported by the OS.
    #[error("filesystem operation on `{}` failed", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// None of `searched` directories contains `path`.
    #[error(
        "could not locate `{}` in any of the following paths: {}",
        .path.display(),
        display_list(.searched)
    )]
    NotFound { path: PathBuf, searched: Vec<PathBuf> },

    /// There was no directory to create `NoCandidates.0` in.
    #[error("no candidate directories were given for `{}`", .0.display())]
    NoCandidates(PathBuf),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Classify `self` as an [`io::ErrorKind`].
    ///
    /// [`Error::Io`] forwards the kind of the underlying error, [`Error::NotFound`] maps to
    /// [`io::ErrorKind::NotFound`] and [`Error::NoCandidates`] to [`io::ErrorKind::InvalidInput`].
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Io { source, .. } => source.kind(),
            Self::NotFound { .. } => io::ErrorKind::NotFound,
            Self::NoCandidates(_) => io::ErrorKind::InvalidInput,
        }
    }
}

fn display_list(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<Error> for io::Error {
    fn from(value: Error) -> Self {
        match value {
            Error::Io { source, .. } => source,
            other => io::Error::new(other.kind(), other),
        }
    }
}
