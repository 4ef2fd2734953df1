use std::path::{Component, Path, PathBuf};

use crate::{
    error::{Error, Result},
    fs::path_ext::{MkdirOptions, PathExt},
};

/// Join `relative_path` onto the first of `candidates` and create its parent directories.
///
/// Only the highest-priority candidate is used. The returned file itself is not created, and
/// missing parents are created with owner-only permissions. Root and prefix components of
/// `relative_path` are dropped, so `/app/db` is treated as `app/db`.
///
/// An empty `relative_path` names the candidate itself: the candidate directory is created and
/// returned.
///
/// # Errors
/// [`Error::NoCandidates`] if `candidates` is empty, [`Error::Io`] if the parent directory could
/// not be created.
///
/// # Examples
/// ```rust,no_run
/// # use basedir::fs::create_path;
/// # fn main() -> basedir::Result<()> {
/// let path = create_path("app/state.db", &["/home/alice/.local/state"])?;
/// assert_eq!(path.to_str(), Some("/home/alice/.local/state/app/state.db"));
/// # Ok(())
/// # }
/// ```
pub fn create_path<P: AsRef<Path>>(
    relative_path: impl AsRef<Path>,
    candidates: &[P],
) -> Result<PathBuf> {
    let relative_path = relative(relative_path.as_ref());
    let Some(base) = candidates.first() else {
        return Err(Error::NoCandidates(relative_path));
    };
    if relative_path.as_os_str().is_empty() {
        let base = base.as_ref();
        base.mkdir(MkdirOptions::WithParents)
            .map_err(|source| Error::io(base, source))?;
        return Ok(base.to_path_buf());
    }
    let path = base.as_ref().join(relative_path);
    if let Some(parent) = path.parent() {
        parent
            .mkdir(MkdirOptions::WithParents)
            .map_err(|source| Error::io(parent, source))?;
    }
    Ok(path)
}

/// Find the first of `candidates` under which `relative_path` exists.
///
/// `candidates` are visited in order. Nothing is created on disk.
///
/// # Errors
/// [`Error::NotFound`] with `relative_path` and all `candidates` if none of them matched.
///
/// # Examples
/// ```rust,no_run
/// # use basedir::fs::search_file;
/// # fn main() -> basedir::Result<()> {
/// let theme = search_file("app/theme.css", &["/home/alice/.local/share", "/usr/share"])?;
/// println!("using {}", theme.display());
/// # Ok(())
/// # }
/// ```
pub fn search_file<P: AsRef<Path>>(
    relative_path: impl AsRef<Path>,
    candidates: &[P],
) -> Result<PathBuf> {
    let relative_path = relative(relative_path.as_ref());
    candidates
        .iter()
        .map(|dir| dir.as_ref().join(&relative_path))
        .find(|path| path.is_present())
        .ok_or_else(|| Error::NotFound {
            path: relative_path,
            searched: candidates
                .iter()
                .map(|dir| dir.as_ref().to_path_buf())
                .collect(),
        })
}

fn relative(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::Prefix(_) | Component::RootDir))
        .collect()
}
