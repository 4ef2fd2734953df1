//! Parser of `user-dirs.dirs`, as written by `xdg-user-dirs-update`.
//!
//! The file is a list of shell assignments:
//!
//! ```text
//! # Comments start with a hash.
//! XDG_DESKTOP_DIR="$HOME/Desktop"
//! XDG_DOWNLOAD_DIR="/mnt/storage/downloads"
//! ```
//!
//! Values are either absolute, or relative to `$HOME`. Anything else is skipped.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

/// Name of the file, looked up in `$XDG_CONFIG_HOME`.
pub const FILE_NAME: &str = "user-dirs.dirs";

/// Read and parse the file at `path`. Missing and unreadable files yield no entries.
pub(crate) fn load(path: &Path, home: &Path) -> HashMap<String, PathBuf> {
    match fs::read_to_string(path) {
        Ok(contents) => parse(&contents, home),
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "cannot read user directories");
            }
            HashMap::new()
        }
    }
}

pub(crate) fn parse(contents: &str, home: &Path) -> HashMap<String, PathBuf> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            let path = expand(unquote(value.trim()), home)?;
            Some((key.to_owned(), path))
        })
        .collect()
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(value)
}

fn expand(value: &str, home: &Path) -> Option<PathBuf> {
    if let Some(rest) = value.strip_prefix("$HOME") {
        if rest.is_empty() {
            return Some(home.to_path_buf());
        }
        // `$HOMEDIR/...` names some other variable.
        let relative = rest.strip_prefix('/')?.trim_start_matches('/');
        return Some(if relative.is_empty() {
            home.to_path_buf()
        } else {
            home.join(relative)
        });
    }
    let path = Path::new(value);
    path.is_absolute().then(|| path.to_path_buf())
}
