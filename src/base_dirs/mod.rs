//! XDG Base Directory resolution.
//!
//! [`BaseDirectories`] holds the preferred location of each file category (the `*_home`
//! directories), along with read-only fallbacks consulted by searches. It is resolved once from
//! an [`Env`] and a [`Platform`], and never changes afterwards.
//!
//! ```rust,no_run
//! # use basedir::{BaseDirectories, Env, Platform};
//! # fn main() -> basedir::Result<()> {
//! let dirs = BaseDirectories::from_env(&Env::new(), Platform::Unix);
//!
//! // Writable locations, parent directories are created on demand.
//! let db = dirs.state_file("app/history.db")?;
//! let socket = dirs.runtime_file("app/ipc.sock")?;
//!
//! // Read-only lookups, home directory first and then the fallbacks.
//! let settings = dirs.search_config_file("app/settings.toml")?;
//! # drop((db, socket, settings));
//! # Ok(())
//! # }
//! ```

use std::{
    iter,
    path::{Path, PathBuf},
};

use crate::{
    error::Result,
    fs::{create_path, search_file},
    os::{env::Env, platform::Platform},
};

mod defaults;
mod runtime;

pub const DATA_HOME: &str = "XDG_DATA_HOME";
pub const DATA_DIRS: &str = "XDG_DATA_DIRS";
pub const CONFIG_HOME: &str = "XDG_CONFIG_HOME";
pub const CONFIG_DIRS: &str = "XDG_CONFIG_DIRS";
pub const CACHE_HOME: &str = "XDG_CACHE_HOME";
pub const RUNTIME_DIR: &str = "XDG_RUNTIME_DIR";
pub const STATE_HOME: &str = "XDG_STATE_HOME";

/// Resolved base directories.
///
/// Every `*_file` method creates missing parents of the requested path under the matching
/// `*_home` directory (never under a fallback) and returns it. Every `search_*_file` method looks
/// the path up in the home directory first, then in the fallbacks, and fails with
/// [`Error::NotFound`](crate::Error::NotFound) if none of them contains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDirectories {
    home: PathBuf,

    data_home: PathBuf,
    data: Vec<PathBuf>,
    config_home: PathBuf,
    config: Vec<PathBuf>,
    cache_home: PathBuf,
    runtime: PathBuf,
    state_home: PathBuf,

    // Non-standard directories.
    fonts: Vec<PathBuf>,
    applications: Vec<PathBuf>,
}

impl BaseDirectories {
    /// Resolve from [`Env::new`] with conventions of [`Platform::current`].
    pub fn new() -> Self {
        Self::from_env(&Env::new(), Platform::current())
    }

    /// Resolve from `env`, falling back to defaults of `platform`.
    pub fn from_env(env: &Env, platform: Platform) -> Self {
        let home = env.home_dir(platform);
        match platform {
            Platform::Unix => defaults::unix(env, home),
            Platform::MacOS => defaults::macos(env, home),
            Platform::Windows => defaults::windows(env, home),
        }
    }

    /// User's home directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Preferred location of user data files, `$XDG_DATA_HOME`.
    pub fn data_home(&self) -> &Path {
        &self.data_home
    }

    /// Data fallbacks in priority order, `$XDG_DATA_DIRS`.
    pub fn data_dirs(&self) -> &[PathBuf] {
        &self.data
    }

    /// Preferred location of user configuration files, `$XDG_CONFIG_HOME`.
    pub fn config_home(&self) -> &Path {
        &self.config_home
    }

    /// Configuration fallbacks in priority order, `$XDG_CONFIG_DIRS`.
    pub fn config_dirs(&self) -> &[PathBuf] {
        &self.config
    }

    /// Location of non-essential data, `$XDG_CACHE_HOME`.
    pub fn cache_home(&self) -> &Path {
        &self.cache_home
    }

    /// Location of sockets, pipes and other session-scoped files, `$XDG_RUNTIME_DIR`.
    pub fn runtime_dir(&self) -> &Path {
        &self.runtime
    }

    /// Location of state which should survive restarts, `$XDG_STATE_HOME`.
    pub fn state_home(&self) -> &Path {
        &self.state_home
    }

    /// Font directories in priority order. Not part of the XDG specification.
    pub fn font_dirs(&self) -> &[PathBuf] {
        &self.fonts
    }

    /// Application directories in priority order. Not part of the XDG specification.
    pub fn application_dirs(&self) -> &[PathBuf] {
        &self.applications
    }

    /// Path under [`data_home`](Self::data_home), with missing parents created.
    pub fn data_file(&self, relative_path: impl AsRef<Path>) -> Result<PathBuf> {
        create_path(relative_path, &[&self.data_home])
    }

    /// Path under [`config_home`](Self::config_home), with missing parents created.
    pub fn config_file(&self, relative_path: impl AsRef<Path>) -> Result<PathBuf> {
        create_path(relative_path, &[&self.config_home])
    }

    /// Path under [`cache_home`](Self::cache_home), with missing parents created.
    pub fn cache_file(&self, relative_path: impl AsRef<Path>) -> Result<PathBuf> {
        create_path(relative_path, &[&self.cache_home])
    }

    /// Path under [`state_home`](Self::state_home), with missing parents created.
    pub fn state_file(&self, relative_path: impl AsRef<Path>) -> Result<PathBuf> {
        create_path(relative_path, &[&self.state_home])
    }

    /// Path under [`runtime_dir`](Self::runtime_dir), with missing parents created.
    ///
    /// Unlike the other `*_file` methods, the runtime directory is vetted first.
    ///
    /// If the runtime directory exists, it is handed over to the current user (on Unix). If it
    /// exists but is not a directory, e.g. a symlink, it gets removed and created anew.
    ///
    /// The check and the following fix-up are not atomic. A process able to replace the runtime
    /// directory between them can still win the race, which is acceptable as long as its parent
    /// is not writable by others.
    pub fn runtime_file(&self, relative_path: impl AsRef<Path>) -> Result<PathBuf> {
        runtime::vet(&self.runtime)?;
        create_path(relative_path, &[&self.runtime])
    }

    /// First existing path in [`data_home`](Self::data_home), then [`data_dirs`](Self::data_dirs).
    pub fn search_data_file(&self, relative_path: impl AsRef<Path>) -> Result<PathBuf> {
        search_file(relative_path, &with_fallbacks(&self.data_home, &self.data))
    }

    /// First existing path in [`config_home`](Self::config_home), then
    /// [`config_dirs`](Self::config_dirs).
    pub fn search_config_file(&self, relative_path: impl AsRef<Path>) -> Result<PathBuf> {
        search_file(
            relative_path,
            &with_fallbacks(&self.config_home, &self.config),
        )
    }

    /// Existing path in [`cache_home`](Self::cache_home).
    pub fn search_cache_file(&self, relative_path: impl AsRef<Path>) -> Result<PathBuf> {
        search_file(relative_path, &[&self.cache_home])
    }

    /// Existing path in [`state_home`](Self::state_home).
    pub fn search_state_file(&self, relative_path: impl AsRef<Path>) -> Result<PathBuf> {
        search_file(relative_path, &[&self.state_home])
    }

    /// Existing path in [`runtime_dir`](Self::runtime_dir). The directory is not vetted, nothing
    /// is modified on disk.
    pub fn search_runtime_file(&self, relative_path: impl AsRef<Path>) -> Result<PathBuf> {
        search_file(relative_path, &[&self.runtime])
    }
}

impl Default for BaseDirectories {
    fn default() -> Self {
        Self::new()
    }
}

fn with_fallbacks<'a>(home: &'a Path, fallbacks: &'a [PathBuf]) -> Vec<&'a Path> {
    iter::once(home)
        .chain(fallbacks.iter().map(PathBuf::as_path))
        .collect()
}
