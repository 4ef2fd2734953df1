use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::os::platform::Platform;

/// Snapshot of the environmental variables, which is safe to access on Windows: its
/// environmental variables are case-insensitive.
///
/// Every directory lookup in this crate goes through an [`Env`], so tests (and hosts which want
/// to resolve directories for another environment) can inject their own variables with
/// [`Env::new_from`] or [`FromIterator`].
#[derive(Debug, Clone)]
pub struct Env {
    keys: HashMap<OsString, OsString>,

    normalised_keys: HashMap<OsString, OsString>,
}

impl Env {
    /// Create new [`Env`] from [`std::env::vars_os`].
    pub fn new() -> Self {
        Self::new_from(std::env::vars_os().collect())
    }

    /// Create new [`Env`] using `keys` as existing environmental variables.
    pub fn new_from(env: HashMap<OsString, OsString>) -> Self {
        Self {
            normalised_keys: Env::normalize_map(env.clone()),
            keys: env,
        }
    }

    fn normalize_key(key: impl AsRef<OsStr>) -> OsString {
        key.as_ref().to_ascii_uppercase()
    }

    fn normalize_map(keys: HashMap<OsString, OsString>) -> HashMap<OsString, OsString> {
        keys.into_iter()
            .map(|(key, value)| (Env::normalize_key(key), value))
            .collect()
    }

    /// Get environmental variable pointed by `key`.
    ///
    /// # Returns
    /// `None` variant indicates missing key, `Some`: existing key.
    ///
    /// # Examples
    /// ```rust
    /// use basedir::Env;
    /// use std::ffi::OsStr;
    ///
    /// let env = Env::from_iter([("XDG_CONFIG_HOME", "/tmp/cfg")]);
    /// assert_eq!(env.get_os("XDG_CONFIG_HOME"), Some(OsStr::new("/tmp/cfg")));
    /// assert_eq!(env.get_os("XDG_CACHE_HOME"), None);
    /// ```
    pub fn get_os(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        let key = key.as_ref();
        match self.keys.get(key) {
            Some(x) => Some(x),
            None => {
                if cfg!(target_os = "windows") {
                    self.normalised_keys
                        .get(&Env::normalize_key(key))
                        .map(|x| x.as_ref())
                } else {
                    None
                }
            }
        }
    }

    /// Like [`Env::get_os`], but an empty variable counts as missing.
    pub fn get_non_empty(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.get_os(key).filter(|value| !value.is_empty())
    }

    /// Get environmental variable pointed by `key` as an absolute path.
    ///
    /// Empty and relative values are ignored, as the XDG Base Directory specification requires.
    pub fn abs_path(&self, key: impl AsRef<OsStr>) -> Option<PathBuf> {
        let key = key.as_ref();
        let value = self.get_non_empty(key)?;
        let path = Path::new(value);
        if path.is_absolute() {
            Some(path.to_path_buf())
        } else {
            tracing::debug!(?key, ?value, "ignoring non-absolute path from environment");
            None
        }
    }

    /// Split path list pointed by `key` and append `defaults` to it.
    ///
    /// Only absolute entries of the variable are kept. Duplicates are removed, keeping the
    /// earliest occurrence, so the result stays in priority order. When `key` is missing the
    /// result is exactly `defaults`.
    ///
    /// # Examples
    /// ```rust
    /// # #[cfg(unix)] {
    /// use basedir::Env;
    /// use std::path::PathBuf;
    ///
    /// let env = Env::from_iter([("XDG_DATA_DIRS", "/opt/share:share:/usr/share")]);
    /// let dirs = env.search_paths("XDG_DATA_DIRS", ["/usr/local/share", "/usr/share"]);
    /// assert_eq!(
    ///     dirs,
    ///     [
    ///         PathBuf::from("/opt/share"),
    ///         PathBuf::from("/usr/share"),
    ///         PathBuf::from("/usr/local/share"),
    ///     ]
    /// );
    /// # }
    /// ```
    pub fn search_paths<I>(&self, key: impl AsRef<OsStr>, defaults: I) -> Vec<PathBuf>
    where
        I: IntoIterator,
        I::Item: Into<PathBuf>,
    {
        let key = key.as_ref();
        let from_env = self
            .get_non_empty(key)
            .map(|value| {
                std::env::split_paths(value)
                    .filter(|path| {
                        let keep = path.is_absolute();
                        if !keep {
                            tracing::debug!(?key, ?path, "ignoring non-absolute path list entry");
                        }
                        keep
                    })
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        unique(from_env.into_iter().chain(defaults.into_iter().map(Into::into)))
    }

    /// Resolve user's home directory, as `platform` defines it.
    ///
    /// `$HOME` is consulted on [`Platform::Unix`] and [`Platform::MacOS`], `%USERPROFILE%` and
    /// `%HOMEDRIVE%%HOMEPATH%` on [`Platform::Windows`]. If none of them holds an absolute path,
    /// [`std::env::home_dir`] is asked, and as the last resort the filesystem root is returned.
    pub fn home_dir(&self, platform: Platform) -> PathBuf {
        let from_env = match platform {
            Platform::Unix | Platform::MacOS => self.abs_path("HOME"),
            Platform::Windows => self.abs_path("USERPROFILE").or_else(|| {
                let drive = self.get_non_empty("HOMEDRIVE")?;
                let path = self.get_non_empty("HOMEPATH")?;
                let mut joined = drive.to_os_string();
                joined.push(path);
                Some(PathBuf::from(joined)).filter(|home| home.is_absolute())
            }),
        };
        from_env
            .or_else(std::env::home_dir)
            .unwrap_or_else(|| PathBuf::from(std::path::MAIN_SEPARATOR_STR))
    }
}

/// Remove duplicated paths, preserving order of first occurrences.
pub(crate) fn unique(paths: impl IntoIterator<Item = PathBuf>) -> Vec<PathBuf> {
    let mut seen = Vec::new();
    for path in paths {
        if !seen.contains(&path) {
            seen.push(path);
        }
    }
    seen
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for Env
where
    K: Into<OsString>,
    V: Into<OsString>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::new_from(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_none, assert_some_eq};

    #[test]
    fn empty_variable_is_missing() {
        let env = Env::from_iter([("XDG_CACHE_HOME", "")]);
        assert_some_eq!(env.get_os("XDG_CACHE_HOME"), OsStr::new(""));
        assert_none!(env.get_non_empty("XDG_CACHE_HOME"));
        assert_none!(env.abs_path("XDG_CACHE_HOME"));
    }

    #[cfg(unix)]
    #[test]
    fn relative_path_is_ignored() {
        let env = Env::from_iter([("XDG_CONFIG_HOME", "relative/cfg"), ("XDG_DATA_HOME", "/abs")]);
        assert_none!(env.abs_path("XDG_CONFIG_HOME"));
        assert_some_eq!(env.abs_path("XDG_DATA_HOME"), PathBuf::from("/abs"));
    }

    #[cfg(unix)]
    #[test]
    fn search_paths_fall_back_to_defaults() {
        let env = Env::from_iter([("XDG_CONFIG_DIRS", "")]);
        assert_eq!(
            env.search_paths("XDG_CONFIG_DIRS", ["/etc/xdg"]),
            [PathBuf::from("/etc/xdg")]
        );
        assert_eq!(
            env.search_paths("XDG_DATA_DIRS", ["/usr/local/share", "/usr/share"]),
            [PathBuf::from("/usr/local/share"), PathBuf::from("/usr/share")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn search_paths_drop_relative_entries_and_duplicates() {
        let env = Env::from_iter([("XDG_CONFIG_DIRS", "/a:b::/a:/etc/xdg:/c")]);
        assert_eq!(
            env.search_paths("XDG_CONFIG_DIRS", ["/etc/xdg"]),
            [
                PathBuf::from("/a"),
                PathBuf::from("/etc/xdg"),
                PathBuf::from("/c")
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn home_dir_uses_home_variable() {
        let env = Env::from_iter([("HOME", "/home/alice")]);
        assert_eq!(env.home_dir(Platform::Unix), PathBuf::from("/home/alice"));
        assert_eq!(env.home_dir(Platform::MacOS), PathBuf::from("/home/alice"));
    }

    #[cfg(unix)]
    #[test]
    fn windows_home_dir_prefers_userprofile() {
        let env = Env::from_iter([
            ("HOME", "/ignored"),
            ("USERPROFILE", "/users/alice"),
            ("HOMEDRIVE", "/drive"),
            ("HOMEPATH", "/users/bob"),
        ]);
        assert_eq!(env.home_dir(Platform::Windows), PathBuf::from("/users/alice"));

        let env = Env::from_iter([("HOMEDRIVE", "/drive"), ("HOMEPATH", "/users/bob")]);
        assert_eq!(
            env.home_dir(Platform::Windows),
            PathBuf::from("/drive/users/bob")
        );
    }

    #[test]
    fn unique_keeps_first_occurrence() {
        let paths = ["/b", "/a", "/b", "/c", "/a"].map(PathBuf::from);
        assert_eq!(unique(paths), ["/b", "/a", "/c"].map(PathBuf::from));
    }

    #[cfg(windows)]
    #[test]
    fn keys_are_case_insensitive_on_windows() {
        let env = Env::from_iter([("LocalAppData", r"C:\Users\alice\AppData\Local")]);
        assert_some_eq!(
            env.get_os("LOCALAPPDATA"),
            OsStr::new(r"C:\Users\alice\AppData\Local")
        );
    }
}
