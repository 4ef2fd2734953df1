/// Which platform's directory conventions should be applied.
///
/// [`Platform::current`] matches the build target. Other variants may be chosen explicitly, e.g.
/// to get XDG-style `~/.config` fallbacks on macOS instead of `~/Library/...`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Platform {
    /// XDG Base Directory fallbacks, like `~/.local/share` and `/etc/xdg`.
    Unix,
    /// Fallbacks in `~/Library/...`.
    MacOS,
    /// Fallbacks in `%APPDATA%`, `%LOCALAPPDATA%` and `%PROGRAMDATA%`.
    Windows,
}

impl Platform {
    /// Platform matching the build target.
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOS
        } else {
            Self::Unix
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}
