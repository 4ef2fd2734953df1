//! Well-known user directories, like Desktop or Downloads.
//!
//! Each directory comes from the first of:
//!  1. its `XDG_*_DIR` environmental variable, if it holds an absolute path,
//!  2. `user-dirs.dirs` in the config home (only with [`Platform::Unix`] conventions),
//!  3. the platform default, usually a folder in the home directory.

use std::path::{Path, PathBuf};

use crate::{
    base_dirs::BaseDirectories,
    os::{env::Env, platform::Platform},
};

pub mod config;

pub const DESKTOP_DIR: &str = "XDG_DESKTOP_DIR";
pub const DOWNLOAD_DIR: &str = "XDG_DOWNLOAD_DIR";
pub const DOCUMENTS_DIR: &str = "XDG_DOCUMENTS_DIR";
pub const MUSIC_DIR: &str = "XDG_MUSIC_DIR";
pub const PICTURES_DIR: &str = "XDG_PICTURES_DIR";
pub const VIDEOS_DIR: &str = "XDG_VIDEOS_DIR";
pub const TEMPLATES_DIR: &str = "XDG_TEMPLATES_DIR";
pub const PUBLICSHARE_DIR: &str = "XDG_PUBLICSHARE_DIR";

/// Resolved user directories. Nothing is created on disk, these are locations only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDirectories {
    desktop: PathBuf,
    download: PathBuf,
    documents: PathBuf,
    music: PathBuf,
    pictures: PathBuf,
    videos: PathBuf,
    templates: PathBuf,
    public_share: PathBuf,
}

impl UserDirectories {
    /// Resolve from [`Env::new`] with conventions of [`Platform::current`].
    pub fn new() -> Self {
        let env = Env::new();
        let platform = Platform::current();
        Self::from_env(&env, platform, &BaseDirectories::from_env(&env, platform))
    }

    /// Resolve from `env`, falling back to defaults of `platform`.
    ///
    /// `base` provides the home directory and, on [`Platform::Unix`], the config home holding
    /// `user-dirs.dirs`.
    pub fn from_env(env: &Env, platform: Platform, base: &BaseDirectories) -> Self {
        let home = base.home();
        let configured = match platform {
            Platform::Unix => config::load(&base.config_home().join(config::FILE_NAME), home),
            Platform::MacOS | Platform::Windows => Default::default(),
        };
        let resolve = |key: &str, default: PathBuf| {
            env.abs_path(key)
                .or_else(|| configured.get(key).cloned())
                .unwrap_or(default)
        };

        let videos = match platform {
            Platform::MacOS => home.join("Movies"),
            Platform::Unix | Platform::Windows => home.join("Videos"),
        };
        let public_share = match platform {
            Platform::Windows => env
                .get_non_empty("PUBLIC")
                .map(PathBuf::from)
                .unwrap_or_else(|| home.join("Public")),
            Platform::Unix | Platform::MacOS => home.join("Public"),
        };

        Self {
            desktop: resolve(DESKTOP_DIR, home.join("Desktop")),
            download: resolve(DOWNLOAD_DIR, home.join("Downloads")),
            documents: resolve(DOCUMENTS_DIR, home.join("Documents")),
            music: resolve(MUSIC_DIR, home.join("Music")),
            pictures: resolve(PICTURES_DIR, home.join("Pictures")),
            videos: resolve(VIDEOS_DIR, videos),
            templates: resolve(TEMPLATES_DIR, home.join("Templates")),
            public_share: resolve(PUBLICSHARE_DIR, public_share),
        }
    }

    pub fn desktop(&self) -> &Path {
        &self.desktop
    }

    pub fn download(&self) -> &Path {
        &self.download
    }

    pub fn documents(&self) -> &Path {
        &self.documents
    }

    pub fn music(&self) -> &Path {
        &self.music
    }

    pub fn pictures(&self) -> &Path {
        &self.pictures
    }

    pub fn videos(&self) -> &Path {
        &self.videos
    }

    pub fn templates(&self) -> &Path {
        &self.templates
    }

    /// Directory shared with other users, `~/Public` or `%PUBLIC%`.
    pub fn public_share(&self) -> &Path {
        &self.public_share
    }
}

impl Default for UserDirectories {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use tempfile::tempdir;

    fn resolve(env: &Env, platform: Platform) -> UserDirectories {
        UserDirectories::from_env(env, platform, &BaseDirectories::from_env(env, platform))
    }

    #[test]
    fn unix_defaults() {
        let env = Env::from_iter([("HOME", "/nonexistent/alice")]);
        let dirs = resolve(&env, Platform::Unix);

        assert_eq!(dirs.desktop(), Path::new("/nonexistent/alice/Desktop"));
        assert_eq!(dirs.download(), Path::new("/nonexistent/alice/Downloads"));
        assert_eq!(dirs.documents(), Path::new("/nonexistent/alice/Documents"));
        assert_eq!(dirs.music(), Path::new("/nonexistent/alice/Music"));
        assert_eq!(dirs.pictures(), Path::new("/nonexistent/alice/Pictures"));
        assert_eq!(dirs.videos(), Path::new("/nonexistent/alice/Videos"));
        assert_eq!(dirs.templates(), Path::new("/nonexistent/alice/Templates"));
        assert_eq!(dirs.public_share(), Path::new("/nonexistent/alice/Public"));
    }

    #[test]
    fn unix_reads_user_dirs_file_from_config_home() {
        let tmp = tempdir().expect("needed for tests");
        let cfg = tmp.path().join("cfg");
        std::fs::create_dir(&cfg).expect("needed for tests");
        std::fs::write(
            cfg.join(config::FILE_NAME),
            "XDG_DOWNLOAD_DIR=\"$HOME/incoming\"\nXDG_MUSIC_DIR=\"/srv/music\"\n",
        )
        .expect("needed for tests");
        let env = Env::from_iter([
            (OsStr::new("HOME"), tmp.path().as_os_str()),
            (OsStr::new("XDG_CONFIG_HOME"), cfg.as_os_str()),
            (OsStr::new(MUSIC_DIR), OsStr::new("/mnt/music")),
            (OsStr::new(DESKTOP_DIR), OsStr::new("relative/desktop")),
        ]);
        let dirs = resolve(&env, Platform::Unix);

        assert_eq!(dirs.download(), tmp.path().join("incoming"));
        // Environment wins over the file.
        assert_eq!(dirs.music(), Path::new("/mnt/music"));
        assert_eq!(dirs.desktop(), tmp.path().join("Desktop"));
    }

    #[test]
    fn macos_ignores_user_dirs_file() {
        let tmp = tempdir().expect("needed for tests");
        let cfg = tmp.path().join("cfg");
        std::fs::create_dir(&cfg).expect("needed for tests");
        std::fs::write(cfg.join(config::FILE_NAME), "XDG_DOWNLOAD_DIR=\"/srv/dl\"\n")
            .expect("needed for tests");
        let env = Env::from_iter([
            (OsStr::new("HOME"), tmp.path().as_os_str()),
            (OsStr::new("XDG_CONFIG_HOME"), cfg.as_os_str()),
        ]);
        let dirs = resolve(&env, Platform::MacOS);

        assert_eq!(dirs.download(), tmp.path().join("Downloads"));
        assert_eq!(dirs.videos(), tmp.path().join("Movies"));
    }

    #[test]
    fn windows_public_share() {
        let env = Env::from_iter([("USERPROFILE", "/users/alice"), ("PUBLIC", "/users/Public")]);
        let dirs = resolve(&env, Platform::Windows);
        assert_eq!(dirs.public_share(), Path::new("/users/Public"));
        assert_eq!(dirs.videos(), Path::new("/users/alice/Videos"));

        let env = Env::from_iter([("USERPROFILE", "/users/alice")]);
        let dirs = resolve(&env, Platform::Windows);
        assert_eq!(dirs.public_share(), Path::new("/users/alice/Public"));
    }

    #[test]
    fn variables_override_defaults_everywhere() {
        for platform in [Platform::Unix, Platform::MacOS, Platform::Windows] {
            let env = Env::from_iter([
                ("HOME", "/home/alice"),
                ("USERPROFILE", "/home/alice"),
                (TEMPLATES_DIR, "/srv/templates"),
                (PUBLICSHARE_DIR, "/srv/public"),
            ]);
            let dirs = resolve(&env, platform);
            assert_eq!(dirs.templates(), Path::new("/srv/templates"));
            assert_eq!(dirs.public_share(), Path::new("/srv/public"));
        }
    }
}
