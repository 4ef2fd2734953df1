//! Per-platform fallbacks, used when XDG variables are missing or invalid.

use std::path::{Path, PathBuf};

use super::{
    BaseDirectories, CACHE_HOME, CONFIG_DIRS, CONFIG_HOME, DATA_DIRS, DATA_HOME, RUNTIME_DIR,
    STATE_HOME,
};
use crate::os::env::{Env, unique};

fn join(base: &Path, parts: &[&str]) -> PathBuf {
    let mut path = base.to_path_buf();
    path.extend(parts);
    path
}

/// Append `leaf` to every directory in `dirs`.
fn nested<'a>(dirs: &'a [PathBuf], leaf: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
    dirs.iter().map(move |dir| dir.join(leaf))
}

pub(super) fn unix(env: &Env, home: PathBuf) -> BaseDirectories {
    let data_home = env
        .abs_path(DATA_HOME)
        .unwrap_or_else(|| join(&home, &[".local", "share"]));
    let data = env.search_paths(DATA_DIRS, ["/usr/local/share", "/usr/share"]);

    let fonts = unique(
        [
            data_home.join("fonts"),
            home.join(".fonts"),
            join(&home, &[".local", "share", "fonts"]),
            PathBuf::from("/usr/local/share/fonts"),
            PathBuf::from("/usr/share/fonts"),
        ]
        .into_iter()
        .chain(nested(&data, "fonts")),
    );
    let applications = unique(
        [
            data_home.join("applications"),
            join(&home, &[".local", "share", "applications"]),
            PathBuf::from("/usr/local/share/applications"),
            PathBuf::from("/usr/share/applications"),
        ]
        .into_iter()
        .chain(nested(&data, "applications")),
    );

    BaseDirectories {
        config_home: env
            .abs_path(CONFIG_HOME)
            .unwrap_or_else(|| home.join(".config")),
        config: env.search_paths(CONFIG_DIRS, ["/etc/xdg"]),
        cache_home: env
            .abs_path(CACHE_HOME)
            .unwrap_or_else(|| home.join(".cache")),
        runtime: env.abs_path(RUNTIME_DIR).unwrap_or_else(default_runtime_dir),
        state_home: env
            .abs_path(STATE_HOME)
            .unwrap_or_else(|| join(&home, &[".local", "state"])),
        data_home,
        data,
        fonts,
        applications,
        home,
    }
}

#[cfg(unix)]
fn default_runtime_dir() -> PathBuf {
    Path::new("/run/user").join(crate::os::user::uid().to_string())
}

// There is no per-user runtime directory outside of Unix.
#[cfg(not(unix))]
fn default_runtime_dir() -> PathBuf {
    std::env::temp_dir()
}

pub(super) fn macos(env: &Env, home: PathBuf) -> BaseDirectories {
    let app_support = join(&home, &["Library", "Application Support"]);

    BaseDirectories {
        data_home: env
            .abs_path(DATA_HOME)
            .unwrap_or_else(|| app_support.clone()),
        data: env.search_paths(DATA_DIRS, ["/Library/Application Support"]),
        config_home: env
            .abs_path(CONFIG_HOME)
            .unwrap_or_else(|| app_support.clone()),
        config: env.search_paths(
            CONFIG_DIRS,
            [
                join(&home, &["Library", "Preferences"]),
                PathBuf::from("/Library/Application Support"),
                PathBuf::from("/Library/Preferences"),
            ],
        ),
        cache_home: env
            .abs_path(CACHE_HOME)
            .unwrap_or_else(|| join(&home, &["Library", "Caches"])),
        runtime: env
            .abs_path(RUNTIME_DIR)
            .unwrap_or_else(|| app_support.clone()),
        state_home: env.abs_path(STATE_HOME).unwrap_or(app_support),
        fonts: vec![
            join(&home, &["Library", "Fonts"]),
            PathBuf::from("/Library/Fonts"),
            PathBuf::from("/System/Library/Fonts"),
            PathBuf::from("/Network/Library/Fonts"),
        ],
        applications: vec![PathBuf::from("/Applications")],
        home,
    }
}

pub(super) fn windows(env: &Env, home: PathBuf) -> BaseDirectories {
    let app_data = env
        .get_non_empty("APPDATA")
        .map(PathBuf::from)
        .unwrap_or_else(|| home.join("AppData"));
    let roaming_app_data = app_data.join("Roaming");
    let local_app_data = env
        .get_non_empty("LOCALAPPDATA")
        .map(PathBuf::from)
        .unwrap_or_else(|| app_data.join("Local"));
    let program_data = env
        .get_non_empty("PROGRAMDATA")
        .map(PathBuf::from)
        .or_else(|| {
            env.get_non_empty("SystemDrive")
                .map(|drive| Path::new(drive).join("ProgramData"))
        })
        .unwrap_or_else(|| home.clone());
    let system_root = env
        .get_non_empty("SystemRoot")
        .map(PathBuf::from)
        .or_else(|| {
            env.get_non_empty("SystemDrive")
                .map(|drive| Path::new(drive).join("Windows"))
        });

    let fonts = system_root
        .map(|root| root.join("Fonts"))
        .into_iter()
        .chain([join(&local_app_data, &["Microsoft", "Windows", "Fonts"])])
        .collect();

    BaseDirectories {
        data_home: env
            .abs_path(DATA_HOME)
            .unwrap_or_else(|| local_app_data.clone()),
        data: env.search_paths(DATA_DIRS, [roaming_app_data, program_data.clone()]),
        config_home: env
            .abs_path(CONFIG_HOME)
            .unwrap_or_else(|| local_app_data.clone()),
        config: env.search_paths(CONFIG_DIRS, [program_data]),
        cache_home: env
            .abs_path(CACHE_HOME)
            .unwrap_or_else(|| local_app_data.join("cache")),
        runtime: env
            .abs_path(RUNTIME_DIR)
            .unwrap_or_else(|| local_app_data.clone()),
        state_home: env
            .abs_path(STATE_HOME)
            .unwrap_or_else(|| local_app_data.clone()),
        fonts,
        applications: vec![join(
            &app_data,
            &["Microsoft", "Windows", "Start Menu", "Programs"],
        )],
        home,
    }
}
