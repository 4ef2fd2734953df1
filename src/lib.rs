//! Basedir - XDG base and user directory resolution.
//!
//! This crate maps environmental variables and platform defaults onto the locations where
//! applications keep their data, configuration, cache, state and runtime files, following the
//! XDG Base Directory specification on Unix and its nearest equivalents on macOS and Windows. It
//! also resolves well-known user directories, like Desktop or Downloads.
//!
//! ```rust,no_run
//! use basedir::Directories;
//!
//! # fn main() -> basedir::Result<()> {
//! let dirs = Directories::new();
//!
//! // `~/.config/app/settings.toml`, with `~/.config/app` created if needed.
//! let settings = dirs.base().config_file("app/settings.toml")?;
//!
//! // First match in `$XDG_DATA_HOME`, then `$XDG_DATA_DIRS`.
//! let theme = dirs.base().search_data_file("app/theme.css")?;
//! # drop((settings, theme));
//! # Ok(())
//! # }
//! ```

pub mod base_dirs;
mod directories;
pub mod error;
pub mod fs;
pub mod os;
pub mod user_dirs;

pub use base_dirs::BaseDirectories;
pub use directories::Directories;
pub use error::{Error, Result};
pub use os::{env::Env, platform::Platform};
pub use user_dirs::UserDirectories;
