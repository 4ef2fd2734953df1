use crate::{
    base_dirs::BaseDirectories,
    os::{env::Env, platform::Platform},
    user_dirs::UserDirectories,
};

/// Base and user directories, resolved together from a single environment snapshot.
///
/// Build it once at start-up and share it by reference (or behind an [`Arc`](std::sync::Arc)):
/// it never changes after construction. Resolve a new one to pick up environment changes.
///
/// ```rust,no_run
/// # use basedir::Directories;
/// # fn main() -> basedir::Result<()> {
/// let dirs = Directories::new();
/// let settings = dirs.base().config_file("app/settings.toml")?;
/// println!("writing {} and saving downloads into {}", settings.display(), dirs.user().download().display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directories {
    base: BaseDirectories,
    user: UserDirectories,
}

impl Directories {
    /// Resolve from [`Env::new`] with conventions of [`Platform::current`].
    pub fn new() -> Self {
        Self::from_env(&Env::new(), Platform::current())
    }

    /// Resolve from `env`, falling back to defaults of `platform`.
    pub fn from_env(env: &Env, platform: Platform) -> Self {
        let base = BaseDirectories::from_env(env, platform);
        let user = UserDirectories::from_env(env, platform, &base);
        Self { base, user }
    }

    pub fn base(&self) -> &BaseDirectories {
        &self.base
    }

    pub fn user(&self) -> &UserDirectories {
        &self.user
    }
}

impl Default for Directories {
    fn default() -> Self {
        Self::new()
    }
}
