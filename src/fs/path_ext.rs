use std::{
    fs::{DirBuilder, Metadata, remove_dir, remove_file, symlink_metadata},
    io,
    path::Path,
};

/// Permission bits of directories created by [`PathExt::mkdir`]: `rwx` for the owner only.
#[cfg(unix)]
pub const PRIVATE_DIR_MODE: u32 = 0o700;

/// Options for controlling [`PathExt::mkdir`]
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum MkdirOptions {
    /// Equivalent of `mkdir -m 700 $path`.
    WithoutParents,
    /// Equivalent of `mkdir -m 700 -p $path`.
    WithParents,
}

mod sealed {
    use std::path::Path;

    pub trait Sealed {}
    impl Sealed for Path {}
}

/// Extension trait for [`Path`] with the filesystem operations directory resolution needs.
///
/// ```rust,no_run
/// # use basedir::fs::*;
/// # use std::path::Path;
/// # fn main() -> std::io::Result<()> {
/// let path = Path::new("/tmp/app/cache");
/// path.mkdir(MkdirOptions::WithParents)?; // Only the owner can enter created directories.
/// assert!(path.is_present());
/// if let Some(metadata) = path.lstat()? {
///     assert!(metadata.is_dir());
/// }
/// # Ok(())
/// # }
/// ```
pub trait PathExt: sealed::Sealed {
    /// Create directories at given [`Path`], readable, writable and searchable only by the owner.
    ///
    /// # Returns
    /// [`Ok(())`](Ok) if created successfully, otherwise error, as reported by
    /// [`DirBuilder::create`].
    ///
    /// Note that this function will return `Ok(())`, if `self` already is a directory. Modes of
    /// already existing directories are left untouched.
    fn mkdir(&self, opts: MkdirOptions) -> io::Result<()>;

    /// Returns `true` if `self` points to an existing filesystem entry. Symlinks are followed.
    ///
    /// Unlike [`Path::try_exists`], errors (like lack of permissions) are reported as `false`.
    fn is_present(&self) -> bool;

    /// Wrapper around [`std::fs::symlink_metadata`], which maps missing entry to [`Ok(None)`](Ok).
    fn lstat(&self) -> io::Result<Option<Metadata>>;

    /// Remove non-directory entry at `self`, like a regular file or a symlink.
    ///
    /// Directory symlinks on Windows have to be removed with [`std::fs::remove_dir`], this method
    /// handles both.
    fn rm(&self) -> io::Result<()>;
}

impl PathExt for Path {
    fn mkdir(&self, opts: MkdirOptions) -> io::Result<()> {
        let mut builder = DirBuilder::new();
        builder.recursive(matches!(opts, MkdirOptions::WithParents));
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(PRIVATE_DIR_MODE);
        }
        match builder.create(self) {
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && self.is_dir() => Ok(()),
            result => result,
        }
    }

    fn is_present(&self) -> bool {
        self.try_exists().unwrap_or(false)
    }

    fn lstat(&self) -> io::Result<Option<Metadata>> {
        match symlink_metadata(self) {
            Ok(metadata) => Ok(Some(metadata)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn rm(&self) -> io::Result<()> {
        match remove_file(self) {
            Err(e) if cfg!(windows) && self.is_symlink() => remove_dir(self).map_err(|_| e),
            result => result,
        }
    }
}
