//! Identity of the current process.

use std::{io, os::unix::fs::chown, path::Path};

/// Real user ID of the calling process.
pub fn uid() -> u32 {
    // SAFETY: getuid(2) is always successful and has no preconditions.
    unsafe { libc::getuid() }
}

/// Real group ID of the calling process.
pub fn gid() -> u32 {
    // SAFETY: getgid(2) is always successful and has no preconditions.
    unsafe { libc::getgid() }
}

/// Change owner and group of `path` to [`uid`] and [`gid`].
///
/// Symlinks are followed, callers which care must check `path` beforehand.
pub fn take_ownership(path: &Path) -> io::Result<()> {
    chown(path, Some(uid()), Some(gid()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_err, assert_ok};
    use std::os::unix::fs::MetadataExt;
    use tempfile::tempdir;

    #[test]
    fn ids_match_files_we_create() {
        let tmp = tempdir().expect("needed for tests");
        let metadata = tmp.path().metadata().expect("needed for tests");
        assert_eq!(metadata.uid(), uid());
    }

    #[test]
    fn take_ownership_of_own_directory() {
        let tmp = tempdir().expect("needed for tests");
        assert_ok!(take_ownership(tmp.path()));
        let metadata = tmp.path().metadata().expect("needed for tests");
        assert_eq!(metadata.uid(), uid());
        assert_eq!(metadata.gid(), gid());
    }

    #[test]
    fn take_ownership_of_missing_path_fails() {
        let tmp = tempdir().expect("needed for tests");
        let err = assert_err!(take_ownership(&tmp.path().join("missing")));
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
