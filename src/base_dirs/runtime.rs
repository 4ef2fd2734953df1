use std::path::Path;

use crate::{
    error::{Error, Result},
    fs::PathExt,
};

/// Make sure `dir` can be trusted as a runtime directory before anything is created in it.
///
/// Missing directory is left for the caller to create. Existing directory is handed over to the
/// current user and group. Anything else (most notably a symlink, which could redirect sockets
/// to a location controlled by someone else) is removed, so the caller creates a fresh directory.
pub(super) fn vet(dir: &Path) -> Result<()> {
    let Some(metadata) = dir.lstat().map_err(|source| Error::io(dir, source))? else {
        return Ok(());
    };

    if metadata.is_dir() {
        #[cfg(unix)]
        crate::os::user::take_ownership(dir).map_err(|source| Error::io(dir, source))?;
    } else {
        tracing::warn!(
            path = %dir.display(),
            file_type = ?metadata.file_type(),
            "runtime directory is not a directory, removing it"
        );
        dir.rm().map_err(|source| Error::io(dir, source))?;
    }
    Ok(())
}
