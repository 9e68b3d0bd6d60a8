//! Disk helpers: ensure a storage file exists before first open.

use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::path::Path;

/// Make sure the file at `path` exists without altering its content.
///
/// With `create_dirs` set, the parent directory (and any missing
/// ancestors) is created first. The file itself is opened in append mode,
/// which creates it when absent and leaves pre-existing bytes alone, then
/// closed immediately.
pub fn touch(path: &Path, create_dirs: bool) -> Result<()> {
    if create_dirs {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| Error::Io(format!("could not create {}: {e}", parent.display())))?;
            }
        }
    }

    OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| Error::Io(format!("could not touch {}: {e}", path.display())))?;
    Ok(())
}
