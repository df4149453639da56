//! Best-effort file system removal helpers
//!
//! None of these return an error: failures are reported back as
//! [`FsWarning`]s so the caller can log them and carry on.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::FsWarning;

/// Outcome of a single best-effort removal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// The path existed and is gone now
    Removed,
    /// Nothing was there to begin with
    Absent,
    /// The directory still has content and was kept
    NotEmpty,
    /// Removal was attempted and failed
    Failed(FsWarning),
}

/// Delete a file; a missing file is not an error
pub fn remove_file_if_exists(path: &Path) -> Removal {
    match fs::remove_file(path) {
        Ok(()) => Removal::Removed,
        Err(e) if e.kind() == ErrorKind::NotFound => Removal::Absent,
        Err(e) => Removal::Failed(FsWarning::new(path, e.to_string())),
    }
}

/// Check whether a directory has no entries
pub fn is_dir_empty(path: &Path) -> std::io::Result<bool> {
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Delete a directory only when it has no entries
pub fn remove_dir_if_empty(path: &Path) -> Removal {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return Removal::Failed(FsWarning::new(path, "not a directory")),
        Err(e) if e.kind() == ErrorKind::NotFound => return Removal::Absent,
        Err(e) => return Removal::Failed(FsWarning::new(path, e.to_string())),
    }

    match is_dir_empty(path) {
        Ok(false) => Removal::NotEmpty,
        Ok(true) => match fs::remove_dir(path) {
            Ok(()) => Removal::Removed,
            Err(e) if e.kind() == ErrorKind::NotFound => Removal::Absent,
            Err(e) => Removal::Failed(FsWarning::new(path, e.to_string())),
        },
        Err(e) => Removal::Failed(FsWarning::new(path, e.to_string())),
    }
}
