//! Shortcut and directory cleanup after the launcher removed an application
//!
//! Start menu shortcuts live in `<vendor>/<instance group>/<instance>/<link>`.
//! Once the link is gone the three directories above it are removed bottom-up,
//! each only if empty, stopping at the first one that still has content.

use std::path::{Path, PathBuf};

use crate::common::fs::{Removal, remove_dir_if_empty, remove_file_if_exists};
use crate::error::FsWarning;
use crate::registry::SoftwareEntry;

/// Directories above a start menu shortcut: instance, instance group, vendor
pub const ANCESTOR_LEVELS: usize = 3;

/// What the cleanup removed and what it had to leave behind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupOutcome {
    pub removed_files: Vec<PathBuf>,
    pub removed_dirs: Vec<PathBuf>,
    pub warnings: Vec<FsWarning>,
}

impl CleanupOutcome {
    fn record_file(&mut self, path: &Path, removal: Removal) {
        match removal {
            Removal::Removed => {
                tracing::debug!(path = %path.display(), "Removed shortcut");
                self.removed_files.push(path.to_path_buf());
            }
            Removal::Absent => {
                tracing::debug!(path = %path.display(), "Shortcut already gone");
            }
            Removal::NotEmpty => {}
            Removal::Failed(warning) => self.warn(warning),
        }
    }

    fn warn(&mut self, warning: FsWarning) {
        tracing::warn!("Cannot delete {}", warning);
        self.warnings.push(warning);
    }
}

/// Instance, instance group and vendor directory of a start menu shortcut
pub fn shortcut_ancestors(shortcut: &Path) -> Vec<PathBuf> {
    shortcut
        .ancestors()
        .skip(1)
        .filter(|dir| !dir.as_os_str().is_empty())
        .take(ANCESTOR_LEVELS)
        .map(Path::to_path_buf)
        .collect()
}

/// Delete the shortcuts of an entry and the emptied start menu directories
pub fn remove_shortcuts(entry: &SoftwareEntry) -> CleanupOutcome {
    let mut outcome = CleanupOutcome::default();

    if let Some(desktop) = &entry.desktop_shortcut_path {
        outcome.record_file(desktop, remove_file_if_exists(desktop));
    }

    if let Some(start_menu) = &entry.start_menu_shortcut_path {
        // A failed link deletion leaves the instance dir non-empty, which
        // ends the walk below on its own.
        outcome.record_file(start_menu, remove_file_if_exists(start_menu));
        prune_empty_ancestors(&shortcut_ancestors(start_menu), &mut outcome);
    }

    outcome
}

fn prune_empty_ancestors(dirs: &[PathBuf], outcome: &mut CleanupOutcome) {
    for dir in dirs {
        match remove_dir_if_empty(dir) {
            Removal::Removed => {
                tracing::debug!(path = %dir.display(), "Removed empty directory");
                outcome.removed_dirs.push(dir.clone());
            }
            Removal::Absent => {}
            Removal::NotEmpty => {
                tracing::debug!(path = %dir.display(), "Directory still in use, keeping it");
                break;
            }
            Removal::Failed(warning) => {
                outcome.warn(warning);
                break;
            }
        }
    }
}
