//! Command implementations for the uninstaller CLI

use std::path::PathBuf;

pub mod completions;
pub mod list;
pub mod uninstall;

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub home: Option<PathBuf>,
    pub registry_dir: Option<PathBuf>,
}
