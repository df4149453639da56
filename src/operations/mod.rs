//! High-level operations behind the CLI commands

pub mod uninstall;
