//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - uninstall: Uninstall command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod list;
pub mod uninstall;

pub use completions::CompletionsArgs;
pub use list::ListArgs;
pub use uninstall::UninstallArgs;

/// Launcher uninstaller
///
/// Removes applications installed by the launcher together with their shortcuts.
#[derive(Parser, Debug)]
#[command(
    name = "launcher-uninstaller",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Removes launcher-installed applications and their shortcuts",
    long_about = "Asks the launcher's embedded runtime to uninstall an application, then \
                  removes its software entry, its desktop and start menu shortcuts, and any \
                  start menu directories left empty.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  launcher-uninstaller uninstall app.json            \x1b[90m# Uninstall an application\x1b[0m\n   \
                  launcher-uninstaller uninstall app.json --dry-run  \x1b[90m# Show what would be removed\x1b[0m\n   \
                  launcher-uninstaller list                          \x1b[90m# List registered applications\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Launcher home containing jre/ and lib/ (defaults to the executable's directory)
    #[arg(long, global = true, env = "LAUNCHER_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Directory holding software entries
    #[arg(long, global = true, env = "LAUNCHER_REGISTRY_DIR", value_name = "DIR")]
    pub registry_dir: Option<PathBuf>,

    /// Also append log output to this file
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Uninstall the application described by a descriptor file
    Uninstall(UninstallArgs),

    /// List registered applications
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
