//! Launcher uninstaller
//!
//! Removes an application installed by the launcher: the launcher's own
//! uninstaller runs first, then the software entry, the shortcuts and any
//! start menu directories left empty are deleted.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod config;
mod error;
mod launcher;
mod logging;
mod operations;
mod registry;

use cli::{Cli, Commands};
use commands::GlobalOptions;
use logging::LogOptions;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&LogOptions {
        verbose: cli.verbose,
        log_file: cli.log_file.clone(),
    }) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }

    let global = GlobalOptions {
        home: cli.home,
        registry_dir: cli.registry_dir,
    };

    let result = match cli.command {
        Commands::Uninstall(args) => commands::uninstall::run(global, args),
        Commands::List(args) => commands::list::run(global, args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "Command failed");
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
