use clap::Parser;
use std::path::PathBuf;

/// Arguments for the uninstall command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Uninstall an application:\n    launcher-uninstaller uninstall ~/Downloads/client.json\n\n\
                  Show what would be removed:\n    launcher-uninstaller uninstall client.json --dry-run\n\n\
                  Pass extra JVM arguments to the launcher:\n    launcher-uninstaller uninstall client.json --jvm-arg -Xmx256m\n\n\
                  EXIT CODES:\n  \
                  0 success, -1 invalid descriptor or settings, -2 unusable runtime,\n  \
                  -3 registry failure, -4 launcher terminated; anything else is the launcher's own code")]
pub struct UninstallArgs {
    /// Application descriptor file the application was installed from
    pub descriptor: PathBuf,

    /// Show what would be uninstalled without actually uninstalling
    #[arg(long)]
    pub dry_run: bool,

    /// Launcher main class
    #[arg(long, env = "LAUNCHER_MAIN_CLASS", value_name = "CLASS")]
    pub main_class: Option<String>,

    /// Extra JVM argument, may be repeated
    #[arg(long = "jvm-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub jvm_args: Vec<String>,
}
