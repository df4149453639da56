use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List registered applications:\n    launcher-uninstaller list\n\n\
                  Show shortcut locations:\n    launcher-uninstaller list --detailed")]
pub struct ListArgs {
    /// Show shortcut paths of every entry
    #[arg(long)]
    pub detailed: bool,
}
