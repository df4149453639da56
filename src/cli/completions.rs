use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    launcher-uninstaller completions bash > ~/.bash_completion.d/launcher-uninstaller\n\n\
                  Generate zsh completions:\n    launcher-uninstaller completions zsh > ~/.zfunc/_launcher-uninstaller\n\n\
                  Generate PowerShell completions:\n    launcher-uninstaller completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
