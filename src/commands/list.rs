//! List command implementation
//!
//! Lists every application with a software entry, optionally with the
//! shortcut paths the entry records.

use console::Style;

use crate::cli::ListArgs;
use crate::commands::GlobalOptions;
use crate::config::{LauncherSettings, SettingsOverrides};
use crate::error::Result;
use crate::registry::{FileRegistry, SoftwareEntry, SoftwareRegistry};

/// Run list command
pub fn run(global: GlobalOptions, args: ListArgs) -> Result<()> {
    let settings = LauncherSettings::resolve(
        global.home,
        SettingsOverrides {
            registry_dir: global.registry_dir,
            ..Default::default()
        },
    )?;
    let registry = FileRegistry::new(&settings.registry_dir);
    tracing::debug!(registry = %registry.root().display(), "Reading software entries");

    print!("{}", render_entries(&registry.entries()?, args.detailed));
    Ok(())
}

fn render_entries(entries: &[(String, SoftwareEntry)], detailed: bool) -> String {
    if entries.is_empty() {
        return "No applications registered.\n".to_string();
    }

    let mut out = format!("Registered applications ({}):\n\n", entries.len());
    for (key, entry) in entries {
        out.push_str(&format!(
            "  {}\n",
            Style::new().bold().yellow().apply_to(key)
        ));
        if detailed {
            let none = "-".to_string();
            let desktop = entry
                .desktop_shortcut_path
                .as_ref()
                .map_or(none.clone(), |p| p.display().to_string());
            let start_menu = entry
                .start_menu_shortcut_path
                .as_ref()
                .map_or(none, |p| p.display().to_string());
            out.push_str(&format!("    Desktop:    {desktop}\n"));
            out.push_str(&format!("    Start menu: {start_menu}\n"));
        }
    }
    out
}
