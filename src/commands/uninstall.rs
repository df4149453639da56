//! Uninstall command CLI wrapper
//!
//! Validates the descriptor, the settings and the embedded runtime (in that
//! order, before anything is changed) and hands over to UninstallOperation.

use console::Style;

use crate::cli::UninstallArgs;
use crate::commands::GlobalOptions;
use crate::config::{ClickAndStartDescriptor, LauncherSettings, SettingsOverrides};
use crate::error::Result;
use crate::launcher::{EmbeddedRuntime, JreLauncher};
use crate::operations::uninstall::{UninstallOperation, UninstallOptions, UninstallPlan};
use crate::registry::FileRegistry;

/// Run uninstall command
pub fn run(global: GlobalOptions, args: UninstallArgs) -> Result<()> {
    let descriptor = ClickAndStartDescriptor::load(&args.descriptor)?;
    if let Some(host) = &descriptor.host {
        tracing::debug!(server = %host.uri, "Descriptor loaded");
    }

    let settings = LauncherSettings::resolve(
        global.home,
        SettingsOverrides {
            registry_dir: global.registry_dir,
            main_class: args.main_class.clone(),
            jvm_args: args.jvm_args.clone(),
        },
    )?;
    let runtime = EmbeddedRuntime::locate(&settings.home)?;

    let launcher = JreLauncher::new(runtime, &settings);
    let registry = FileRegistry::new(&settings.registry_dir);
    let operation = UninstallOperation::new(&launcher, &registry, UninstallOptions::from(&args));

    if operation.options().dry_run {
        let plan = operation.plan(&descriptor)?;
        print_plan(&plan);
        return Ok(());
    }

    let report = operation.execute(&descriptor)?;
    tracing::debug!(
        application_id = %report.application_id,
        entry_removed = report.entry_removed,
        files = report.removed_files.len(),
        dirs = report.removed_dirs.len(),
        warnings = report.warnings.len(),
        "Cleanup finished"
    );
    tracing::info!("Uninstallation successfully completed.");
    Ok(())
}

fn print_plan(plan: &UninstallPlan) {
    let bold = Style::new().bold();
    println!(
        "Dry run, nothing will be changed for {}",
        Style::new().bold().yellow().apply_to(&plan.application_id)
    );
    println!();
    println!("  {}", bold.apply_to("Launcher command:"));
    println!("    {}", plan.command);

    let Some(entry) = &plan.entry else {
        println!("  {}", bold.apply_to("No software entry registered."));
        return;
    };

    println!("  {}", bold.apply_to("Software entry to remove:"));
    if let Some(desktop) = &entry.desktop_shortcut_path {
        println!("    desktop shortcut    {}", desktop.display());
    }
    if let Some(start_menu) = &entry.start_menu_shortcut_path {
        println!("    start menu shortcut {}", start_menu.display());
    }
    if !plan.candidate_dirs.is_empty() {
        println!("  {}", bold.apply_to("Directories removed if left empty:"));
        for dir in &plan.candidate_dirs {
            println!("    {}", dir.display());
        }
    }
}
