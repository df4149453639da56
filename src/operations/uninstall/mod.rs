//! Uninstall operation module
//!
//! This module provides UninstallOperation, which removes one application:
//! the launcher is asked to uninstall it first, and only when that succeeds
//! the software entry is dropped and its shortcuts are cleaned up.

pub mod cascade;

use std::path::PathBuf;

use crate::cli::UninstallArgs;
use crate::config::ClickAndStartDescriptor;
use crate::error::{FsWarning, Result, UninstallError};
use crate::launcher::LauncherProcess;
use crate::registry::{SoftwareEntry, SoftwareRegistry};

pub use cascade::{remove_shortcuts, shortcut_ancestors};

/// Configuration options for uninstall
#[derive(Debug, Clone, Default)]
pub struct UninstallOptions {
    pub dry_run: bool,
}

impl From<&UninstallArgs> for UninstallOptions {
    fn from(args: &UninstallArgs) -> Self {
        Self {
            dry_run: args.dry_run,
        }
    }
}

/// Result of a completed uninstall
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UninstallReport {
    pub application_id: String,
    pub entry_removed: bool,
    pub removed_files: Vec<PathBuf>,
    pub removed_dirs: Vec<PathBuf>,
    pub warnings: Vec<FsWarning>,
}

/// What an uninstall would do, computed without touching anything
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UninstallPlan {
    pub application_id: String,
    pub command: String,
    pub entry: Option<SoftwareEntry>,
    pub candidate_dirs: Vec<PathBuf>,
}

/// High-level uninstall operation
pub struct UninstallOperation<'a> {
    launcher: &'a dyn LauncherProcess,
    registry: &'a dyn SoftwareRegistry,
    options: UninstallOptions,
}

impl<'a> UninstallOperation<'a> {
    pub fn new(
        launcher: &'a dyn LauncherProcess,
        registry: &'a dyn SoftwareRegistry,
        options: UninstallOptions,
    ) -> Self {
        Self {
            launcher,
            registry,
            options,
        }
    }

    pub fn options(&self) -> &UninstallOptions {
        &self.options
    }

    /// Describe the uninstall without running the launcher or deleting anything
    pub fn plan(&self, descriptor: &ClickAndStartDescriptor) -> Result<UninstallPlan> {
        let application_id = descriptor.application_id.clone();
        let entry = self.registry.read(&application_id)?;
        let candidate_dirs = entry
            .as_ref()
            .and_then(|e| e.start_menu_shortcut_path.as_deref())
            .map(shortcut_ancestors)
            .unwrap_or_default();

        Ok(UninstallPlan {
            command: self.launcher.describe(&application_id),
            application_id,
            entry,
            candidate_dirs,
        })
    }

    /// Run the cascade for a validated descriptor
    pub fn execute(&self, descriptor: &ClickAndStartDescriptor) -> Result<UninstallReport> {
        let application_id = descriptor.application_id.as_str();
        tracing::info!(
            "Requesting to uninstall application {} of instance {}/{}",
            application_id,
            descriptor.group_id,
            descriptor.instance_id
        );

        // Registration and files stay untouched unless the launcher succeeded
        let code = self.launcher.run_uninstaller(application_id)?;
        if code != 0 {
            return Err(UninstallError::LauncherFailed { code });
        }

        let mut report = UninstallReport {
            application_id: application_id.to_string(),
            ..Default::default()
        };

        let Some(entry) = self.registry.read(application_id)? else {
            tracing::debug!(application_id, "No software entry registered");
            return Ok(report);
        };

        report.entry_removed = self.registry.remove(application_id)?;

        let outcome = remove_shortcuts(&entry);
        report.removed_files = outcome.removed_files;
        report.removed_dirs = outcome.removed_dirs;
        report.warnings = outcome.warnings;

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::registry::remove_failed;
    use crate::registry::FileRegistry;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    /// Launcher double that records calls and returns a fixed exit code
    struct FakeLauncher {
        exit_code: std::result::Result<i32, ()>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeLauncher {
        fn exiting(code: i32) -> Self {
            Self {
                exit_code: Ok(code),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn killed() -> Self {
            Self {
                exit_code: Err(()),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl LauncherProcess for FakeLauncher {
        fn describe(&self, application_id: &str) -> String {
            format!("java uninstaller --app={application_id}")
        }

        fn run_uninstaller(&self, application_id: &str) -> Result<i32> {
            self.calls.borrow_mut().push(application_id.to_string());
            self.exit_code.map_err(|()| UninstallError::LauncherTerminated)
        }
    }

    /// Registry double that reads through to a real registry but cannot delete
    struct FailingRemoveRegistry<'a> {
        inner: &'a FileRegistry,
    }

    impl SoftwareRegistry for FailingRemoveRegistry<'_> {
        fn read(&self, key: &str) -> Result<Option<SoftwareEntry>> {
            self.inner.read(key)
        }

        fn remove(&self, key: &str) -> Result<bool> {
            Err(remove_failed(key, "access denied"))
        }

        fn entries(&self) -> Result<Vec<(String, SoftwareEntry)>> {
            self.inner.entries()
        }
    }

    struct Fixture {
        temp: TempDir,
        registry: FileRegistry,
    }

    impl Fixture {
        fn new() -> Self {
            let temp = TempDir::new().unwrap();
            let registry = FileRegistry::new(temp.path().join("registry"));
            Self { temp, registry }
        }

        fn menu_link(&self) -> PathBuf {
            let dir = self.temp.path().join("menu/Vendor/Group/Instance");
            fs::create_dir_all(&dir).unwrap();
            let link = dir.join("App.desktop");
            fs::write(&link, "x").unwrap();
            link
        }

        fn desktop_link(&self) -> PathBuf {
            let link = self.temp.path().join("App.desktop");
            fs::write(&link, "x").unwrap();
            link
        }

        fn register(&self, desktop: Option<PathBuf>, start_menu: Option<PathBuf>) {
            self.registry
                .write(
                    "app-1",
                    &SoftwareEntry {
                        desktop_shortcut_path: desktop,
                        start_menu_shortcut_path: start_menu,
                    },
                )
                .unwrap();
        }
    }

    fn descriptor() -> ClickAndStartDescriptor {
        ClickAndStartDescriptor {
            group_id: "Group".to_string(),
            instance_id: "Instance".to_string(),
            application_id: "app-1".to_string(),
            host: None,
        }
    }

    #[test]
    fn test_full_cascade() {
        let fixture = Fixture::new();
        let desktop = fixture.desktop_link();
        let menu = fixture.menu_link();
        fixture.register(Some(desktop.clone()), Some(menu.clone()));
        let launcher = FakeLauncher::exiting(0);

        let report = UninstallOperation::new(&launcher, &fixture.registry, Default::default())
            .execute(&descriptor())
            .unwrap();

        assert_eq!(*launcher.calls.borrow(), vec!["app-1".to_string()]);
        assert!(report.entry_removed);
        assert_eq!(report.removed_files, vec![desktop, menu]);
        assert_eq!(report.removed_dirs.len(), 3);
        assert!(!fixture.temp.path().join("menu/Vendor").exists());
        assert!(fixture.temp.path().join("menu").exists());
        assert_eq!(fixture.registry.read("app-1").unwrap(), None);
    }

    #[test]
    fn test_launcher_failure_leaves_everything() {
        let fixture = Fixture::new();
        let menu = fixture.menu_link();
        fixture.register(None, Some(menu.clone()));
        let launcher = FakeLauncher::exiting(3);

        let err = UninstallOperation::new(&launcher, &fixture.registry, Default::default())
            .execute(&descriptor())
            .unwrap_err();

        assert!(matches!(err, UninstallError::LauncherFailed { code: 3 }));
        assert_eq!(err.exit_code(), 3);
        assert!(fixture.registry.read("app-1").unwrap().is_some());
        assert!(menu.exists());
    }

    #[test]
    fn test_killed_launcher_leaves_everything() {
        let fixture = Fixture::new();
        fixture.register(Some(fixture.desktop_link()), None);
        let launcher = FakeLauncher::killed();

        let result = UninstallOperation::new(&launcher, &fixture.registry, Default::default())
            .execute(&descriptor());

        assert!(matches!(result, Err(UninstallError::LauncherTerminated)));
        assert!(fixture.registry.read("app-1").unwrap().is_some());
    }

    #[test]
    fn test_no_entry_is_success_without_deletions() {
        let fixture = Fixture::new();
        let menu = fixture.menu_link();
        let launcher = FakeLauncher::exiting(0);

        let report = UninstallOperation::new(&launcher, &fixture.registry, Default::default())
            .execute(&descriptor())
            .unwrap();

        assert!(!report.entry_removed);
        assert!(report.removed_files.is_empty());
        assert!(report.removed_dirs.is_empty());
        assert!(menu.exists());
    }

    #[test]
    fn test_uninstall_twice_succeeds() {
        let fixture = Fixture::new();
        fixture.register(Some(fixture.desktop_link()), Some(fixture.menu_link()));
        let launcher = FakeLauncher::exiting(0);
        let operation = UninstallOperation::new(&launcher, &fixture.registry, Default::default());

        let first = operation.execute(&descriptor()).unwrap();
        let second = operation.execute(&descriptor()).unwrap();

        assert!(first.entry_removed);
        assert!(!second.entry_removed);
        assert!(second.removed_files.is_empty());
        assert_eq!(launcher.calls.borrow().len(), 2);
    }

    #[test]
    fn test_corrupt_entry_aborts_before_deletion() {
        let fixture = Fixture::new();
        let desktop = fixture.desktop_link();
        fs::create_dir_all(fixture.registry.root()).unwrap();
        fs::write(fixture.registry.root().join("app-1.yaml"), "desktopShortcutPath: [").unwrap();
        let launcher = FakeLauncher::exiting(0);

        let result = UninstallOperation::new(&launcher, &fixture.registry, Default::default())
            .execute(&descriptor());

        assert!(matches!(
            result,
            Err(UninstallError::RegistryReadFailed { .. })
        ));
        assert!(desktop.exists());
    }

    #[test]
    fn test_failed_entry_removal_aborts_before_deletion() {
        let fixture = Fixture::new();
        let desktop = fixture.desktop_link();
        let menu = fixture.menu_link();
        fixture.register(Some(desktop.clone()), Some(menu.clone()));
        let registry = FailingRemoveRegistry {
            inner: &fixture.registry,
        };
        let launcher = FakeLauncher::exiting(0);

        let err = UninstallOperation::new(&launcher, &registry, Default::default())
            .execute(&descriptor())
            .unwrap_err();

        assert!(matches!(err, UninstallError::RegistryRemoveFailed { .. }));
        assert_eq!(err.exit_code(), -3);
        assert!(desktop.exists());
        assert!(menu.exists());
        assert!(fixture.temp.path().join("menu/Vendor/Group/Instance").is_dir());
        assert!(fixture.registry.read("app-1").unwrap().is_some());
    }

    #[test]
    fn test_plan_does_not_touch_anything() {
        let fixture = Fixture::new();
        let menu = fixture.menu_link();
        fixture.register(None, Some(menu.clone()));
        let launcher = FakeLauncher::exiting(0);

        let plan = UninstallOperation::new(
            &launcher,
            &fixture.registry,
            UninstallOptions { dry_run: true },
        )
        .plan(&descriptor())
        .unwrap();

        assert_eq!(plan.command, "java uninstaller --app=app-1");
        assert_eq!(plan.candidate_dirs.len(), 3);
        assert_eq!(plan.candidate_dirs[0], menu.parent().unwrap().to_path_buf());
        assert!(launcher.calls.borrow().is_empty());
        assert!(menu.exists());
        assert!(fixture.registry.read("app-1").unwrap().is_some());
    }
}
