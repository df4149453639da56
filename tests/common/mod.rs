//! Common test utilities for uninstaller integration tests
//!
//! [`TestLauncher`] lays out a launcher home whose `jre/bin/java` is a shell
//! script: it appends its arguments to `invocations.log` and exits with
//! `$FAKE_LAUNCHER_EXIT` (default 0).

#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

const FAKE_JAVA: &str = r#"#!/bin/sh
log="$(dirname "$0")/../../invocations.log"
for arg in "$@"; do
  printf '%s\n' "$arg" >> "$log"
done
echo "--" >> "$log"
exit "${FAKE_LAUNCHER_EXIT:-0}"
"#;

/// A launcher home, registry and start menu in one temporary directory
pub struct TestLauncher {
    pub temp: TempDir,
    pub home: PathBuf,
    pub registry: PathBuf,
}

impl TestLauncher {
    /// Create a launcher home with a working fake runtime
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let home = temp.path().join("launcher");
        let registry = temp.path().join("registry");

        let bin = home.join("jre").join("bin");
        std::fs::create_dir_all(&bin).expect("Failed to create jre directory");
        std::fs::create_dir_all(home.join("lib")).expect("Failed to create lib directory");

        let java = bin.join("java");
        std::fs::write(&java, FAKE_JAVA).expect("Failed to write fake java");
        std::fs::set_permissions(&java, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake java executable");

        Self {
            temp,
            home,
            registry,
        }
    }

    /// Command for the uninstaller binary wired to this launcher
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("launcher-uninstaller").expect("binary is built");
        cmd.env_remove("LAUNCHER_MAIN_CLASS");
        cmd.env_remove("LAUNCHER_LOG");
        cmd.env_remove("FAKE_LAUNCHER_EXIT");
        cmd.env("LAUNCHER_HOME", &self.home);
        cmd.env("LAUNCHER_REGISTRY_DIR", &self.registry);
        cmd
    }

    /// Write a descriptor file and return its path
    pub fn write_descriptor(&self, group: &str, instance: &str, app: &str) -> PathBuf {
        let path = self.temp.path().join(format!("{app}.json"));
        let json = format!(
            r#"{{"groupId":"{group}","instanceId":"{instance}","applicationId":"{app}","host":{{"uri":"https://localhost:7701/api","token":"t"}}}}"#
        );
        std::fs::write(&path, json).expect("Failed to write descriptor");
        path
    }

    /// Write raw descriptor content
    pub fn write_raw_descriptor(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        std::fs::write(&path, content).expect("Failed to write descriptor");
        path
    }

    /// Create a start menu shortcut at `<menu>/Vendor/<group>/<instance>/<name>`
    pub fn start_menu_link(&self, group: &str, instance: &str, name: &str) -> PathBuf {
        let dir = self.vendor_dir().join(group).join(instance);
        std::fs::create_dir_all(&dir).expect("Failed to create start menu directory");
        let link = dir.join(name);
        std::fs::write(&link, "[Desktop Entry]\n").expect("Failed to write shortcut");
        link
    }

    /// Create a desktop shortcut
    pub fn desktop_link(&self, name: &str) -> PathBuf {
        let dir = self.temp.path().join("Desktop");
        std::fs::create_dir_all(&dir).expect("Failed to create desktop directory");
        let link = dir.join(name);
        std::fs::write(&link, "[Desktop Entry]\n").expect("Failed to write shortcut");
        link
    }

    pub fn menu_dir(&self) -> PathBuf {
        self.temp.path().join("menu")
    }

    pub fn vendor_dir(&self) -> PathBuf {
        self.menu_dir().join("Vendor")
    }

    /// Register a software entry the way the installer would
    pub fn register(&self, app: &str, desktop: Option<&Path>, start_menu: Option<&Path>) {
        std::fs::create_dir_all(&self.registry).expect("Failed to create registry");
        let mut yaml = String::new();
        if let Some(path) = desktop {
            yaml.push_str(&format!("desktopShortcutPath: {}\n", path.display()));
        }
        if let Some(path) = start_menu {
            yaml.push_str(&format!("startMenuShortcutPath: {}\n", path.display()));
        }
        std::fs::write(self.entry_file(app), yaml).expect("Failed to write software entry");
    }

    /// Registry file of an application id made of plain characters
    pub fn entry_file(&self, app: &str) -> PathBuf {
        self.registry.join(format!("{app}.yaml"))
    }

    /// Argument lists the fake launcher was started with, one per call
    pub fn invocations(&self) -> Vec<Vec<String>> {
        let log = self.home.join("invocations.log");
        let Ok(content) = std::fs::read_to_string(log) else {
            return Vec::new();
        };

        let mut calls = Vec::new();
        let mut current = Vec::new();
        for line in content.lines() {
            if line == "--" {
                calls.push(std::mem::take(&mut current));
            } else {
                current.push(line.to_string());
            }
        }
        calls
    }
}

impl Default for TestLauncher {
    fn default() -> Self {
        Self::new()
    }
}

/// Exit status as observed by the parent for a code passed to `exit`
pub fn exit_status(code: i32) -> i32 {
    code & 0xff
}
