//! Embedded runtime and external launcher invocation
//!
//! The launcher is a Java program shipped with its own runtime:
//!
//! ```text
//! <home>/jre/bin/java
//! <home>/lib/*.jar
//! ```
//!
//! Uninstalling an application is delegated to it through
//! `java [jvm args] -cp <home>/lib/* <main class> uninstaller --app=<id>`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::LauncherSettings;
use crate::error::{Result, UninstallError};

#[cfg(windows)]
const JAVA_EXECUTABLE: &str = "java.exe";
#[cfg(not(windows))]
const JAVA_EXECUTABLE: &str = "java";

/// Validated location of the embedded Java runtime and class path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedRuntime {
    java: PathBuf,
    lib_dir: PathBuf,
}

impl EmbeddedRuntime {
    /// Check that the launcher home carries a runtime and a class path
    pub fn locate(home: &Path) -> Result<Self> {
        let java = home.join("jre").join("bin").join(JAVA_EXECUTABLE);
        if !java.is_file() {
            return Err(UninstallError::RuntimeMissing {
                path: java.display().to_string(),
            });
        }

        let lib_dir = home.join("lib");
        if !lib_dir.is_dir() {
            return Err(UninstallError::RuntimeMissing {
                path: lib_dir.display().to_string(),
            });
        }

        Ok(Self { java, lib_dir })
    }

    pub fn java(&self) -> &Path {
        &self.java
    }

    /// Class path wildcard covering every jar of the launcher
    pub fn class_path(&self) -> PathBuf {
        self.lib_dir.join("*")
    }
}

/// Something that can ask the launcher to uninstall an application
pub trait LauncherProcess {
    /// Human readable command line, used for logging and dry runs
    fn describe(&self, application_id: &str) -> String;

    /// Run the uninstaller and return its exit code
    fn run_uninstaller(&self, application_id: &str) -> Result<i32>;
}

/// Launcher started from the embedded runtime
#[derive(Debug, Clone)]
pub struct JreLauncher {
    runtime: EmbeddedRuntime,
    main_class: String,
    jvm_args: Vec<String>,
}

impl JreLauncher {
    pub fn new(runtime: EmbeddedRuntime, settings: &LauncherSettings) -> Self {
        Self {
            runtime,
            main_class: settings.main_class.clone(),
            jvm_args: settings.jvm_args.clone(),
        }
    }

    /// Arguments passed to `java`, in order
    pub fn uninstaller_args(&self, application_id: &str) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.jvm_args.iter().map(OsString::from).collect();
        args.push("-cp".into());
        args.push(self.runtime.class_path().into_os_string());
        args.push(OsString::from(&self.main_class));
        args.push("uninstaller".into());
        args.push(format!("--app={application_id}").into());
        args
    }
}

impl LauncherProcess for JreLauncher {
    fn describe(&self, application_id: &str) -> String {
        let args: Vec<String> = self
            .uninstaller_args(application_id)
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        format!("{} {}", self.runtime.java().display(), args.join(" "))
    }

    fn run_uninstaller(&self, application_id: &str) -> Result<i32> {
        tracing::debug!(command = %self.describe(application_id), "Starting launcher");

        let status = Command::new(self.runtime.java())
            .args(self.uninstaller_args(application_id))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| UninstallError::LauncherSpawnFailed {
                program: self.runtime.java().display().to_string(),
                reason: e.to_string(),
            })?;

        status.code().ok_or(UninstallError::LauncherTerminated)
    }
}
