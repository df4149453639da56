//! Configuration handling
//!
//! - [`descriptor`]: the application descriptor handed to the uninstaller
//! - [`LauncherSettings`]: where the launcher lives and how to invoke it
//!
//! Settings are layered: command line flags (and their environment variables,
//! handled by clap) win over `launcher.yaml` in the launcher home, which wins
//! over built-in defaults.

pub mod descriptor;

pub use descriptor::ClickAndStartDescriptor;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::config::{invalid, parse_failed};
use crate::error::{Result, UninstallError};

/// Optional settings file inside the launcher home
pub const SETTINGS_FILE: &str = "launcher.yaml";

/// Entry point of the launcher class path
pub const DEFAULT_MAIN_CLASS: &str = "io.bdeploy.launcher.cli.LauncherCli";

/// Contents of `launcher.yaml`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    /// Registry directory, relative paths are resolved against the launcher home
    #[serde(default)]
    pub registry_dir: Option<PathBuf>,

    #[serde(default)]
    pub main_class: Option<String>,

    /// Extra JVM arguments placed before the class path
    #[serde(default)]
    pub jvm_args: Vec<String>,
}

impl SettingsFile {
    /// Parse settings from YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty file deserializes to unit, not to an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Load `launcher.yaml` from the launcher home, if there is one
    pub fn load(home: &Path) -> Result<Self> {
        let path = home.join(SETTINGS_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| parse_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&content).map_err(|e| parse_failed(path.display().to_string(), e.to_string()))
    }
}

/// Values given on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub registry_dir: Option<PathBuf>,
    pub main_class: Option<String>,
    pub jvm_args: Vec<String>,
}

/// Fully resolved launcher settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherSettings {
    pub home: PathBuf,
    pub registry_dir: PathBuf,
    pub main_class: String,
    pub jvm_args: Vec<String>,
}

impl LauncherSettings {
    /// Resolve settings for the given (or default) launcher home
    pub fn resolve(home: Option<PathBuf>, overrides: SettingsOverrides) -> Result<Self> {
        let home = match home {
            Some(home) => home,
            None => default_home()?,
        };
        let file = SettingsFile::load(&home)?;
        Self::merge(home, file, overrides, default_registry_dir)
    }

    fn merge(
        home: PathBuf,
        file: SettingsFile,
        overrides: SettingsOverrides,
        fallback_registry: impl FnOnce() -> Result<PathBuf>,
    ) -> Result<Self> {
        let registry_dir = match (overrides.registry_dir, file.registry_dir) {
            (Some(dir), _) => dir,
            (None, Some(dir)) if dir.is_relative() => home.join(dir),
            (None, Some(dir)) => dir,
            (None, None) => fallback_registry()?,
        };

        let main_class = overrides
            .main_class
            .or(file.main_class)
            .unwrap_or_else(|| DEFAULT_MAIN_CLASS.to_string());
        if main_class.trim().is_empty() || main_class.contains(char::is_whitespace) {
            return Err(invalid(format!("main class '{main_class}' is not a class name")));
        }

        let jvm_args = if overrides.jvm_args.is_empty() {
            file.jvm_args
        } else {
            overrides.jvm_args
        };

        Ok(Self {
            home,
            registry_dir,
            main_class,
            jvm_args,
        })
    }
}

/// Directory of the running executable
///
/// The launcher ships the uninstaller next to its `jre/` and `lib/` folders.
pub fn default_home() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| UninstallError::HomeUnresolved {
        reason: e.to_string(),
    })?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| UninstallError::HomeUnresolved {
            reason: format!("{} has no parent directory", exe.display()),
        })
}

/// Per-user registry location
pub fn default_registry_dir() -> Result<PathBuf> {
    dirs::data_local_dir()
        .map(|dir| dir.join("launcher").join("registry"))
        .ok_or_else(|| invalid("no local data directory; pass --registry-dir"))
}
