//! Error types and handling for the uninstaller
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Every variant belongs to one of four fatal groups, each mapped to its own
//! process exit code by [`UninstallError::exit_code`]:
//! - configuration (bad or missing descriptor, malformed settings): `-1`
//! - environment (embedded runtime missing, launcher not startable): `-2`
//! - registration store (entry unreadable or not removable): `-3`
//! - external process (launcher exited non-zero): the launcher's own code
//!
//! Non-fatal filesystem problems are not errors; see [`FsWarning`].

pub mod config;
pub mod registry;


use std::fmt;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Exit code for configuration errors
pub const EXIT_CONFIGURATION: i32 = -1;
/// Exit code for environment errors
pub const EXIT_ENVIRONMENT: i32 = -2;
/// Exit code for registration store errors
pub const EXIT_REGISTRY: i32 = -3;
/// Exit code for a launcher that ended without an exit code
pub const EXIT_TERMINATED: i32 = -4;

/// Main error type for uninstall operations
#[derive(Error, Diagnostic, Debug)]
pub enum UninstallError {
    // Configuration errors
    #[error("Descriptor file not found: {path}")]
    #[diagnostic(
        code(uninstaller::config::descriptor_not_found),
        help("Pass the application descriptor that was used to install the application")
    )]
    DescriptorNotFound { path: String },

    #[error("Failed to parse descriptor file: {path}")]
    #[diagnostic(code(uninstaller::config::descriptor_parse_failed))]
    DescriptorParseFailed { path: String, reason: String },

    #[error("Invalid descriptor: {message}")]
    #[diagnostic(
        code(uninstaller::config::descriptor_invalid),
        help("The descriptor must name a group, an instance and an application")
    )]
    DescriptorInvalid { message: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(uninstaller::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(uninstaller::config::invalid))]
    ConfigInvalid { message: String },

    // Environment errors
    #[error("Embedded runtime is not usable: {path} is missing")]
    #[diagnostic(
        code(uninstaller::environment::runtime_missing),
        help("Reinstall the launcher or point --home at a directory containing jre/ and lib/")
    )]
    RuntimeMissing { path: String },

    #[error("Failed to start launcher: {program}")]
    #[diagnostic(code(uninstaller::environment::spawn_failed))]
    LauncherSpawnFailed { program: String, reason: String },

    #[error("Cannot determine launcher home: {reason}")]
    #[diagnostic(
        code(uninstaller::environment::home_unresolved),
        help("Set LAUNCHER_HOME or pass --home")
    )]
    HomeUnresolved { reason: String },

    // Registration store errors
    #[error("Failed to read software entry '{key}': {reason}")]
    #[diagnostic(code(uninstaller::registry::read_failed))]
    RegistryReadFailed { key: String, reason: String },

    #[error("Failed to remove software entry '{key}': {reason}")]
    #[diagnostic(
        code(uninstaller::registry::remove_failed),
        help("Check permissions of the registry directory")
    )]
    RegistryRemoveFailed { key: String, reason: String },

    // External process errors
    #[error("Launcher failed with exit code {code}")]
    #[diagnostic(
        code(uninstaller::launcher::failed),
        help("Inspect the launcher output above; the application was left installed")
    )]
    LauncherFailed { code: i32 },

    #[error("Launcher was terminated before reporting an exit code")]
    #[diagnostic(code(uninstaller::launcher::terminated))]
    LauncherTerminated,

    #[error("IO error: {message}")]
    #[diagnostic(code(uninstaller::fs::io_error))]
    IoError {
        message: String,
        #[source]
        source: Option<Box<std::io::Error>>,
    },
}

impl UninstallError {
    /// Process exit code reported for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            UninstallError::DescriptorNotFound { .. }
            | UninstallError::DescriptorParseFailed { .. }
            | UninstallError::DescriptorInvalid { .. }
            | UninstallError::ConfigParseFailed { .. }
            | UninstallError::ConfigInvalid { .. }
            | UninstallError::IoError { .. } => EXIT_CONFIGURATION,
            UninstallError::RuntimeMissing { .. }
            | UninstallError::LauncherSpawnFailed { .. }
            | UninstallError::HomeUnresolved { .. } => EXIT_ENVIRONMENT,
            UninstallError::RegistryReadFailed { .. }
            | UninstallError::RegistryRemoveFailed { .. } => EXIT_REGISTRY,
            UninstallError::LauncherFailed { code } => *code,
            UninstallError::LauncherTerminated => EXIT_TERMINATED,
        }
    }
}

impl From<std::io::Error> for UninstallError {
    fn from(err: std::io::Error) -> Self {
        UninstallError::IoError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, UninstallError>;

/// A filesystem deletion that did not succeed
///
/// Leftover shortcuts or directories are cosmetic residue, so these are
/// logged and collected instead of aborting the cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsWarning {
    pub path: PathBuf,
    pub reason: String,
}

impl FsWarning {
    pub fn new(path: &Path, reason: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FsWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.reason)
    }
}
