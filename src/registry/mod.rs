//! Registration store for installed applications
//!
//! Each installed application owns one [`SoftwareEntry`], keyed by its
//! application id, that records where its shortcuts were created. The
//! uninstaller reads the entry once and removes it.
//!
//! [`FileRegistry`] keeps one YAML document per entry in a directory; see
//! [`key`] for how ids map to file names.

pub mod key;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::error::registry::{read_failed, remove_failed};

/// Shortcut locations of one installed application
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop_shortcut_path: Option<PathBuf>,

    /// Stored as `<vendor>/<instance group>/<instance>/<link>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_menu_shortcut_path: Option<PathBuf>,
}

impl SoftwareEntry {
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }
}

/// Key-value store of software entries
pub trait SoftwareRegistry {
    /// Look up the entry for an application
    fn read(&self, key: &str) -> Result<Option<SoftwareEntry>>;

    /// Delete the entry for an application; returns whether one existed
    fn remove(&self, key: &str) -> Result<bool>;

    /// All readable registered entries, sorted by key
    fn entries(&self) -> Result<Vec<(String, SoftwareEntry)>>;
}

/// Directory-backed registry
#[derive(Debug, Clone)]
pub struct FileRegistry {
    root: PathBuf,
}

impl FileRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(key::to_file_name(key))
    }

    /// Store an entry, replacing any previous one
    #[cfg(test)]
    pub fn write(&self, key: &str, entry: &SoftwareEntry) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        let yaml = serde_yaml::to_string(entry).map_err(|e| read_failed(key, e.to_string()))?;
        std::fs::write(self.entry_path(key), yaml)?;
        Ok(())
    }
}

impl SoftwareRegistry for FileRegistry {
    fn read(&self, key: &str) -> Result<Option<SoftwareEntry>> {
        let path = self.entry_path(key);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(read_failed(key, e.to_string())),
        };

        SoftwareEntry::from_yaml(&content)
            .map(Some)
            .map_err(|e| read_failed(key, e.to_string()))
    }

    fn remove(&self, key: &str) -> Result<bool> {
        match std::fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(remove_failed(key, e.to_string())),
        }
    }

    fn entries(&self) -> Result<Vec<(String, SoftwareEntry)>> {
        let dir = match std::fs::read_dir(&self.root) {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(read_failed(self.root.display().to_string(), e.to_string())),
        };

        let mut entries = Vec::new();
        for item in dir {
            let item = item.map_err(|e| read_failed(self.root.display().to_string(), e.to_string()))?;
            let file_name = item.file_name();
            let Some(key) = file_name.to_str().and_then(key::from_file_name) else {
                tracing::debug!(file = ?file_name, "Skipping foreign file in registry");
                continue;
            };
            match self.read(&key) {
                Ok(Some(entry)) => entries.push((key, entry)),
                Ok(None) => {}
                Err(e) => tracing::warn!("Skipping unreadable software entry: {}", e),
            }
        }

        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(entries)
    }
}
