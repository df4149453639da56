//! Application descriptor (click-and-start file) data structures
//!
//! The descriptor identifies one installed client application. It is written
//! by the server as JSON and handed to the launcher when the application is
//! installed; uninstalling receives the same file.

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::error::config::{descriptor_invalid, descriptor_not_found, descriptor_parse_failed};

/// Server the application was installed from
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RemoteHost {
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub token: String,
}

/// Identifies one application of one instance
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClickAndStartDescriptor {
    /// Instance group the instance belongs to
    #[serde(default)]
    pub group_id: String,

    /// Instance the application belongs to
    #[serde(default)]
    pub instance_id: String,

    /// Application identifier, also the software entry key
    #[serde(default)]
    pub application_id: String,

    /// Not needed for removal but always present in real descriptors
    #[serde(default)]
    pub host: Option<RemoteHost>,
}

impl ClickAndStartDescriptor {
    /// Read, parse and validate a descriptor file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(descriptor_not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| descriptor_parse_failed(path.display().to_string(), e.to_string()))?;
        let descriptor = Self::from_json(&content)
            .map_err(|e| descriptor_parse_failed(path.display().to_string(), e.to_string()))?;

        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Parse a descriptor from JSON without validating it
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check that all identifiers are usable
    pub fn validate(&self) -> Result<()> {
        validate_id("groupId", &self.group_id)?;
        validate_id("instanceId", &self.instance_id)?;
        validate_id("applicationId", &self.application_id)?;

        // The application id is used as a registry key and must not escape it
        let app = self.application_id.as_str();
        if app == "." || app == ".." || app.contains(['/', '\\']) {
            return Err(descriptor_invalid(format!(
                "applicationId '{app}' must not be a path"
            )));
        }
        Ok(())
    }
}

fn validate_id(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(descriptor_invalid(format!("{field} is missing or empty")));
    }
    if value.chars().any(char::is_control) {
        return Err(descriptor_invalid(format!(
            "{field} contains control characters"
        )));
    }
    Ok(())
}
