//! Camera control options with TOML preset support.
//!
//! Options serialize to/from TOML so a host application can keep control
//! presets on disk next to its other settings. Every section uses
//! `#[serde(default)]`, so partial files override only what they name.

mod camera;

use std::path::Path;

pub use camera::{CameraOptions, ControlConfig};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitCamError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Orbit camera control parameters.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitCamError::OptionsParse`] on malformed TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, OrbitCamError> {
        toml::from_str(content)
            .map_err(|e| OrbitCamError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitCamError::Io`] if the file cannot be read and
    /// [`OrbitCamError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, OrbitCamError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`OrbitCamError::OptionsParse`] if serialization fails and
    /// [`OrbitCamError::Io`] if the file or its parent directory cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), OrbitCamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrbitCamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}
