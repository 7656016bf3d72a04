//! Configuration loading.

use crate::export::ExportOptions;
use crate::tools::ToolSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything a host can configure up front.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchpadConfig {
    /// Initial control values.
    pub tools: ToolSettings,
    /// Snapshot export settings.
    pub export: ExportOptions,
}

impl SketchpadConfig {
    /// Deserialize from JSON. Missing sections and fields use defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
