use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::reporter::ReportFormat;

/// JSON schema every configuration file is checked against before it is
/// deserialized.
pub const CONFIG_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "courseware-upconvert configuration",
  "type": "object",
  "additionalProperties": false,
  "properties": {
    "schema_root": { "type": "string", "minLength": 1 },
    "strict_validation": { "type": "boolean" },
    "make_backup": { "type": "boolean" },
    "confirm_unknown_version": { "type": "boolean" },
    "report_format": { "type": "string", "enum": ["console", "json", "yaml"] }
  }
}"#;

/// Settings read from an optional YAML file. Command line flags take
/// precedence over anything set here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpconvertConfig {
    /// Directory holding one `v<version>` folder of schemas per generation.
    /// When set, every converter's schemas must be present there.
    pub schema_root: Option<PathBuf>,
    pub strict_validation: bool,
    pub make_backup: bool,
    pub confirm_unknown_version: bool,
    pub report_format: ReportFormat,
}

impl Default for UpconvertConfig {
    fn default() -> Self {
        Self {
            schema_root: None,
            strict_validation: false,
            make_backup: false,
            confirm_unknown_version: false,
            report_format: ReportFormat::Console,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Failed to compile the config schema: {0}")]
    Schema(String),

    #[error("Config validation failed with {} error(s):\n{}", .errors.len(), .errors.join("\n"))]
    Invalid { errors: Vec<String> },

    #[error("Failed to deserialize config: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl UpconvertConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded config file");
        Self::from_yaml_str(&text)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let instance: serde_json::Value = serde_yaml::from_str(text)?;
        if instance.is_null() {
            return Ok(Self::default());
        }
        validate_against_schema(&instance)?;
        Ok(serde_json::from_value(instance)?)
    }
}

fn validate_against_schema(instance: &serde_json::Value) -> Result<(), ConfigError> {
    let schema_json: serde_json::Value = serde_json::from_str(CONFIG_SCHEMA)?;
    let compiled_schema = jsonschema::JSONSchema::compile(&schema_json)
        .map_err(|e| ConfigError::Schema(e.to_string()))?;

    if let Err(errors) = compiled_schema.validate(instance) {
        let errors: Vec<String> = errors
            .map(|error| format!("{}: {}", error.instance_path, error))
            .collect();
        return Err(ConfigError::Invalid { errors });
    }
    Ok(())
}
