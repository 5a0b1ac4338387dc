//! Configuration types and parsing for normflow.yml

use crate::error::{CoreError, CoreResult};
use crate::schema::DEFAULT_JSON_COLUMN;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "normflow.yml";

/// Destination warehouse the generated models target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    BigQuery,
    Postgres,
    Redshift,
    Snowflake,
}

impl Destination {
    /// All supported destinations
    pub const ALL: [Destination; 4] = [
        Destination::BigQuery,
        Destination::Postgres,
        Destination::Redshift,
        Destination::Snowflake,
    ];
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::BigQuery => write!(f, "bigquery"),
            Destination::Postgres => write!(f, "postgres"),
            Destination::Redshift => write!(f, "redshift"),
            Destination::Snowflake => write!(f, "snowflake"),
        }
    }
}

impl FromStr for Destination {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bigquery" => Ok(Destination::BigQuery),
            "postgres" | "postgresql" => Ok(Destination::Postgres),
            "redshift" => Ok(Destination::Redshift),
            "snowflake" => Ok(Destination::Snowflake),
            other => Err(CoreError::ConfigInvalid {
                message: format!(
                    "unknown destination '{}', expected one of bigquery, postgres, redshift, snowflake",
                    other
                ),
            }),
        }
    }
}

/// Normalization settings from normflow.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Destination warehouse
    pub destination: Destination,

    /// Schema receiving the final tables
    pub schema: String,

    /// Schema holding raw tables and staging models (default `_airbyte_<schema>`)
    #[serde(default)]
    pub raw_schema: Option<String>,

    /// Root directory for generated models
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Raw column holding the record JSON
    #[serde(default = "default_json_column")]
    pub json_column: String,

    /// Directory (under `output_path`) for staging models
    #[serde(default = "default_staging_dir")]
    pub staging_dir: String,

    /// Directory (under `output_path`) for final models
    #[serde(default = "default_final_dir")]
    pub final_dir: String,

    /// Only normalize these streams (all when empty)
    #[serde(default)]
    pub streams: Vec<String>,
}

fn default_output_path() -> String {
    "models/generated".to_string()
}

fn default_json_column() -> String {
    DEFAULT_JSON_COLUMN.to_string()
}

fn default_staging_dir() -> String {
    "airbyte_views".to_string()
}

fn default_final_dir() -> String {
    "airbyte_tables".to_string()
}

impl Config {
    /// Create a configuration with defaults for everything but the required keys.
    pub fn new(destination: Destination, schema: impl Into<String>) -> Self {
        Self {
            destination,
            schema: schema.into(),
            raw_schema: None,
            output_path: default_output_path(),
            json_column: default_json_column(),
            staging_dir: default_staging_dir(),
            final_dir: default_final_dir(),
            streams: Vec::new(),
        }
    }

    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a project directory containing normflow.yml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        Self::load(&dir.join(CONFIG_FILE_NAME))
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> CoreResult<Self> {
        let config: Config =
            serde_yaml::from_str(content).map_err(|e| CoreError::ConfigParseError {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot check
    pub fn validate(&self) -> CoreResult<()> {
        if self.schema.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "'schema' must not be empty".to_string(),
            });
        }
        if self.json_column.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "'json_column' must not be empty".to_string(),
            });
        }
        if self.staging_dir == self.final_dir {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "'staging_dir' and 'final_dir' must differ (both are '{}')",
                    self.final_dir
                ),
            });
        }
        if matches!(&self.raw_schema, Some(raw) if raw.trim().is_empty()) {
            return Err(CoreError::ConfigInvalid {
                message: "'raw_schema' must not be empty when set".to_string(),
            });
        }
        Ok(())
    }

    /// Raw schema name before normalization
    pub fn raw_schema_name(&self) -> String {
        self.raw_schema
            .clone()
            .unwrap_or_else(|| format!("_airbyte_{}", self.schema))
    }

    /// Output root as a path
    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.output_path)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
