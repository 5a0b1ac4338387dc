//! Manifest of the models generated by one compilation run

use crate::config::Destination;
use crate::error::{CoreError, CoreResult};
use crate::stage::{OutputArea, Stage};
use crate::table_name::TableName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// The manifest file written next to the generated models
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Timestamp when compiled
    pub compiled_at: String,

    /// Destination warehouse the models target
    pub destination: Destination,

    /// Final schema
    pub schema: String,

    /// Raw/staging schema
    pub raw_schema: String,

    /// Generated models keyed by table name
    pub models: BTreeMap<TableName, ManifestModel>,
}

/// A generated model entry in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestModel {
    /// Table (and model) name
    pub name: TableName,

    /// Pipeline stage the model implements
    pub stage: Stage,

    /// Staging or final area
    pub area: OutputArea,

    /// Schema named in the model's config header
    pub schema: String,

    /// Path of the model file relative to the output root
    pub path: String,

    /// Path of the originating node (`stream/field/...`)
    pub json_path: String,

    /// Model or source the stage selects from
    pub depends_on: String,

    /// SHA-256 checksum of the model text
    pub checksum: String,
}

impl Manifest {
    /// Create an empty manifest
    pub fn new(destination: Destination, schema: &str, raw_schema: &str) -> Self {
        Self {
            compiled_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            destination,
            schema: schema.to_string(),
            raw_schema: raw_schema.to_string(),
            models: BTreeMap::new(),
        }
    }

    /// Add a model, replacing a previous entry with the same name
    pub fn add_model(&mut self, model: ManifestModel) {
        self.models.insert(model.name.clone(), model);
    }

    /// Get a model by table name
    pub fn get_model(&self, name: &str) -> Option<&ManifestModel> {
        self.models.get(name)
    }

    /// Models that belong to one node, in stage order
    pub fn models_for_path(&self, json_path: &str) -> Vec<&ManifestModel> {
        let mut models: Vec<&ManifestModel> = self
            .models
            .values()
            .filter(|m| m.json_path == json_path)
            .collect();
        models.sort_by_key(|m| m.stage);
        models
    }

    /// Write the manifest as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CoreError::IoWithPath {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let temp_path = path.with_extension(format!("json.{}.tmp", std::process::id()));
        std::fs::write(&temp_path, &json).map_err(|e| CoreError::IoWithPath {
            path: temp_path.display().to_string(),
            source: e,
        })?;
        std::fs::rename(&temp_path, path).map_err(|e| {
            let _ = std::fs::remove_file(&temp_path);
            CoreError::IoWithPath {
                path: path.display().to_string(),
                source: e,
            }
        })?;
        Ok(())
    }

    /// Load a manifest from a file
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}
