//! dbt `sources.yml` describing the raw tables the models read from

use nf_core::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Name of the generated sources file
pub const SOURCES_FILE_NAME: &str = "sources.yml";

/// Raw tables referenced during compilation, grouped by schema
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawSources {
    tables: BTreeMap<String, BTreeSet<String>>,
}

/// Serialized `sources.yml`
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SourcesFile {
    pub version: u32,
    pub sources: Vec<SourceEntry>,
}

/// One raw schema
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SourceEntry {
    pub name: String,
    pub quoting: SourceQuoting,
    pub tables: Vec<SourceTable>,
}

/// Quoting flags handed to dbt for raw relations
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SourceQuoting {
    pub database: bool,
    pub schema: bool,
    pub identifier: bool,
}

impl Default for SourceQuoting {
    fn default() -> Self {
        Self {
            database: true,
            schema: false,
            identifier: false,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SourceTable {
    pub name: String,
}

impl RawSources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw table; repeated tables are kept once
    pub fn add(&mut self, schema: &str, table: &str) {
        self.tables
            .entry(schema.to_string())
            .or_default()
            .insert(table.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Number of distinct raw tables
    pub fn table_count(&self) -> usize {
        self.tables.values().map(BTreeSet::len).sum()
    }

    pub fn to_file(&self) -> SourcesFile {
        SourcesFile {
            version: 2,
            sources: self
                .tables
                .iter()
                .map(|(schema, tables)| SourceEntry {
                    name: schema.clone(),
                    quoting: SourceQuoting::default(),
                    tables: tables
                        .iter()
                        .map(|name| SourceTable { name: name.clone() })
                        .collect(),
                })
                .collect(),
        }
    }

    pub fn to_yaml(&self) -> CoreResult<String> {
        Ok(serde_yaml::to_string(&self.to_file())?)
    }

    /// Write `sources.yml` into `dir`
    pub fn save(&self, dir: &Path) -> CoreResult<()> {
        let yaml = self.to_yaml()?;
        std::fs::create_dir_all(dir).map_err(|e| CoreError::IoWithPath {
            path: dir.display().to_string(),
            source: e,
        })?;
        let path = dir.join(SOURCES_FILE_NAME);
        std::fs::write(&path, yaml).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })
    }
}
