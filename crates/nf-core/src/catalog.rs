//! Catalog of streams to normalize in one run.

use crate::error::{CoreError, CoreResult};
use crate::schema::Properties;
use crate::table_name::StreamName;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// One stream as declared by the source connector.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamDefinition {
    /// Stream name, used as the root node name
    pub name: StreamName,

    /// JSON schema describing one record of the stream
    #[serde(default)]
    pub json_schema: Value,
}

impl StreamDefinition {
    /// Build a stream directly from a property mapping.
    pub fn new(name: impl Into<String>, properties: Properties) -> Self {
        Self {
            name: StreamName::new(name),
            json_schema: serde_json::json!({ "type": "object", "properties": properties }),
        }
    }

    /// Top-level properties in declaration order (empty when absent).
    pub fn properties(&self) -> Properties {
        self.json_schema
            .get("properties")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogEntry {
    Configured { stream: StreamDefinition },
    Bare(StreamDefinition),
}

impl From<CatalogEntry> for StreamDefinition {
    fn from(entry: CatalogEntry) -> Self {
        match entry {
            CatalogEntry::Configured { stream } => stream,
            CatalogEntry::Bare(stream) => stream,
        }
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    streams: Vec<CatalogEntry>,
}

/// Ordered collection of streams.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub streams: Vec<StreamDefinition>,
}

impl Catalog {
    /// Parse a catalog document.
    ///
    /// Accepts both configured entries (`{"stream": {...}}`) and bare stream
    /// definitions inside the top-level `streams` list.
    pub fn from_json_str(content: &str) -> CoreResult<Self> {
        let file: CatalogFile =
            serde_json::from_str(content).map_err(|e| CoreError::CatalogParseError {
                message: e.to_string(),
            })?;
        Ok(Self {
            streams: file.streams.into_iter().map(StreamDefinition::from).collect(),
        })
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json_str(&content)
    }

    /// Keep only the streams whose names appear in `names`.
    ///
    /// An empty allow-list keeps everything.
    pub fn retain_streams(&mut self, names: &[String]) {
        if names.is_empty() {
            return;
        }
        self.streams
            .retain(|s| names.iter().any(|n| n.as_str() == s.name.as_str()));
    }

    /// Number of streams in the catalog
    pub fn len(&self) -> usize {
        self.streams.len()
    }

    /// Whether the catalog has no streams
    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }
}
