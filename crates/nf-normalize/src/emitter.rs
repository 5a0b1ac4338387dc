//! Emission of rendered stage models.
//!
//! Every stage write returns a [`ModelRef`]: an opaque token the next stage
//! (or a child node) selects from, hiding whether the model landed in the
//! staging or the final area.

use nf_core::{compute_checksum, CoreError, CoreResult, OutputArea, Stage, TableName};
use nf_jinja::{config_header, ref_table, source_table};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// A rendered model ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct ModelArtifact {
    pub name: TableName,
    pub stage: Stage,
    /// Schema named in the config header
    pub schema: String,
    /// Path of the originating node, `/`-joined
    pub json_path: String,
    /// Relation the model selects from
    pub depends_on: ModelRef,
    pub sql: String,
}

impl ModelArtifact {
    pub fn area(&self) -> OutputArea {
        self.stage.area()
    }

    /// File contents: config header followed by the non-blank SQL lines
    pub fn contents(&self) -> String {
        let mut out = config_header(&self.schema);
        out.push('\n');
        for line in self.sql.lines().filter(|l| !l.trim().is_empty()) {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    pub fn checksum(&self) -> String {
        compute_checksum(&self.contents())
    }
}

/// Reference to a relation a model can select from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModelRef {
    /// A generated model, referenced with `ref()`
    Model(TableName),
    /// A raw table written by the loader, referenced with `source()`
    Source { schema: String, table: String },
}

impl ModelRef {
    pub fn model(name: TableName) -> Self {
        ModelRef::Model(name)
    }

    pub fn source(schema: impl Into<String>, table: impl Into<String>) -> Self {
        ModelRef::Source {
            schema: schema.into(),
            table: table.into(),
        }
    }

    /// Jinja expression selecting from the relation
    pub fn to_sql(&self) -> String {
        match self {
            ModelRef::Model(name) => ref_table(name),
            ModelRef::Source { schema, table } => source_table(schema, table),
        }
    }

    /// The referenced model, if this is not a raw source
    pub fn as_model(&self) -> Option<&TableName> {
        match self {
            ModelRef::Model(name) => Some(name),
            ModelRef::Source { .. } => None,
        }
    }
}

impl fmt::Display for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelRef::Model(name) => write!(f, "{}", name),
            ModelRef::Source { schema, table } => write!(f, "{}.{}", schema, table),
        }
    }
}

/// Directory layout of the generated models
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub staging_dir: String,
    pub final_dir: String,
}

impl OutputLayout {
    pub fn new(staging_dir: impl Into<String>, final_dir: impl Into<String>) -> Self {
        Self {
            staging_dir: staging_dir.into(),
            final_dir: final_dir.into(),
        }
    }

    /// `<area dir>/<schema>/<name>.sql`, relative to the output root
    pub fn relative_path(&self, artifact: &ModelArtifact) -> PathBuf {
        let dir = match artifact.area() {
            OutputArea::Staging => &self.staging_dir,
            OutputArea::Final => &self.final_dir,
        };
        Path::new(dir)
            .join(&artifact.schema)
            .join(format!("{}.sql", artifact.name))
    }
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new("airbyte_views", "airbyte_tables")
    }
}

/// Destination of rendered models
pub trait ModelEmitter {
    /// Write one model and return the reference dependents select from
    fn emit(&mut self, artifact: &ModelArtifact) -> CoreResult<ModelRef>;
}

/// Writes models as `.sql` files under an output root
pub struct FileEmitter {
    root: PathBuf,
    layout: OutputLayout,
    written: usize,
    unchanged: usize,
}

impl FileEmitter {
    pub fn new(root: impl Into<PathBuf>, layout: OutputLayout) -> Self {
        Self {
            root: root.into(),
            layout,
            written: 0,
            unchanged: 0,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of files written
    pub fn written(&self) -> usize {
        self.written
    }

    /// Number of files skipped because their contents did not change
    pub fn unchanged(&self) -> usize {
        self.unchanged
    }
}

impl ModelEmitter for FileEmitter {
    fn emit(&mut self, artifact: &ModelArtifact) -> CoreResult<ModelRef> {
        let relative = self.layout.relative_path(artifact);
        let path = self.root.join(&relative);
        let contents = artifact.contents();

        log::info!(
            "Generating {} from {}",
            relative.display(),
            artifact.json_path
        );

        let unchanged = std::fs::read_to_string(&path)
            .map(|existing| compute_checksum(&existing) == compute_checksum(&contents))
            .unwrap_or(false);
        if unchanged {
            log::debug!("{} is unchanged, skipping write", path.display());
            self.unchanged += 1;
        } else {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| CoreError::IoWithPath {
                    path: parent.display().to_string(),
                    source: e,
                })?;
            }
            std::fs::write(&path, &contents).map_err(|e| CoreError::IoWithPath {
                path: path.display().to_string(),
                source: e,
            })?;
            self.written += 1;
        }

        Ok(ModelRef::model(artifact.name.clone()))
    }
}

/// Keeps models in memory, keyed by name
#[derive(Debug, Default)]
pub struct MemoryEmitter {
    models: BTreeMap<TableName, ModelArtifact>,
}

impl MemoryEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&ModelArtifact> {
        self.models.get(name)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelArtifact> {
        self.models.values()
    }
}

impl ModelEmitter for MemoryEmitter {
    fn emit(&mut self, artifact: &ModelArtifact) -> CoreResult<ModelRef> {
        self.models.insert(artifact.name.clone(), artifact.clone());
        Ok(ModelRef::model(artifact.name.clone()))
    }
}

#[cfg(test)]
#[path = "emitter_test.rs"]
mod tests;
