//! Whole-catalog compilation.
//!
//! Every stream becomes a root node reading from its raw source table. Nodes
//! are expanded depth first from an explicit work stack; the table name
//! registry is shared by every node of the run.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::emitter::{ModelArtifact, ModelEmitter, ModelRef, OutputLayout};
use crate::processor::StreamProcessor;
use crate::sources::RawSources;
use crate::stage_builder::PipelineStageBuilder;
use nf_core::{
    Catalog, Config, CoreError, CoreResult, Manifest, ManifestModel, Node, Stage, TableName,
    TableNameRegistry,
};
use nf_jinja::ModelTemplates;
use nf_sql::{jinja_string, NameNormalizer, WarehouseDialect};

/// Prefix of the raw table the loader writes for each stream
pub const RAW_TABLE_PREFIX: &str = "_airbyte_raw_";

/// One processed node of the run
#[derive(Debug, Clone)]
pub struct CompiledNode {
    pub json_path: String,
    pub is_nested_array: bool,
    /// Table allocated for each stage, in stage order
    pub tables: Vec<(Stage, TableName)>,
}

/// Everything a compilation run produced besides the emitted models
#[derive(Debug)]
pub struct CompileReport {
    /// Processed nodes in depth-first order
    pub nodes: Vec<CompiledNode>,
    pub diagnostics: Vec<Diagnostic>,
    pub manifest: Manifest,
    pub sources: RawSources,
    pub registry: TableNameRegistry,
}

impl CompileReport {
    /// Number of emitted models
    pub fn model_count(&self) -> usize {
        self.manifest.models.len()
    }
}

/// Compiles a catalog for one configuration and dialect
pub struct Compiler<'a> {
    config: &'a Config,
    dialect: &'a dyn WarehouseDialect,
    templates: ModelTemplates,
}

impl<'a> Compiler<'a> {
    pub fn new(config: &'a Config, dialect: &'a dyn WarehouseDialect) -> CoreResult<Self> {
        let templates = ModelTemplates::new().map_err(|e| CoreError::RenderError {
            stage: "setup".to_string(),
            table: String::new(),
            message: e.to_string(),
        })?;
        Ok(Self {
            config,
            dialect,
            templates,
        })
    }

    pub fn layout(&self) -> OutputLayout {
        OutputLayout::new(&self.config.staging_dir, &self.config.final_dir)
    }

    /// Compile every selected stream of `catalog`, emitting models as they are built.
    ///
    /// The first fatal naming or IO error aborts the run.
    pub fn compile(
        &self,
        catalog: &Catalog,
        emitter: &mut dyn ModelEmitter,
    ) -> CoreResult<CompileReport> {
        let normalizer = NameNormalizer::new(self.dialect);
        let builder = PipelineStageBuilder::new(normalizer, &self.templates);
        let processor = StreamProcessor::new(normalizer, &builder);
        let layout = self.layout();

        let schema = normalizer.normalize_schema_name(&self.config.schema, true);
        let raw_schema = normalizer.normalize_schema_name(&self.config.raw_schema_name(), false);
        let json_accessor = jinja_string(&self.config.json_column);

        let mut selected = catalog.clone();
        selected.retain_streams(&self.config.streams);
        log::info!(
            "Compiling {} streams for {} into {}",
            selected.len(),
            self.dialect.name(),
            schema
        );

        let mut registry = TableNameRegistry::new();
        let mut diagnostics = Diagnostics::new();
        let mut manifest = Manifest::new(self.config.destination, &schema, &raw_schema);
        let mut sources = RawSources::new();
        let mut nodes = Vec::new();

        for stream in &selected.streams {
            let raw_table =
                normalizer.normalize_raw_table_name(&format!("{}{}", RAW_TABLE_PREFIX, stream.name));
            let root = Node::root(
                stream.name.as_str(),
                stream.properties(),
                json_accessor.as_str(),
                raw_schema.as_str(),
                schema.as_str(),
            );
            let mut pending: Vec<(Node, ModelRef)> =
                vec![(root, ModelRef::source(&raw_schema, &raw_table))];

            while let Some((node, from)) = pending.pop() {
                let Some(processed) =
                    processor.process(&node, &from, &mut registry, emitter, &mut diagnostics)?
                else {
                    continue;
                };
                if node.is_root() {
                    sources.add(&raw_schema, &raw_table);
                }
                for model in &processed.models {
                    manifest.add_model(manifest_entry(&layout, model));
                }
                nodes.push(CompiledNode {
                    json_path: node.json_path(),
                    is_nested_array: node.is_nested_array,
                    tables: processed
                        .models
                        .iter()
                        .map(|m| (m.stage, m.name.clone()))
                        .collect(),
                });
                // reversed so children are expanded in declaration order
                for child in processed.children.into_iter().rev() {
                    pending.push((child, processed.final_ref.clone()));
                }
            }
        }

        log::info!(
            "Compiled {} nodes into {} models ({} warnings)",
            nodes.len(),
            manifest.models.len(),
            diagnostics.len()
        );
        Ok(CompileReport {
            nodes,
            diagnostics: diagnostics.into_vec(),
            manifest,
            sources,
            registry,
        })
    }
}

fn manifest_entry(layout: &OutputLayout, model: &ModelArtifact) -> ManifestModel {
    let path = layout
        .relative_path(model)
        .iter()
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    ManifestModel {
        name: model.name.clone(),
        stage: model.stage,
        area: model.area(),
        schema: model.schema.clone(),
        path,
        json_path: model.json_path.clone(),
        depends_on: model.depends_on.to_string(),
        checksum: model.checksum(),
    }
}

/// Compile `catalog` with the dialect of the configured destination
pub fn compile_catalog(
    config: &Config,
    catalog: &Catalog,
    emitter: &mut dyn ModelEmitter,
) -> CoreResult<CompileReport> {
    let dialect = nf_sql::dialect_for(config.destination);
    Compiler::new(config, dialect.as_ref())?.compile(catalog, emitter)
}
