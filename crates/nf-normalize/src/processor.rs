//! Decomposition of one node into its stage models and child nodes.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::discovery::find_nested_properties;
use crate::emitter::{ModelArtifact, ModelEmitter, ModelRef};
use crate::stage_builder::PipelineStageBuilder;
use nf_core::schema::{is_combining, DeclaredType};
use nf_core::{CoreResult, Node, OutputArea, ParentLink, Stage, TableNameRegistry, TableRole};
use nf_sql::NameNormalizer;

/// Result of processing one node
#[derive(Debug, Clone)]
pub struct ProcessedNode {
    /// Reference to the node's final table
    pub final_ref: ModelRef,

    /// The four emitted models, in stage order
    pub models: Vec<ModelArtifact>,

    /// Child nodes still to be processed, in declaration order
    pub children: Vec<Node>,
}

/// Drives the stage builder for one node at a time
pub struct StreamProcessor<'a> {
    normalizer: NameNormalizer<'a>,
    builder: &'a PipelineStageBuilder<'a>,
}

impl<'a> StreamProcessor<'a> {
    pub fn new(normalizer: NameNormalizer<'a>, builder: &'a PipelineStageBuilder<'a>) -> Self {
        Self {
            normalizer,
            builder,
        }
    }

    /// Emit the four stages of `node`, reading from `from`, and discover its children.
    ///
    /// Returns `None` when the node has no usable fields; nothing is emitted
    /// or registered in that case.
    pub fn process(
        &self,
        node: &Node,
        from: &ModelRef,
        registry: &mut TableNameRegistry,
        emitter: &mut dyn ModelEmitter,
        diagnostics: &mut Diagnostics,
    ) -> CoreResult<Option<ProcessedNode>> {
        if !node.has_usable_fields() {
            diagnostics.push(Diagnostic::SkippedStream {
                json_path: node.json_path(),
            });
            return Ok(None);
        }

        let base = self.builder.table_base(node);
        let mut current = from.clone();
        let mut models = Vec::with_capacity(Stage::ALL.len());

        for stage in Stage::ALL {
            let role = if stage == Stage::Final && node.is_root() {
                TableRole::TopLevelFinal
            } else {
                TableRole::Intermediate
            };
            let name = registry.allocate(&base, role, stage.suffix(), |candidate| {
                self.normalizer.normalize_table_name(candidate)
            })?;
            let model = self
                .builder
                .build(stage, node, &current.to_sql(), diagnostics)?;
            let schema = match stage.area() {
                OutputArea::Staging => node.raw_schema.clone(),
                OutputArea::Final => node.schema.clone(),
            };
            let artifact = ModelArtifact {
                name,
                stage,
                schema,
                json_path: node.json_path(),
                depends_on: current,
                sql: model.sql,
            };
            current = emitter.emit(&artifact)?;
            models.push(artifact);
        }

        let children = self.find_children(node, diagnostics);
        Ok(Some(ProcessedNode {
            final_ref: current,
            models,
            children,
        }))
    }

    /// Child nodes for the nested objects and arrays declared by `node`
    pub fn find_children(&self, node: &Node, diagnostics: &mut Diagnostics) -> Vec<Node> {
        let link = ParentLink {
            name: node.name.clone(),
            table_name: self.builder.table_base(node),
            hash_id: self.builder.raw_hash_id(node),
        };
        let mut children = Vec::new();

        for (field, definition) in node.usable_fields() {
            if is_combining(definition) {
                diagnostics.push(Diagnostic::UnsupportedConstruct {
                    json_path: node.json_path(),
                    field: field.clone(),
                });
                continue;
            }
            let column = self.normalizer.normalize_column_name(field, true);
            let (discovered, accessor, is_nested_array) = match DeclaredType::of(definition) {
                DeclaredType::Missing | DeclaredType::Object => {
                    (find_nested_properties(&[], field, definition), column, false)
                }
                DeclaredType::Array => match definition.get("items") {
                    Some(items) => (
                        find_nested_properties(&[], field, items),
                        self.normalizer.dialect().unnested_column_value(&column),
                        true,
                    ),
                    None => continue,
                },
                _ => continue,
            };

            for (key, found) in discovered {
                log::debug!("Discovered nested stream {} under {}", key, node.json_path());
                children.push(Node::child(
                    node,
                    link.clone(),
                    field.as_str(),
                    accessor.clone(),
                    found.into_properties(),
                    is_nested_array,
                ));
            }
        }
        children
    }
}

#[cfg(test)]
#[path = "processor_test.rs"]
mod tests;
