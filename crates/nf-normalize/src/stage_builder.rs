//! Construction of the four ordered stage models for one node.
//!
//! Each stage selects only from the previous stage's output:
//!
//! 1. `RawExtract` pulls every field out of the node's JSON accessor.
//! 2. `TypeCast` casts each extracted column to its warehouse type.
//! 3. `HashId` adds the surrogate key over the parent hash and every field.
//! 4. `Final` projects the user-facing column set.

use crate::diagnostics::{Diagnostic, Diagnostics};
use nf_core::schema::{
    is_combining, DeclaredType, ScalarType, EMITTED_AT_COLUMN, INTERNAL_COLUMN_PREFIX,
};
use nf_core::{CoreError, CoreResult, Node, Stage};
use nf_jinja::{ModelContext, ModelTemplates};
use nf_sql::{jinja_call, NameNormalizer, WarehouseDialect};
use serde_json::Value;

/// One rendered stage of a node
#[derive(Debug, Clone, PartialEq)]
pub struct StageModel {
    pub stage: Stage,

    /// Output column names, in select order (`*` expanded)
    pub columns: Vec<String>,

    /// Rendered model body, without the config header
    pub sql: String,
}

/// Builds the stage models of a node for one dialect
pub struct PipelineStageBuilder<'a> {
    normalizer: NameNormalizer<'a>,
    templates: &'a ModelTemplates,
}

impl<'a> PipelineStageBuilder<'a> {
    pub fn new(normalizer: NameNormalizer<'a>, templates: &'a ModelTemplates) -> Self {
        Self {
            normalizer,
            templates,
        }
    }

    fn dialect(&self) -> &'a dyn WarehouseDialect {
        self.normalizer.dialect()
    }

    /// Normalized base table name of a node
    pub fn table_base(&self, node: &Node) -> String {
        self.normalizer.normalize_table_name(&node.base_name())
    }

    /// Un-normalized hash id column of a node, `_airbyte_<base>_hashid`
    pub fn raw_hash_id(&self, node: &Node) -> String {
        format!("{}{}_hashid", INTERNAL_COLUMN_PREFIX, self.table_base(node))
    }

    /// Hash id column of a node as it appears in SQL
    pub fn hash_id(&self, node: &Node) -> String {
        self.normalizer
            .normalize_column_name(&self.raw_hash_id(node), false)
    }

    fn parent_hash_id(&self, node: &Node, in_jinja: bool) -> Option<String> {
        node.parent
            .as_ref()
            .map(|p| self.normalizer.normalize_column_name(&p.hash_id, in_jinja))
    }

    fn column(&self, field: &str) -> String {
        self.normalizer.normalize_column_name(field, false)
    }

    fn jinja_column(&self, field: &str) -> String {
        self.normalizer.normalize_column_name(field, true)
    }

    /// Ordered surrogate-key inputs: parent hash first, then every field
    pub fn hash_inputs(&self, node: &Node) -> Vec<String> {
        let dialect = self.dialect();
        let mut inputs: Vec<String> = self.parent_hash_id(node, true).into_iter().collect();
        for (field, definition) in node.usable_fields() {
            let column = self.jinja_column(field);
            let input = match DeclaredType::of(definition) {
                DeclaredType::Scalar(ScalarType::Boolean) => dialect.boolean_to_string(&column),
                DeclaredType::Array => dialect.array_to_string(&column),
                _ => column,
            };
            inputs.push(input);
        }
        inputs
    }

    /// Trailing comment naming the node
    pub fn table_comment(&self, node: &Node) -> String {
        if node.is_root() {
            format!("-- {}", self.table_base(node))
        } else {
            format!("-- {} from {}", self.table_base(node), node.json_path())
        }
    }

    /// Render one stage of `node`, selecting from `from_table`
    pub fn build(
        &self,
        stage: Stage,
        node: &Node,
        from_table: &str,
        diagnostics: &mut Diagnostics,
    ) -> CoreResult<StageModel> {
        let mut context = ModelContext {
            from_table: from_table.to_string(),
            comment: self.table_comment(node),
            ..Default::default()
        };
        let mut columns: Vec<String> = self.parent_hash_id(node, false).into_iter().collect();
        let fields: Vec<String> = node.usable_fields().map(|(f, _)| self.column(f)).collect();

        match stage {
            Stage::RawExtract => {
                context.columns.extend(columns.iter().cloned());
                context
                    .columns
                    .extend(node.usable_fields().map(|(f, d)| self.extract(node, f, d)));
                context.columns.push(EMITTED_AT_COLUMN.to_string());
                context.before = self.unnest_before(node);
                context.after = self.unnest_after(node);
                columns.extend(fields);
                columns.push(EMITTED_AT_COLUMN.to_string());
            }
            Stage::TypeCast => {
                context.columns.extend(columns.iter().cloned());
                for (field, definition) in node.usable_fields() {
                    context.columns.push(self.cast(node, field, definition, diagnostics));
                }
                context.columns.push(EMITTED_AT_COLUMN.to_string());
                columns.extend(fields);
                columns.push(EMITTED_AT_COLUMN.to_string());
            }
            Stage::HashId => {
                let hash_id = self.hash_id(node);
                let key = self.dialect().surrogate_key(&self.hash_inputs(node));
                context.columns.push("*".to_string());
                context
                    .columns
                    .push(format!("{} as {}", jinja_call(&key), hash_id));
                columns.extend(fields);
                columns.push(EMITTED_AT_COLUMN.to_string());
                columns.push(hash_id);
            }
            Stage::Final => {
                columns.extend(fields);
                columns.push(EMITTED_AT_COLUMN.to_string());
                columns.push(self.hash_id(node));
                context.columns = columns.clone();
            }
        }

        let sql = self
            .templates
            .render(&context)
            .map_err(|e| CoreError::RenderError {
                stage: stage.to_string(),
                table: self.table_base(node),
                message: e.to_string(),
            })?;
        Ok(StageModel {
            stage,
            columns,
            sql,
        })
    }

    fn extract(&self, node: &Node, field: &str, definition: &Value) -> String {
        let dialect = self.dialect();
        let accessor = node.json_accessor.as_str();
        let path = [field];
        let expr = match DeclaredType::of(definition) {
            DeclaredType::Array => dialect.json_extract_array(accessor, &path),
            DeclaredType::Scalar(_) => dialect.json_extract_scalar(accessor, &path),
            _ => dialect.json_extract(accessor, &path),
        };
        format!("{} as {}", jinja_call(&expr), self.column(field))
    }

    fn cast(
        &self,
        node: &Node,
        field: &str,
        definition: &Value,
        diagnostics: &mut Diagnostics,
    ) -> String {
        let dialect = self.dialect();
        let column = self.column(field);
        let sql_type = match DeclaredType::of(definition) {
            DeclaredType::Array => return column,
            DeclaredType::Object => dialect.type_json(),
            DeclaredType::Scalar(ScalarType::Integer) => dialect.type_int(),
            DeclaredType::Scalar(ScalarType::Number) => dialect.type_float(),
            DeclaredType::Scalar(ScalarType::String) => dialect.type_string(),
            DeclaredType::Scalar(ScalarType::Boolean) => {
                let cast = dialect.cast_to_boolean(&self.jinja_column(field));
                return format!("{} as {}", jinja_call(&cast), column);
            }
            DeclaredType::Missing => {
                // composition fields are reported by child discovery
                if !is_combining(definition) {
                    diagnostics.push(Diagnostic::UnknownType {
                        json_path: node.json_path(),
                        field: field.to_string(),
                        declared: None,
                    });
                }
                return column;
            }
            DeclaredType::Unrecognized(declared) => {
                diagnostics.push(Diagnostic::UnknownType {
                    json_path: node.json_path(),
                    field: field.to_string(),
                    declared: Some(declared),
                });
                return column;
            }
        };
        format!("cast({} as {}) as {}", column, sql_type, column)
    }

    fn unnest_before(&self, node: &Node) -> String {
        match &node.parent {
            Some(parent) if node.is_nested_array => jinja_call(
                &self
                    .dialect()
                    .unnest_cte(&parent.table_name, &self.jinja_column(&node.name)),
            ),
            _ => String::new(),
        }
    }

    fn unnest_after(&self, node: &Node) -> String {
        let Some(parent) = &node.parent else {
            return String::new();
        };
        let mut lines = Vec::new();
        if node.is_nested_array {
            lines.push(jinja_call(
                &self
                    .dialect()
                    .cross_join_unnest(&parent.table_name, &self.jinja_column(&node.name)),
            ));
        }
        lines.push(format!("where {} is not null", self.column(&node.name)));
        lines.join("\n")
    }
}

#[cfg(test)]
#[path = "stage_builder_test.rs"]
mod tests;
