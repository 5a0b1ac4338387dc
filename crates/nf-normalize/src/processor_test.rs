use super::*;
use crate::emitter::MemoryEmitter;
use nf_core::schema::Properties;
use nf_core::TableName;
use nf_jinja::ModelTemplates;
use nf_sql::PostgresDialect;
use serde_json::{json, Value};

fn props(value: Value) -> Properties {
    value.as_object().cloned().unwrap()
}

fn root(name: &str, properties: Value) -> Node {
    Node::root(name, props(properties), "'_airbyte_data'", "_airbyte_public", "public")
}

fn raw_source(stream: &str) -> ModelRef {
    ModelRef::source("_airbyte_public", format!("_airbyte_raw_{stream}"))
}

fn names(processed: &ProcessedNode) -> Vec<&str> {
    processed.models.iter().map(|m| m.name.as_str()).collect()
}

#[test]
fn test_process_root_emits_four_stages() {
    let dialect = PostgresDialect::new();
    let normalizer = NameNormalizer::new(&dialect);
    let templates = ModelTemplates::new().unwrap();
    let builder = PipelineStageBuilder::new(normalizer, &templates);
    let processor = StreamProcessor::new(normalizer, &builder);
    let mut registry = TableNameRegistry::new();
    let mut emitter = MemoryEmitter::new();
    let mut diagnostics = Diagnostics::new();

    let node = root("users", json!({"user_id": {"type": "integer"}}));
    let processed = processor
        .process(&node, &raw_source("users"), &mut registry, &mut emitter, &mut diagnostics)
        .unwrap()
        .unwrap();

    assert_eq!(names(&processed), vec!["users_1_ab1", "users_1_ab2", "users_1_ab3", "users"]);
    assert_eq!(processed.final_ref, ModelRef::model(TableName::new("users")));
    assert_eq!(registry.len(), 4);
    assert_eq!(emitter.len(), 4);

    // each stage reads only from the one before it
    let deps: Vec<String> = processed.models.iter().map(|m| m.depends_on.to_string()).collect();
    assert_eq!(
        deps,
        vec!["_airbyte_public._airbyte_raw_users", "users_1_ab1", "users_1_ab2", "users_1_ab3"]
    );
    assert!(processed.models[1].sql.contains("from {{ ref('users_1_ab1') }}"));

    let schemas: Vec<&str> = processed.models.iter().map(|m| m.schema.as_str()).collect();
    assert_eq!(schemas, vec!["_airbyte_public", "_airbyte_public", "_airbyte_public", "public"]);
}

#[test]
fn test_empty_node_is_skipped() {
    let dialect = PostgresDialect::new();
    let normalizer = NameNormalizer::new(&dialect);
    let templates = ModelTemplates::new().unwrap();
    let builder = PipelineStageBuilder::new(normalizer, &templates);
    let processor = StreamProcessor::new(normalizer, &builder);
    let mut registry = TableNameRegistry::new();
    let mut emitter = MemoryEmitter::new();
    let mut diagnostics = Diagnostics::new();

    let node = root(
        "audit",
        json!({"_airbyte_ab_id": {"type": "string"}, "_airbyte_emitted_at": {"type": "string"}}),
    );
    let processed = processor
        .process(&node, &raw_source("audit"), &mut registry, &mut emitter, &mut diagnostics)
        .unwrap();

    assert!(processed.is_none());
    assert!(registry.is_empty());
    assert!(emitter.is_empty());
    assert_eq!(
        diagnostics.iter().collect::<Vec<_>>(),
        vec![&Diagnostic::SkippedStream {
            json_path: "audit".into()
        }]
    );
}

#[test]
fn test_array_and_object_children() {
    let dialect = PostgresDialect::new();
    let normalizer = NameNormalizer::new(&dialect);
    let templates = ModelTemplates::new().unwrap();
    let builder = PipelineStageBuilder::new(normalizer, &templates);
    let processor = StreamProcessor::new(normalizer, &builder);
    let mut diagnostics = Diagnostics::new();

    let node = root(
        "users",
        json!({
            "user_id": {"type": "integer"},
            "addresses": {
                "type": "array",
                "items": {"type": "object", "properties": {"street": {"type": "string"}}}
            },
            "profile": {"type": ["null", "object"], "properties": {"bio": {"type": "string"}}},
            "tags": {"type": "array"},
            "choice": {"anyOf": [{"type": "object", "properties": {"a": {"type": "string"}}}]}
        }),
    );
    let children = processor.find_children(&node, &mut diagnostics);

    assert_eq!(children.len(), 2);
    let addresses = &children[0];
    assert_eq!(addresses.name, "addresses");
    assert!(addresses.is_nested_array);
    assert_eq!(addresses.json_accessor, "unnested_column_value('addresses')");
    assert_eq!(addresses.path, vec!["users", "addresses"]);
    assert!(addresses.properties.contains_key("street"));

    let profile = &children[1];
    assert!(!profile.is_nested_array);
    assert_eq!(profile.json_accessor, "'profile'");

    let parent = addresses.parent.as_ref().unwrap();
    assert_eq!(parent.table_name, "users");
    assert_eq!(parent.hash_id, "_airbyte_users_hashid");

    assert_eq!(
        diagnostics.iter().collect::<Vec<_>>(),
        vec![&Diagnostic::UnsupportedConstruct {
            json_path: "users".into(),
            field: "choice".into()
        }]
    );
}

#[test]
fn test_array_of_scalars_yields_skipped_child() {
    let dialect = PostgresDialect::new();
    let normalizer = NameNormalizer::new(&dialect);
    let templates = ModelTemplates::new().unwrap();
    let builder = PipelineStageBuilder::new(normalizer, &templates);
    let processor = StreamProcessor::new(normalizer, &builder);
    let mut registry = TableNameRegistry::new();
    let mut emitter = MemoryEmitter::new();
    let mut diagnostics = Diagnostics::new();

    let node = root(
        "users",
        json!({"user_id": {"type": "integer"}, "tags": {"type": "array", "items": {"type": "string"}}}),
    );
    let processed = processor
        .process(&node, &raw_source("users"), &mut registry, &mut emitter, &mut diagnostics)
        .unwrap()
        .unwrap();
    assert_eq!(processed.children.len(), 1);

    let child = &processed.children[0];
    assert!(child.is_nested_array);
    let skipped = processor
        .process(child, &processed.final_ref, &mut registry, &mut emitter, &mut diagnostics)
        .unwrap();
    assert!(skipped.is_none());
    assert_eq!(registry.len(), 4);
}

#[test]
fn test_sibling_children_get_distinct_suffixes() {
    let dialect = PostgresDialect::new();
    let normalizer = NameNormalizer::new(&dialect);
    let templates = ModelTemplates::new().unwrap();
    let builder = PipelineStageBuilder::new(normalizer, &templates);
    let processor = StreamProcessor::new(normalizer, &builder);
    let mut registry = TableNameRegistry::new();
    let mut emitter = MemoryEmitter::new();
    let mut diagnostics = Diagnostics::new();

    // an untyped wrapper holding two property maps spawns two children named "meta"
    let node = root(
        "users",
        json!({
            "user_id": {"type": "integer"},
            "meta": {
                "left": {"properties": {"a": {"type": "string"}}},
                "right": {"properties": {"b": {"type": "string"}}}
            }
        }),
    );
    let processed = processor
        .process(&node, &raw_source("users"), &mut registry, &mut emitter, &mut diagnostics)
        .unwrap()
        .unwrap();
    assert_eq!(processed.children.len(), 2);

    let mut siblings = Vec::new();
    for child in &processed.children {
        let done = processor
            .process(child, &processed.final_ref, &mut registry, &mut emitter, &mut diagnostics)
            .unwrap()
            .unwrap();
        siblings.push(done);
    }
    assert_eq!(
        names(&siblings[0]),
        vec!["users_meta_1_ab1", "users_meta_1_ab2", "users_meta_1_ab3", "users_meta_1"]
    );
    assert_eq!(
        names(&siblings[1]),
        vec!["users_meta_2_ab1", "users_meta_2_ab2", "users_meta_2_ab3", "users_meta_2"]
    );
    assert_eq!(registry.len(), 12);
}

#[test]
fn test_top_level_collision_is_fatal() {
    let dialect = PostgresDialect::new();
    let normalizer = NameNormalizer::new(&dialect);
    let templates = ModelTemplates::new().unwrap();
    let builder = PipelineStageBuilder::new(normalizer, &templates);
    let processor = StreamProcessor::new(normalizer, &builder);
    let mut registry = TableNameRegistry::new();
    let mut emitter = MemoryEmitter::new();
    let mut diagnostics = Diagnostics::new();

    let first = root("Users", json!({"user_id": {"type": "integer"}}));
    let second = root("users", json!({"user_id": {"type": "integer"}}));
    processor
        .process(&first, &raw_source("Users"), &mut registry, &mut emitter, &mut diagnostics)
        .unwrap();
    let err = processor
        .process(&second, &raw_source("users"), &mut registry, &mut emitter, &mut diagnostics)
        .unwrap_err();
    assert!(err.to_string().contains("[N007]"), "{}", err);
}
