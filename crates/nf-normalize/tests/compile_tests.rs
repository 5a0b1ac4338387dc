//! End-to-end compilation tests

use nf_core::{Catalog, Config, Destination, Stage, TableName};
use nf_normalize::{compile_catalog, Diagnostic, FileEmitter, MemoryEmitter, OutputLayout};
use std::collections::HashSet;

const USERS_CATALOG: &str = r#"{
  "streams": [
    {
      "stream": {
        "name": "users",
        "json_schema": {
          "type": "object",
          "properties": {
            "user_id": {"type": "integer"},
            "full_name": {"type": "string"},
            "addresses": {
              "type": "array",
              "items": {
                "type": "object",
                "properties": {
                  "street": {"type": "string"},
                  "city": {"type": "string"},
                  "geo": {
                    "type": "object",
                    "properties": {"lat": {"type": "number"}, "lng": {"type": "number"}}
                  }
                }
              }
            },
            "_airbyte_ab_id": {"type": "string"}
          }
        }
      }
    },
    {
      "stream": {
        "name": "audit",
        "json_schema": {"properties": {"_airbyte_emitted_at": {"type": "string"}}}
      }
    }
  ]
}"#;

fn postgres() -> Config {
    Config::new(Destination::Postgres, "public")
}

fn lines(sql: &str) -> Vec<String> {
    sql.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

#[test]
fn test_users_with_addresses() {
    let catalog = Catalog::from_json_str(USERS_CATALOG).unwrap();
    let mut emitter = MemoryEmitter::new();
    let report = compile_catalog(&postgres(), &catalog, &mut emitter).unwrap();

    let paths: Vec<&str> = report.nodes.iter().map(|n| n.json_path.as_str()).collect();
    assert_eq!(paths, vec!["users", "users/addresses", "users/addresses/geo"]);

    let root = &report.nodes[0];
    assert_eq!(root.tables.len(), 4);
    assert_eq!(root.tables[3], (Stage::Final, TableName::new("users")));

    let addresses = &report.nodes[1];
    assert!(addresses.is_nested_array);
    let names: Vec<&str> = addresses.tables.iter().map(|(_, t)| t.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "users_addresses_1_ab1",
            "users_addresses_1_ab2",
            "users_addresses_1_ab3",
            "users_addresses_1",
        ]
    );
    assert!(!report.nodes[2].is_nested_array);

    // child hash: parent hash id first, then its own fields in order
    let hashing = emitter.get("users_addresses_1_ab3").unwrap();
    assert!(hashing.sql.contains(
        "dbt_utils.surrogate_key(['_airbyte_users_hashid', 'street', 'city', 'geo']) }} as _airbyte_users_addresses_hashid"
    ));

    // children read from their parent's final table
    let child_extract = emitter.get("users_addresses_1_ab1").unwrap();
    assert!(child_extract.sql.contains("from {{ ref('users') }}"));
    let grandchild_extract = emitter.get("users_addresses_geo_1_ab1").unwrap();
    assert!(grandchild_extract
        .sql
        .contains("from {{ ref('users_addresses_1') }}"));
    assert!(grandchild_extract
        .sql
        .contains("{{ json_extract_scalar('geo', ['lat']) }} as lat"));

    // the empty stream is reported, not emitted
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic::SkippedStream {
            json_path: "audit".into()
        }]
    );
    assert_eq!(report.model_count(), 12);
    assert_eq!(emitter.len(), 12);
    assert_eq!(report.sources.table_count(), 1);
}

#[test]
fn test_final_columns() {
    let catalog = Catalog::from_json_str(USERS_CATALOG).unwrap();
    let mut emitter = MemoryEmitter::new();
    compile_catalog(&postgres(), &catalog, &mut emitter).unwrap();

    let root_final = emitter.get("users").unwrap();
    assert_eq!(
        lines(&root_final.sql),
        vec![
            "select",
            "user_id,",
            "full_name,",
            "addresses,",
            "_airbyte_emitted_at,",
            "_airbyte_users_hashid",
            "from {{ ref('users_1_ab3') }}",
            "-- users",
        ]
    );

    let child_final = emitter.get("users_addresses_1").unwrap();
    let child_lines = lines(&child_final.sql);
    assert_eq!(
        &child_lines[..7],
        &[
            "select",
            "_airbyte_users_hashid,",
            "street,",
            "city,",
            "geo,",
            "_airbyte_emitted_at,",
            "_airbyte_users_addresses_hashid",
        ]
    );
}

#[test]
fn test_every_table_name_is_unique() {
    let catalog = Catalog::from_json_str(USERS_CATALOG).unwrap();
    let mut emitter = MemoryEmitter::new();
    let report = compile_catalog(&postgres(), &catalog, &mut emitter).unwrap();

    let allocated: Vec<&str> = report.registry.iter().map(|n| n.as_str()).collect();
    let distinct: HashSet<&str> = allocated.iter().copied().collect();
    assert_eq!(allocated.len(), distinct.len());
    assert_eq!(allocated.len(), report.model_count());
}

#[test]
fn test_compilation_is_deterministic() {
    let catalog = Catalog::from_json_str(USERS_CATALOG).unwrap();
    let mut first = MemoryEmitter::new();
    let mut second = MemoryEmitter::new();
    compile_catalog(&postgres(), &catalog, &mut first).unwrap();
    compile_catalog(&postgres(), &catalog, &mut second).unwrap();

    let a: Vec<(String, String)> = first
        .iter()
        .map(|m| (m.name.to_string(), m.contents()))
        .collect();
    let b: Vec<(String, String)> = second
        .iter()
        .map(|m| (m.name.to_string(), m.contents()))
        .collect();
    assert_eq!(a, b);
}

#[test]
fn test_snowflake_casing() {
    let catalog = Catalog::from_json_str(USERS_CATALOG).unwrap();
    let config = Config::new(Destination::Snowflake, "public");
    let mut emitter = MemoryEmitter::new();
    let report = compile_catalog(&config, &catalog, &mut emitter).unwrap();

    assert_eq!(report.manifest.schema, "PUBLIC");
    assert_eq!(report.manifest.raw_schema, "_AIRBYTE_PUBLIC");
    let root = emitter.get("USERS").unwrap();
    assert!(root.sql.contains("_AIRBYTE_USERS_HASHID"));
    assert!(emitter.get("USERS_ADDRESSES_1_AB1").is_some());
    let extract = emitter.get("USERS_1_AB1").unwrap();
    assert!(extract
        .sql
        .contains("{{ source('_AIRBYTE_PUBLIC', '_AIRBYTE_RAW_USERS') }}"));
}

#[test]
fn test_top_level_collision_aborts() {
    let catalog = Catalog::from_json_str(
        r#"{"streams": [
            {"name": "Users", "json_schema": {"properties": {"a": {"type": "string"}}}},
            {"name": "users", "json_schema": {"properties": {"b": {"type": "string"}}}}
        ]}"#,
    )
    .unwrap();
    let mut emitter = MemoryEmitter::new();
    let err = compile_catalog(&postgres(), &catalog, &mut emitter).unwrap_err();
    assert!(err.is_naming_error());
}

#[test]
fn test_file_output_and_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::from_json_str(USERS_CATALOG).unwrap();
    let mut emitter = FileEmitter::new(dir.path(), OutputLayout::default());
    let report = compile_catalog(&postgres(), &catalog, &mut emitter).unwrap();

    let root_final = dir.path().join("airbyte_tables/public/users.sql");
    let content = std::fs::read_to_string(&root_final).unwrap();
    assert!(content.starts_with("{{ config(schema='public') }}\nselect\n"));
    assert!(dir
        .path()
        .join("airbyte_views/_airbyte_public/users_addresses_1_ab2.sql")
        .exists());

    let entry = report.manifest.get_model("users").unwrap();
    assert_eq!(entry.path, "airbyte_tables/public/users.sql");
    assert_eq!(entry.depends_on, "users_1_ab3");
    assert_eq!(entry.checksum, nf_core::compute_checksum(&content));
    assert_eq!(report.manifest.models_for_path("users/addresses").len(), 4);

    // a second run over the same output leaves every file untouched
    let mut again = FileEmitter::new(dir.path(), OutputLayout::default());
    compile_catalog(&postgres(), &catalog, &mut again).unwrap();
    assert_eq!(again.written(), 0);
    assert_eq!(again.unchanged(), 12);
}
