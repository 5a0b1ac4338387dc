use super::*;
use std::io::Write;

#[test]
fn test_minimal_config_defaults() {
    let config = Config::from_yaml_str("destination: postgres\nschema: public\n").unwrap();
    assert_eq!(config.destination, Destination::Postgres);
    assert_eq!(config.schema, "public");
    assert_eq!(config.raw_schema_name(), "_airbyte_public");
    assert_eq!(config.output_path, "models/generated");
    assert_eq!(config.json_column, "_airbyte_data");
    assert_eq!(config.staging_dir, "airbyte_views");
    assert_eq!(config.final_dir, "airbyte_tables");
    assert!(config.streams.is_empty());
}

#[test]
fn test_full_config() {
    let yaml = r#"
destination: snowflake
schema: analytics
raw_schema: landing
output_path: out
json_column: payload
staging_dir: staging
final_dir: marts
streams: [users, orders]
"#;
    let config = Config::from_yaml_str(yaml).unwrap();
    assert_eq!(config.destination, Destination::Snowflake);
    assert_eq!(config.raw_schema_name(), "landing");
    assert_eq!(config.output_dir(), PathBuf::from("out"));
    assert_eq!(config.streams, vec!["users", "orders"]);
}

#[test]
fn test_unknown_key_rejected() {
    let err = Config::from_yaml_str("destination: postgres\nschema: public\nfoo: 1\n").unwrap_err();
    assert!(matches!(err, CoreError::ConfigParseError { .. }));
}

#[test]
fn test_unknown_destination_rejected() {
    let err = Config::from_yaml_str("destination: mysql\nschema: public\n").unwrap_err();
    assert!(matches!(err, CoreError::ConfigParseError { .. }));
}

#[test]
fn test_empty_schema_invalid() {
    let err = Config::from_yaml_str("destination: postgres\nschema: \"\"\n").unwrap_err();
    assert!(matches!(err, CoreError::ConfigInvalid { .. }));
}

#[test]
fn test_same_output_dirs_invalid() {
    let yaml = "destination: postgres\nschema: public\nstaging_dir: x\nfinal_dir: x\n";
    let err = Config::from_yaml_str(yaml).unwrap_err();
    assert!(err.to_string().contains("[N003]"));
}

#[test]
fn test_destination_from_str() {
    assert_eq!("BigQuery".parse::<Destination>().unwrap(), Destination::BigQuery);
    assert_eq!("postgresql".parse::<Destination>().unwrap(), Destination::Postgres);
    assert!("oracle".parse::<Destination>().is_err());
    for dest in Destination::ALL {
        assert_eq!(dest.to_string().parse::<Destination>().unwrap(), dest);
    }
}

#[test]
fn test_load_from_dir() {
    let dir = tempfile::tempdir().unwrap();
    let mut file = std::fs::File::create(dir.path().join(CONFIG_FILE_NAME)).unwrap();
    writeln!(file, "destination: redshift\nschema: warehouse").unwrap();

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.destination, Destination::Redshift);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigNotFound { .. }));
}
