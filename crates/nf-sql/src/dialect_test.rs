use super::*;

#[test]
fn test_dialect_for_every_destination() {
    for destination in Destination::ALL {
        let dialect = dialect_for(destination);
        assert_eq!(dialect.destination(), destination);
        assert_eq!(dialect.name(), destination.to_string());
    }
}

#[test]
fn test_keyword_tables_are_sorted() {
    for destination in Destination::ALL {
        let words = dialect_for(destination).reserved_keywords();
        assert!(!words.is_empty());
        assert!(
            words.windows(2).all(|w| w[0] < w[1]),
            "{} keywords must be sorted for binary search",
            destination
        );
    }
}

#[test]
fn test_reserved_keyword_ignores_case() {
    let dialect = PostgresDialect::new();
    assert!(dialect.is_reserved_keyword("select"));
    assert!(dialect.is_reserved_keyword("SELECT"));
    assert!(!dialect.is_reserved_keyword("street"));
}

#[test]
fn test_reserved_keywords_differ_by_dialect() {
    // HASH is reserved in BigQuery only
    assert!(BigQueryDialect::new().is_reserved_keyword("hash"));
    assert!(!SnowflakeDialect::new().is_reserved_keyword("hash"));
}

#[test]
fn test_type_names() {
    let bq = BigQueryDialect::new();
    assert_eq!(bq.type_int(), "int64");
    assert_eq!(bq.type_float(), "float64");
    let pg = PostgresDialect::new();
    assert_eq!(pg.type_json(), "jsonb");
    let sf = SnowflakeDialect::new();
    assert_eq!(sf.type_json(), "variant");
    assert_eq!(RedshiftDialect::new().type_string(), "varchar");
}

#[test]
fn test_json_extract_helpers() {
    let dialect = PostgresDialect::new();
    assert_eq!(
        dialect.json_extract_scalar("'_airbyte_data'", &["id"]),
        "json_extract_scalar('_airbyte_data', ['id'])"
    );
    assert_eq!(
        dialect.json_extract_array("'_airbyte_data'", &["tags"]),
        "json_extract_array('_airbyte_data', ['tags'])"
    );
    assert_eq!(
        dialect.json_extract("'_airbyte_data'", &["owner's"]),
        r"json_extract('_airbyte_data', ['owner\'s'])"
    );
}

#[test]
fn test_unnest_helpers() {
    let dialect = SnowflakeDialect::new();
    assert_eq!(
        dialect.unnest_cte("USERS", "'ADDRESSES'"),
        "unnest_cte('USERS', 'ADDRESSES')"
    );
    assert_eq!(
        dialect.cross_join_unnest("USERS", "'ADDRESSES'"),
        "cross_join_unnest('USERS', 'ADDRESSES')"
    );
    assert_eq!(
        dialect.unnested_column_value("'ADDRESSES'"),
        "unnested_column_value('ADDRESSES')"
    );
}

#[test]
fn test_surrogate_key_keeps_order() {
    let dialect = BigQueryDialect::new();
    let inputs = vec![
        "'_airbyte_users_hashid'".to_string(),
        "'street'".to_string(),
        "boolean_to_string('primary')".to_string(),
    ];
    assert_eq!(
        dialect.surrogate_key(&inputs),
        "dbt_utils.surrogate_key(['_airbyte_users_hashid', 'street', boolean_to_string('primary')])"
    );
}
