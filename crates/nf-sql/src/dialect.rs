//! Warehouse dialect capabilities
//!
//! Everything that differs between destinations is answered here: scalar
//! type names, identifier rules, and the helper macros the generated models
//! call. Helper methods return expressions meant to sit *inside* a Jinja
//! block; callers wrap them with [`jinja_call`](crate::jinja_call) when they
//! appear directly in SQL.

use crate::jinja_string;
use crate::keywords;
use nf_core::Destination;
use sqlparser::dialect::{
    BigQueryDialect as SqlParserBigQuery, Dialect, PostgreSqlDialect as SqlParserPostgres,
    RedshiftSqlDialect as SqlParserRedshift, SnowflakeDialect as SqlParserSnowflake,
};

/// How unquoted identifiers are folded by a warehouse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierCase {
    Upper,
    Lower,
    Preserve,
}

/// Trait for destination warehouse capabilities
pub trait WarehouseDialect: Send + Sync {
    /// Destination this dialect implements
    fn destination(&self) -> Destination;

    /// Get the dialect name
    fn name(&self) -> &'static str;

    /// sqlparser dialect providing the lexical identifier rules
    fn parser_dialect(&self) -> &dyn Dialect;

    /// Longest identifier the warehouse accepts
    fn max_identifier_length(&self) -> usize;

    /// Case folding applied to identifiers
    fn identifier_case(&self) -> IdentifierCase;

    /// Sorted, upper-case reserved keywords
    fn reserved_keywords(&self) -> &'static [&'static str];

    /// Integer column type
    fn type_int(&self) -> &'static str;

    /// Floating point column type
    fn type_float(&self) -> &'static str;

    /// String column type
    fn type_string(&self) -> &'static str;

    /// Type used to carry nested objects through as JSON
    fn type_json(&self) -> &'static str;

    /// Whether `token` is reserved, ignoring case
    fn is_reserved_keyword(&self, token: &str) -> bool {
        let upper = token.to_ascii_uppercase();
        self.reserved_keywords()
            .binary_search(&upper.as_str())
            .is_ok()
    }

    /// Extract a nested object at `path` from the JSON in `accessor`
    fn json_extract(&self, accessor: &str, path: &[&str]) -> String {
        format!("json_extract({}, {})", accessor, json_path_literal(path))
    }

    /// Extract a scalar at `path` from the JSON in `accessor`
    fn json_extract_scalar(&self, accessor: &str, path: &[&str]) -> String {
        format!("json_extract_scalar({}, {})", accessor, json_path_literal(path))
    }

    /// Extract an array at `path` from the JSON in `accessor`
    fn json_extract_array(&self, accessor: &str, path: &[&str]) -> String {
        format!("json_extract_array({}, {})", accessor, json_path_literal(path))
    }

    /// Cast a column to boolean
    fn cast_to_boolean(&self, column: &str) -> String {
        format!("cast_to_boolean({})", column)
    }

    /// Stringify a boolean column for hashing
    fn boolean_to_string(&self, column: &str) -> String {
        format!("boolean_to_string({})", column)
    }

    /// Stringify an array column for hashing
    fn array_to_string(&self, column: &str) -> String {
        format!("array_to_string({})", column)
    }

    /// Common table expression expanding an array column of `parent_table`
    fn unnest_cte(&self, parent_table: &str, column: &str) -> String {
        format!("unnest_cte({}, {})", jinja_string(parent_table), column)
    }

    /// Join producing one row per element of the unnested array
    fn cross_join_unnest(&self, parent_table: &str, column: &str) -> String {
        format!("cross_join_unnest({}, {})", jinja_string(parent_table), column)
    }

    /// Accessor for the current element of an unnested array column
    fn unnested_column_value(&self, column: &str) -> String {
        format!("unnested_column_value({})", column)
    }

    /// Surrogate key over the ordered, already stringified inputs
    fn surrogate_key(&self, inputs: &[String]) -> String {
        format!("dbt_utils.surrogate_key([{}])", inputs.join(", "))
    }
}

/// Render a JSON path as a Jinja list literal: `['a', 'b']`
fn json_path_literal(path: &[&str]) -> String {
    let parts: Vec<String> = path.iter().map(|p| jinja_string(p)).collect();
    format!("[{}]", parts.join(", "))
}

/// Google BigQuery
pub struct BigQueryDialect {
    dialect: SqlParserBigQuery,
}

impl BigQueryDialect {
    /// Create a new BigQuery dialect
    pub fn new() -> Self {
        Self {
            dialect: SqlParserBigQuery {},
        }
    }
}

impl Default for BigQueryDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl WarehouseDialect for BigQueryDialect {
    fn destination(&self) -> Destination {
        Destination::BigQuery
    }

    fn name(&self) -> &'static str {
        "bigquery"
    }

    fn parser_dialect(&self) -> &dyn Dialect {
        &self.dialect
    }

    fn max_identifier_length(&self) -> usize {
        1024
    }

    fn identifier_case(&self) -> IdentifierCase {
        IdentifierCase::Preserve
    }

    fn reserved_keywords(&self) -> &'static [&'static str] {
        keywords::BIGQUERY
    }

    fn type_int(&self) -> &'static str {
        "int64"
    }

    fn type_float(&self) -> &'static str {
        "float64"
    }

    fn type_string(&self) -> &'static str {
        "string"
    }

    fn type_json(&self) -> &'static str {
        "string"
    }
}

/// PostgreSQL
pub struct PostgresDialect {
    dialect: SqlParserPostgres,
}

impl PostgresDialect {
    /// Create a new Postgres dialect
    pub fn new() -> Self {
        Self {
            dialect: SqlParserPostgres {},
        }
    }
}

impl Default for PostgresDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl WarehouseDialect for PostgresDialect {
    fn destination(&self) -> Destination {
        Destination::Postgres
    }

    fn name(&self) -> &'static str {
        "postgres"
    }

    fn parser_dialect(&self) -> &dyn Dialect {
        &self.dialect
    }

    fn max_identifier_length(&self) -> usize {
        63
    }

    fn identifier_case(&self) -> IdentifierCase {
        IdentifierCase::Lower
    }

    fn reserved_keywords(&self) -> &'static [&'static str] {
        keywords::POSTGRES
    }

    fn type_int(&self) -> &'static str {
        "bigint"
    }

    fn type_float(&self) -> &'static str {
        "float"
    }

    fn type_string(&self) -> &'static str {
        "varchar"
    }

    fn type_json(&self) -> &'static str {
        "jsonb"
    }
}

/// Amazon Redshift
pub struct RedshiftDialect {
    dialect: SqlParserRedshift,
}

impl RedshiftDialect {
    /// Create a new Redshift dialect
    pub fn new() -> Self {
        Self {
            dialect: SqlParserRedshift {},
        }
    }
}

impl Default for RedshiftDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl WarehouseDialect for RedshiftDialect {
    fn destination(&self) -> Destination {
        Destination::Redshift
    }

    fn name(&self) -> &'static str {
        "redshift"
    }

    fn parser_dialect(&self) -> &dyn Dialect {
        &self.dialect
    }

    fn max_identifier_length(&self) -> usize {
        127
    }

    fn identifier_case(&self) -> IdentifierCase {
        IdentifierCase::Lower
    }

    fn reserved_keywords(&self) -> &'static [&'static str] {
        keywords::REDSHIFT
    }

    fn type_int(&self) -> &'static str {
        "bigint"
    }

    fn type_float(&self) -> &'static str {
        "float"
    }

    fn type_string(&self) -> &'static str {
        "varchar"
    }

    fn type_json(&self) -> &'static str {
        "super"
    }
}

/// Snowflake
pub struct SnowflakeDialect {
    dialect: SqlParserSnowflake,
}

impl SnowflakeDialect {
    /// Create a new Snowflake dialect
    pub fn new() -> Self {
        Self {
            dialect: SqlParserSnowflake {},
        }
    }
}

impl Default for SnowflakeDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl WarehouseDialect for SnowflakeDialect {
    fn destination(&self) -> Destination {
        Destination::Snowflake
    }

    fn name(&self) -> &'static str {
        "snowflake"
    }

    fn parser_dialect(&self) -> &dyn Dialect {
        &self.dialect
    }

    fn max_identifier_length(&self) -> usize {
        255
    }

    fn identifier_case(&self) -> IdentifierCase {
        IdentifierCase::Upper
    }

    fn reserved_keywords(&self) -> &'static [&'static str] {
        keywords::SNOWFLAKE
    }

    fn type_int(&self) -> &'static str {
        "int"
    }

    fn type_float(&self) -> &'static str {
        "float"
    }

    fn type_string(&self) -> &'static str {
        "varchar"
    }

    fn type_json(&self) -> &'static str {
        "variant"
    }
}

/// Select the dialect for a destination
pub fn dialect_for(destination: Destination) -> Box<dyn WarehouseDialect> {
    match destination {
        Destination::BigQuery => Box::new(BigQueryDialect::new()),
        Destination::Postgres => Box::new(PostgresDialect::new()),
        Destination::Redshift => Box::new(RedshiftDialect::new()),
        Destination::Snowflake => Box::new(SnowflakeDialect::new()),
    }
}

#[cfg(test)]
#[path = "dialect_test.rs"]
mod tests;
