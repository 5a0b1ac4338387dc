//! nf-sql - Warehouse dialect layer for normflow
//!
//! This crate provides the per-warehouse capabilities the compiler needs
//! (type names, helper macro calls, identifier rules) behind the
//! [`WarehouseDialect`] trait, and the [`NameNormalizer`] that turns stream
//! and field names into identifiers that are valid for the destination.

pub mod dialect;
mod keywords;
pub mod normalizer;

pub use dialect::{
    dialect_for, BigQueryDialect, IdentifierCase, PostgresDialect, RedshiftDialect,
    SnowflakeDialect, WarehouseDialect,
};
pub use normalizer::NameNormalizer;

/// Wrap an expression in a Jinja print block: `{{ expr }}`.
pub fn jinja_call(expr: &str) -> String {
    format!("{{{{ {} }}}}", expr)
}

/// Quote a value as a single-quoted Jinja string literal.
pub fn jinja_string(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}
