//! Identifier normalization for the destination warehouse
//!
//! Stream and field names come from arbitrary JSON. Before they can be used as
//! table or column names they are reduced to `[A-Za-z0-9_]`, folded to the
//! warehouse's case, truncated to its identifier limit, and (for columns)
//! quoted when they collide with a reserved keyword.

use crate::dialect::{IdentifierCase, WarehouseDialect};
use crate::{jinja_call, jinja_string};
use regex::Regex;
use std::sync::OnceLock;

static NON_IDENTIFIER_CHARS: OnceLock<Regex> = OnceLock::new();

fn non_identifier_chars() -> &'static Regex {
    NON_IDENTIFIER_CHARS.get_or_init(|| Regex::new(r"[^A-Za-z0-9_]").expect("valid regex literal"))
}

/// Dialect-aware name normalizer
#[derive(Clone, Copy)]
pub struct NameNormalizer<'a> {
    dialect: &'a dyn WarehouseDialect,
}

impl<'a> NameNormalizer<'a> {
    /// Create a normalizer for a dialect
    pub fn new(dialect: &'a dyn WarehouseDialect) -> Self {
        Self { dialect }
    }

    /// The dialect this normalizer applies
    pub fn dialect(&self) -> &'a dyn WarehouseDialect {
        self.dialect
    }

    /// Normalize a table (model) name.
    ///
    /// Table names double as file names and `ref()` targets, so they are
    /// never quoted. A name that would need quoting gets a leading `_`.
    pub fn normalize_table_name(&self, name: &str) -> String {
        let mut result = self.apply_case(&standard_naming(name));
        if !result.is_empty() && self.needs_quotes(&result) {
            result.insert(0, '_');
        }
        self.truncate(&result)
    }

    /// Normalize a column name.
    ///
    /// With `in_jinja` the result is usable as an argument inside a Jinja
    /// expression (`'name'` or `adapter.quote('name')`); otherwise it is usable
    /// directly in SQL (`name` or `{{ adapter.quote('name') }}`).
    pub fn normalize_column_name(&self, name: &str, in_jinja: bool) -> String {
        let result = self.truncate(&self.apply_case(&standard_naming(name)));
        if self.needs_quotes(&result) {
            let quoted = format!("adapter.quote({})", jinja_string(&result));
            if in_jinja {
                quoted
            } else {
                jinja_call(&quoted)
            }
        } else if in_jinja {
            jinja_string(&result)
        } else {
            result
        }
    }

    /// Normalize a schema name, optionally skipping truncation
    pub fn normalize_schema_name(&self, name: &str, truncate: bool) -> String {
        let result = self.apply_case(&standard_naming(name));
        if truncate {
            self.truncate(&result)
        } else {
            result
        }
    }

    /// Name of a raw table written by the loader.
    ///
    /// The loader picks these names, so they are cased but never truncated
    /// or prefixed.
    pub fn normalize_raw_table_name(&self, name: &str) -> String {
        self.apply_case(&standard_naming(name))
    }

    /// Whether an already standardized identifier must be quoted.
    pub fn needs_quotes(&self, identifier: &str) -> bool {
        let parser = self.dialect.parser_dialect();
        let mut chars = identifier.chars();
        let plain = match chars.next() {
            Some(first) => {
                parser.is_identifier_start(first) && chars.all(|c| parser.is_identifier_part(c))
            }
            None => false,
        };
        !plain || self.dialect.is_reserved_keyword(identifier)
    }

    fn apply_case(&self, name: &str) -> String {
        match self.dialect.identifier_case() {
            IdentifierCase::Upper => name.to_ascii_uppercase(),
            IdentifierCase::Lower => name.to_ascii_lowercase(),
            IdentifierCase::Preserve => name.to_string(),
        }
    }

    /// Keep the head and tail of an over-long name, joined by `__`.
    ///
    /// The tail survives so numeric and stage suffixes stay distinct.
    fn truncate(&self, name: &str) -> String {
        let limit = self.dialect.max_identifier_length();
        if name.len() <= limit {
            return name.to_string();
        }
        let keep = limit.saturating_sub(2);
        let head = keep / 2 + keep % 2;
        let tail = keep / 2;
        let truncated = format!("{}__{}", &name[..head], &name[name.len() - tail..]);
        log::debug!("Truncated identifier '{}' to '{}'", name, truncated);
        truncated
    }
}

/// Replace every character outside `[A-Za-z0-9_]` with `_`.
pub fn standard_naming(name: &str) -> String {
    non_identifier_chars().replace_all(name.trim(), "_").into_owned()
}

#[cfg(test)]
#[path = "normalizer_test.rs"]
mod tests;
