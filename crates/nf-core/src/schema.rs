//! Classification of JSON schema property definitions.
//!
//! Stream schemas arrive as JSON schema fragments. Only the structural part is
//! interpreted here: the declared `type` (a string or a list of strings such
//! as `["null", "integer"]`), the composition keywords, and the reserved
//! internal metadata columns written by the loader.

use serde_json::{Map, Value};
use std::fmt;

/// Ordered property mapping of a stream or nested object.
pub type Properties = Map<String, Value>;

/// Prefix shared by every internal metadata column of a raw table.
pub const INTERNAL_COLUMN_PREFIX: &str = "_airbyte_";

/// Column holding the time a record was emitted by the source.
pub const EMITTED_AT_COLUMN: &str = "_airbyte_emitted_at";

/// Default raw column holding the record JSON.
pub const DEFAULT_JSON_COLUMN: &str = "_airbyte_data";

const COMBINING_KEYWORDS: [&str; 3] = ["oneOf", "anyOf", "allOf"];

/// Leaf scalar types a column can be cast to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    String,
    Integer,
    Number,
    Boolean,
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarType::String => write!(f, "string"),
            ScalarType::Integer => write!(f, "integer"),
            ScalarType::Number => write!(f, "number"),
            ScalarType::Boolean => write!(f, "boolean"),
        }
    }
}

/// The structural type a property definition declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredType {
    /// No `type` key at all
    Missing,
    /// `array`, possibly alongside `null`
    Array,
    /// `object`, possibly alongside `null`
    Object,
    /// One of the leaf scalar types
    Scalar(ScalarType),
    /// A `type` that names nothing we can map (for example only `null`)
    Unrecognized(String),
}

impl DeclaredType {
    /// Classify a property definition.
    ///
    /// When a type list names several kinds the first match in the order
    /// array, object, integer, number, boolean, string wins.
    pub fn of(definition: &Value) -> Self {
        let Some(declared) = definition.get("type") else {
            return DeclaredType::Missing;
        };
        let names: Vec<&str> = match declared {
            Value::String(s) => vec![s.as_str()],
            Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
            other => return DeclaredType::Unrecognized(other.to_string()),
        };
        let has = |name: &str| names.contains(&name);

        if has("array") {
            DeclaredType::Array
        } else if has("object") {
            DeclaredType::Object
        } else if has("integer") {
            DeclaredType::Scalar(ScalarType::Integer)
        } else if has("number") {
            DeclaredType::Scalar(ScalarType::Number)
        } else if has("boolean") {
            DeclaredType::Scalar(ScalarType::Boolean)
        } else if has("string") {
            DeclaredType::Scalar(ScalarType::String)
        } else {
            DeclaredType::Unrecognized(declared.to_string())
        }
    }

    /// Whether the definition is a leaf scalar.
    pub fn is_simple(&self) -> bool {
        matches!(self, DeclaredType::Scalar(_))
    }
}

/// Whether a field is one of the loader's internal metadata columns.
pub fn is_internal_column(name: &str) -> bool {
    name.starts_with(INTERNAL_COLUMN_PREFIX)
}

/// Whether a definition uses schema composition (`oneOf`/`anyOf`/`allOf`).
pub fn is_combining(definition: &Value) -> bool {
    definition
        .as_object()
        .is_some_and(|obj| COMBINING_KEYWORDS.iter().any(|k| obj.contains_key(*k)))
}

/// Iterate over the non-internal fields in declaration order.
pub fn usable_fields(properties: &Properties) -> impl Iterator<Item = (&String, &Value)> {
    properties
        .iter()
        .filter(|(name, _)| !is_internal_column(name))
}
