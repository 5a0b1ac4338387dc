//! Discovery of nested property maps below a field.
//!
//! A field can wrap its nested properties in several levels that own no
//! table of their own (`items` of an array, untyped mappings, lists of
//! sub-definitions). Discovery walks through those levels and returns every
//! flat property map (or leaf scalar) it finds, keyed by the underscore-joined
//! path that led to it.

use nf_core::schema::{DeclaredType, Properties};
use serde_json::Value;

/// What was found at the end of a discovery path.
#[derive(Debug, Clone, PartialEq)]
pub enum Discovered {
    /// A nested object with its own properties
    Properties(Properties),
    /// A leaf scalar; a child for it has nothing to extract
    Leaf,
}

impl Discovered {
    /// Property map of the discovery, empty for leaves
    pub fn into_properties(self) -> Properties {
        match self {
            Discovered::Properties(props) => props,
            Discovered::Leaf => Properties::new(),
        }
    }
}

/// Results of one discovery, in the order they were found.
///
/// A key found twice keeps its first position and its latest value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Discoveries {
    entries: Vec<(String, Discovered)>,
}

impl Discoveries {
    fn single(key: String, found: Discovered) -> Self {
        Self {
            entries: vec![(key, found)],
        }
    }

    fn merge(&mut self, other: Discoveries) {
        for (key, found) in other.entries {
            match self.entries.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = found,
                None => self.entries.push((key, found)),
            }
        }
    }

    /// Whether nothing was found
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of discoveries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Composite keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Look up one discovery by composite key
    pub fn get(&self, key: &str) -> Option<&Discovered> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, d)| d)
    }
}

impl IntoIterator for Discoveries {
    type Item = (String, Discovered);
    type IntoIter = std::vec::IntoIter<(String, Discovered)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Find the nested property maps reachable from `definition`.
///
/// - an `items` wrapper is followed under the same path;
/// - a `properties` map ends the walk;
/// - a leaf scalar type ends the walk with [`Discovered::Leaf`];
/// - any other mapping or list is searched member by member.
pub fn find_nested_properties(path: &[String], field: &str, definition: &Value) -> Discoveries {
    let mut current_path = path.to_vec();
    current_path.push(field.to_string());
    let key = current_path.join("_");

    match definition {
        Value::Object(map) => {
            if let Some(items) = map.get("items") {
                return find_nested_properties(path, field, items);
            }
            if let Some(properties) = map.get("properties") {
                let props = properties.as_object().cloned().unwrap_or_default();
                return Discoveries::single(key, Discovered::Properties(props));
            }
            if map.contains_key("type") && DeclaredType::of(definition).is_simple() {
                return Discoveries::single(key, Discovered::Leaf);
            }
            let mut result = Discoveries::default();
            for (name, sub) in map {
                result.merge(find_nested_properties(&current_path, name, sub));
            }
            result
        }
        Value::Array(items) => {
            let mut result = Discoveries::default();
            for item in items {
                result.merge(find_nested_properties(&current_path, field, item));
            }
            result
        }
        _ => Discoveries::default(),
    }
}
