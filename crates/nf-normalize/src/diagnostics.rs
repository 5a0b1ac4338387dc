//! Non-fatal findings recorded while compiling a catalog.

use serde::Serialize;
use std::fmt;

/// A recoverable problem: compilation continues and the finding is reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A node without usable properties produced no models
    SkippedStream { json_path: String },

    /// A field using `oneOf`/`anyOf`/`allOf` was not decomposed
    UnsupportedConstruct { json_path: String, field: String },

    /// A field without a usable type was passed through uncast
    UnknownType {
        json_path: String,
        field: String,
        declared: Option<String>,
    },
}

impl Diagnostic {
    /// Send the diagnostic to the log at its level
    pub fn log(&self) {
        match self {
            Diagnostic::SkippedStream { .. } => log::info!("{}", self),
            _ => log::warn!("{}", self),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::SkippedStream { json_path } => {
                write!(f, "Ignoring '{}' because its properties list is empty", json_path)
            }
            Diagnostic::UnsupportedConstruct { json_path, field } => write!(
                f,
                "Field '{}' at {} uses oneOf/anyOf/allOf, which is not supported; no nested table generated",
                field, json_path
            ),
            Diagnostic::UnknownType {
                json_path,
                field,
                declared: Some(declared),
            } => write!(
                f,
                "Unknown type {} for column '{}' at {}",
                declared, field, json_path
            ),
            Diagnostic::UnknownType {
                json_path,
                field,
                declared: None,
            } => write!(f, "Unknown type for column '{}' at {}", field, json_path),
        }
    }
}

/// Ordered collection of diagnostics for one run
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Log and record a diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        diagnostic.log();
        self.items.push(diagnostic);
    }

    /// Recorded diagnostics in order
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Number of recorded diagnostics
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Take ownership of the recorded diagnostics
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        for diagnostic in iter {
            self.push(diagnostic);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let d = Diagnostic::UnknownType {
            json_path: "users".into(),
            field: "blob".into(),
            declared: Some("\"null\"".into()),
        };
        assert_eq!(d.to_string(), "Unknown type \"null\" for column 'blob' at users");

        let d = Diagnostic::SkippedStream {
            json_path: "users/tags".into(),
        };
        assert!(d.to_string().contains("users/tags"));
    }

    #[test]
    fn test_collect_in_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(Diagnostic::SkippedStream {
            json_path: "a".into(),
        });
        diagnostics.extend([Diagnostic::UnsupportedConstruct {
            json_path: "b".into(),
            field: "f".into(),
        }]);
        assert_eq!(diagnostics.len(), 2);
        let kinds: Vec<String> = diagnostics
            .iter()
            .map(|d| serde_json::to_value(d).unwrap()["kind"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(kinds, vec!["skipped_stream", "unsupported_construct"]);
    }
}
