//! Strongly-typed names for streams and generated tables.

use crate::newtype_string::define_newtype_string;

define_newtype_string! {
    /// A table name allocated from the run-wide registry.
    ///
    /// Table names are already normalized for the destination dialect and
    /// double as model (file) names, so they are never schema-qualified.
    pub struct TableName;
}

define_newtype_string! {
    /// Name of a stream as declared in the catalog, before normalization.
    pub struct StreamName;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_name_str_comparisons() {
        let name = TableName::new("users_1_ab1");
        assert_eq!(name, "users_1_ab1");
        assert_eq!(name.as_str(), "users_1_ab1");
        assert!(name.ends_with("_ab1"));
        assert_eq!(format!("{}", name), "users_1_ab1");
    }

    #[test]
    fn test_table_name_rejects_empty() {
        assert!(TableName::try_new("").is_none());
        let result: Result<TableName, _> = serde_json::from_str(r#""""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_set_lookup_by_str() {
        let mut set = HashSet::new();
        set.insert(TableName::new("users"));
        assert!(set.contains("users"));
        assert!(!set.contains("users_1"));
    }

    #[test]
    fn test_stream_name_serde() {
        let name: StreamName = serde_json::from_str(r#""users""#).unwrap();
        assert_eq!(name, "users");
        assert_eq!(serde_json::to_string(&name).unwrap(), r#""users""#);
    }
}
