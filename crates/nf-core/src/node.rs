//! Nodes of the decomposition tree.
//!
//! A node is either a root stream or a nested object/array found inside
//! another node. Nodes never point at each other: a child carries a copy of
//! what it needs from its parent ([`ParentLink`]) and the full list of
//! ancestor names in `path`.

use crate::schema::{self, Properties};

/// What a child node needs to join back to its parent row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentLink {
    /// Parent node name (field or stream name, not normalized)
    pub name: String,

    /// Normalized base table name of the parent
    pub table_name: String,

    /// Normalized hash id column of the parent
    pub hash_id: String,
}

/// One unit of the decomposition tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Stream name for roots, field name for children
    pub name: String,

    /// Properties of this node, in declaration order
    pub properties: Properties,

    /// Link to the parent, `None` for roots
    pub parent: Option<ParentLink>,

    /// Expression selecting this node's JSON out of its input row
    pub json_accessor: String,

    /// Whether the node comes from an array that must be unnested
    pub is_nested_array: bool,

    /// Names from the root stream down to this node
    pub path: Vec<String>,

    /// Schema receiving the staging models
    pub raw_schema: String,

    /// Schema receiving the final models
    pub schema: String,
}

impl Node {
    /// Create the root node of a stream.
    pub fn root(
        stream_name: impl Into<String>,
        properties: Properties,
        json_accessor: impl Into<String>,
        raw_schema: impl Into<String>,
        schema: impl Into<String>,
    ) -> Self {
        let name = stream_name.into();
        Self {
            path: vec![name.clone()],
            name,
            properties,
            parent: None,
            json_accessor: json_accessor.into(),
            is_nested_array: false,
            raw_schema: raw_schema.into(),
            schema: schema.into(),
        }
    }

    /// Create a node for a nested field of `parent`.
    ///
    /// The child inherits the parent's schemas and extends its path.
    pub fn child(
        parent: &Node,
        link: ParentLink,
        field: impl Into<String>,
        json_accessor: impl Into<String>,
        properties: Properties,
        is_nested_array: bool,
    ) -> Self {
        let name = field.into();
        let mut path = parent.path.clone();
        path.push(name.clone());
        Self {
            name,
            properties,
            parent: Some(link),
            json_accessor: json_accessor.into(),
            is_nested_array,
            path,
            raw_schema: parent.raw_schema.clone(),
            schema: parent.schema.clone(),
        }
    }

    /// Whether this node is a root stream
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Path of the node as `stream/field/...`, used in comments and logs.
    pub fn json_path(&self) -> String {
        self.path.join("/")
    }

    /// Un-normalized base for this node's table names (`stream_field_...`).
    pub fn base_name(&self) -> String {
        self.path.join("_")
    }

    /// Non-internal fields in declaration order.
    pub fn usable_fields(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        schema::usable_fields(&self.properties)
    }

    /// Whether the node has at least one non-internal field.
    pub fn has_usable_fields(&self) -> bool {
        self.usable_fields().next().is_some()
    }
}
