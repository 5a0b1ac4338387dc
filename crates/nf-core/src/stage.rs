//! The four ordered transformation stages generated per node.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of a node's transformation pipeline.
///
/// Stages run in declaration order and each one reads only the output of the
/// stage before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Pull typed JSON paths out of the raw record
    RawExtract,
    /// Cast every column to the warehouse type
    TypeCast,
    /// Add the surrogate key column
    HashId,
    /// User-facing table
    Final,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Stage; 4] = [Stage::RawExtract, Stage::TypeCast, Stage::HashId, Stage::Final];

    /// Suffix appended to intermediate table names for this stage.
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            Stage::RawExtract => Some("ab1"),
            Stage::TypeCast => Some("ab2"),
            Stage::HashId => Some("ab3"),
            Stage::Final => None,
        }
    }

    /// Where the stage's model is written.
    pub fn area(&self) -> OutputArea {
        match self {
            Stage::Final => OutputArea::Final,
            _ => OutputArea::Staging,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::RawExtract => write!(f, "raw_extract"),
            Stage::TypeCast => write!(f, "type_cast"),
            Stage::HashId => write!(f, "hash_id"),
            Stage::Final => write!(f, "final"),
        }
    }
}

/// Destination namespace of a generated model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputArea {
    /// Working tables in the raw schema
    Staging,
    /// Normalized tables in the user-facing schema
    Final,
}

impl fmt::Display for OutputArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputArea::Staging => write!(f, "staging"),
            OutputArea::Final => write!(f, "final"),
        }
    }
}
