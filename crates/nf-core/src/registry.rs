//! Run-wide registry of allocated table names.
//!
//! Every model generated in a compilation run (all four stages of every node)
//! lives in one flat namespace. Names are only ever added; a name handed out
//! once is never renamed or released.

use crate::error::{CoreError, CoreResult};
use crate::table_name::TableName;
use std::collections::HashSet;

/// Highest numeric suffix tried before giving up on an intermediate name.
pub const MAX_SUFFIX_ATTEMPTS: usize = 999;

/// How a table name is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableRole {
    /// Final table of a root stream: keeps the normalized stream name as is
    TopLevelFinal,
    /// Any other table: gets a numeric suffix (and the stage suffix, if any)
    Intermediate,
}

/// Append-only set of table names for one compilation run.
///
/// Allocation takes `&mut self`, so check-then-insert cannot interleave with
/// another allocation.
#[derive(Debug, Default)]
pub struct TableNameRegistry {
    names: HashSet<TableName>,
    order: Vec<TableName>,
}

impl TableNameRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh name derived from `base`.
    ///
    /// `normalize` is applied to every candidate so the registry only ever
    /// sees dialect-normalized names. Intermediate candidates are tried as
    /// `{base}_{i}_{suffix}` (or `{base}_{i}` without a stage suffix) for
    /// `i` in `1..=MAX_SUFFIX_ATTEMPTS`, and the first free one wins.
    pub fn allocate<F>(
        &mut self,
        base: &str,
        role: TableRole,
        stage_suffix: Option<&str>,
        normalize: F,
    ) -> CoreResult<TableName>
    where
        F: Fn(&str) -> String,
    {
        match role {
            TableRole::TopLevelFinal => {
                let name = to_table_name(normalize(base), base)?;
                if self.contains(&name) {
                    return Err(CoreError::TopLevelNameCollision {
                        name: name.into_inner(),
                        stream: base.to_string(),
                    });
                }
                self.register(name.clone())?;
                Ok(name)
            }
            TableRole::Intermediate => {
                for i in 1..=MAX_SUFFIX_ATTEMPTS {
                    let candidate = match stage_suffix {
                        Some(suffix) => format!("{base}_{i}_{suffix}"),
                        None => format!("{base}_{i}"),
                    };
                    let name = to_table_name(normalize(&candidate), base)?;
                    if !self.contains(&name) {
                        self.register(name.clone())?;
                        return Ok(name);
                    }
                }
                Err(CoreError::NameCollisionExhausted {
                    base: base.to_string(),
                    attempts: MAX_SUFFIX_ATTEMPTS,
                })
            }
        }
    }

    /// Insert a name that must not already be present.
    pub fn register(&mut self, name: TableName) -> CoreResult<()> {
        if !self.names.insert(name.clone()) {
            return Err(CoreError::DuplicateTableName {
                name: name.into_inner(),
            });
        }
        log::debug!("Registered table name {}", name);
        self.order.push(name);
        Ok(())
    }

    /// Whether a name is already allocated
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of allocated names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing has been allocated yet
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Allocated names in allocation order
    pub fn iter(&self) -> impl Iterator<Item = &TableName> {
        self.order.iter()
    }
}

fn to_table_name(name: String, base: &str) -> CoreResult<TableName> {
    TableName::try_new(name).ok_or_else(|| CoreError::EmptyName {
        context: format!("table name derived from '{}'", base),
    })
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
