//! CLI command implementations

pub(crate) mod common;
pub(crate) mod compile;
pub(crate) mod plan;
