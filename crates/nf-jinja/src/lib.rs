//! nf-jinja - Jinja templating layer for normflow
//!
//! Generated models are dbt models: SQL with Jinja calls (`ref()`,
//! `source()`, `config()` and the warehouse macros). This crate holds the
//! model template and the helpers that produce those Jinja constructs.

pub mod environment;
pub mod error;

pub use environment::{config_header, ref_table, source_table, ModelContext, ModelTemplates};
pub use error::{JinjaError, JinjaResult};
