//! nf-core - Core library for normflow
//!
//! This crate provides the types shared by every normflow component: the
//! stream catalog and property classification, the node tree value type,
//! the four transformation stages, the run-wide table name registry,
//! configuration parsing, and the compile manifest.

pub mod catalog;
pub mod checksum;
pub mod config;
pub mod error;
pub mod manifest;
mod newtype_string;
pub mod node;
pub mod registry;
pub mod schema;
pub mod stage;
pub mod table_name;

pub use catalog::{Catalog, StreamDefinition};
pub use checksum::compute_checksum;
pub use config::{Config, Destination};
pub use error::{CoreError, CoreResult};
pub use manifest::{Manifest, ManifestModel};
pub use node::{Node, ParentLink};
pub use registry::{TableNameRegistry, TableRole, MAX_SUFFIX_ATTEMPTS};
pub use schema::{DeclaredType, ScalarType};
pub use stage::{OutputArea, Stage};
pub use table_name::{StreamName, TableName};
