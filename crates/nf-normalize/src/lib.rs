//! nf-normalize - Stream-to-relational model compiler for normflow
//!
//! This crate turns nested stream schemas into layered dbt models. Each
//! stream is decomposed into a tree of nodes (one per nested object or
//! array); each node is lowered into four ordered stage models whose names
//! are allocated from a run-wide registry.

pub mod compiler;
pub mod diagnostics;
pub mod discovery;
pub mod emitter;
pub mod processor;
pub mod sources;
pub mod stage_builder;

pub use compiler::{compile_catalog, CompileReport, CompiledNode, Compiler};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use discovery::{find_nested_properties, Discoveries, Discovered};
pub use emitter::{FileEmitter, MemoryEmitter, ModelArtifact, ModelEmitter, ModelRef, OutputLayout};
pub use processor::{ProcessedNode, StreamProcessor};
pub use sources::{RawSources, SOURCES_FILE_NAME};
pub use stage_builder::{PipelineStageBuilder, StageModel};
