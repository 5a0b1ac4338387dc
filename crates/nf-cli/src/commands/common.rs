//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use nf_core::config::CONFIG_FILE_NAME;
use nf_core::{Catalog, Config, Destination};
use nf_normalize::Diagnostic;
use std::path::Path;

use crate::cli::{GlobalArgs, InputArgs};

/// Name of the manifest written next to the generated models
pub(crate) const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Load the config and apply command-line overrides.
///
/// Without `--config` the `normflow.yml` of the working directory is used;
/// without either, `--destination` and `--schema` are required.
pub(crate) fn load_config(input: &InputArgs, global: &GlobalArgs) -> Result<Config> {
    let mut config = match &global.config {
        Some(path) => Config::load(Path::new(path))
            .with_context(|| format!("Failed to load config: {}", path))?,
        None if Path::new(CONFIG_FILE_NAME).exists() => Config::load(Path::new(CONFIG_FILE_NAME))
            .with_context(|| format!("Failed to load {}", CONFIG_FILE_NAME))?,
        None => {
            let destination = input.destination.as_deref().with_context(|| {
                format!("No {} found: --destination is required", CONFIG_FILE_NAME)
            })?;
            let schema = input
                .schema
                .as_deref()
                .with_context(|| format!("No {} found: --schema is required", CONFIG_FILE_NAME))?;
            Config::new(parse_destination(destination)?, schema)
        }
    };

    if let Some(destination) = &input.destination {
        config.destination = parse_destination(destination)?;
    }
    if let Some(schema) = &input.schema {
        config.schema = schema.clone();
    }
    if let Some(streams) = &input.streams {
        config.streams = streams
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
    }
    config.validate().context("Invalid configuration")?;

    if global.verbose {
        eprintln!(
            "[verbose] Destination: {}, schema: {}, raw schema: {}",
            config.destination,
            config.schema,
            config.raw_schema_name()
        );
    }
    Ok(config)
}

fn parse_destination(value: &str) -> Result<Destination> {
    value
        .parse::<Destination>()
        .with_context(|| format!("Invalid destination: {}", value))
}

/// Load the stream catalog named on the command line
pub(crate) fn load_catalog(input: &InputArgs) -> Result<Catalog> {
    Catalog::load(Path::new(&input.catalog))
        .with_context(|| format!("Failed to load catalog: {}", input.catalog))
}

/// Print diagnostics as warnings on stderr
pub(crate) fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("Warning: {}", diagnostic);
    }
}
