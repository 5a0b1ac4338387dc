//! Compile command implementation

use anyhow::{Context, Result};
use nf_normalize::{compile_catalog, FileEmitter, OutputLayout, SOURCES_FILE_NAME};
use std::path::PathBuf;

use crate::cli::{CompileArgs, GlobalArgs};
use crate::commands::common::{self, MANIFEST_FILE_NAME};

/// Execute the compile command
pub fn execute(args: &CompileArgs, global: &GlobalArgs) -> Result<()> {
    let mut config = common::load_config(&args.input, global)?;
    if let Some(output_dir) = &args.output_dir {
        config.output_path = output_dir.clone();
    }
    let catalog = common::load_catalog(&args.input)?;
    let output_dir: PathBuf = config.output_dir();

    println!(
        "Compiling {} streams for {}...\n",
        catalog.len(),
        config.destination
    );

    let layout = OutputLayout::new(&config.staging_dir, &config.final_dir);
    let mut emitter = FileEmitter::new(&output_dir, layout);
    let report =
        compile_catalog(&config, &catalog, &mut emitter).context("Failed to compile catalog")?;

    for node in &report.nodes {
        let final_table = node
            .tables
            .last()
            .map(|(_, name)| name.as_str())
            .unwrap_or_default();
        println!("  ✓ {} -> {}", node.json_path, final_table);

        if global.verbose {
            for (stage, name) in &node.tables {
                eprintln!("[verbose]   {} {}", stage, name);
            }
        }
    }
    common::print_diagnostics(&report.diagnostics);

    report
        .sources
        .save(&output_dir)
        .context("Failed to write sources")?;
    let manifest_path = output_dir.join(MANIFEST_FILE_NAME);
    report
        .manifest
        .save(&manifest_path)
        .context("Failed to write manifest")?;

    if global.verbose {
        eprintln!(
            "[verbose] Wrote {} and {}",
            output_dir.join(SOURCES_FILE_NAME).display(),
            manifest_path.display()
        );
    }

    println!(
        "\nCompiled {} models ({} written, {} unchanged) to {}",
        report.model_count(),
        emitter.written(),
        emitter.unchanged(),
        output_dir.display()
    );
    if !report.diagnostics.is_empty() {
        println!("{} warnings", report.diagnostics.len());
    }
    Ok(())
}
