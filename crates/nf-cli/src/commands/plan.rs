//! Plan command implementation

use anyhow::{Context, Result};
use nf_normalize::{compile_catalog, CompileReport, MemoryEmitter};
use serde_json::json;

use crate::cli::{GlobalArgs, PlanArgs, PlanOutput};
use crate::commands::common;

/// Execute the plan command
pub fn execute(args: &PlanArgs, global: &GlobalArgs) -> Result<()> {
    let config = common::load_config(&args.input, global)?;
    let catalog = common::load_catalog(&args.input)?;

    let mut emitter = MemoryEmitter::new();
    let report =
        compile_catalog(&config, &catalog, &mut emitter).context("Failed to compile catalog")?;

    match args.output {
        PlanOutput::Text => print_text(&report),
        PlanOutput::Json => print_json(&report)?,
    }
    common::print_diagnostics(&report.diagnostics);
    Ok(())
}

fn print_text(report: &CompileReport) {
    for node in &report.nodes {
        let depth = node.json_path.matches('/').count();
        let marker = if node.is_nested_array { " [array]" } else { "" };
        println!("{}{}{}", "  ".repeat(depth), node.json_path, marker);
        for (stage, name) in &node.tables {
            println!("{}  {:<12} {}", "  ".repeat(depth), stage.to_string(), name);
        }
    }
    println!(
        "\n{} nodes, {} models",
        report.nodes.len(),
        report.model_count()
    );
}

fn print_json(report: &CompileReport) -> Result<()> {
    let nodes: Vec<serde_json::Value> = report
        .nodes
        .iter()
        .map(|node| {
            let tables: serde_json::Map<String, serde_json::Value> = node
                .tables
                .iter()
                .map(|(stage, name)| (stage.to_string(), json!(name.as_str())))
                .collect();
            json!({
                "json_path": node.json_path,
                "is_nested_array": node.is_nested_array,
                "tables": tables,
            })
        })
        .collect();
    let output = json!({
        "destination": report.manifest.destination,
        "schema": report.manifest.schema,
        "raw_schema": report.manifest.raw_schema,
        "nodes": nodes,
        "warnings": report.diagnostics,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
