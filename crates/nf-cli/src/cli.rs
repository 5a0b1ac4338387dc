//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// normflow - Compile nested stream schemas into normalized dbt models
#[derive(Parser, Debug)]
#[command(name = "nf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the normflow.yml config file
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate models, sources.yml and manifest.json
    Compile(CompileArgs),

    /// Show the node tree and table names without writing files
    Plan(PlanArgs),
}

/// Inputs shared by every command
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Catalog JSON file describing the streams
    #[arg(long)]
    pub catalog: String,

    /// Override destination warehouse (bigquery, postgres, redshift, snowflake)
    #[arg(short, long)]
    pub destination: Option<String>,

    /// Override final schema
    #[arg(short, long)]
    pub schema: Option<String>,

    /// Stream names to compile (comma-separated, default: all)
    #[arg(long)]
    pub streams: Option<String>,
}

/// Arguments for the compile command
#[derive(Args, Debug)]
pub struct CompileArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Override output directory
    #[arg(short, long)]
    pub output_dir: Option<String>,
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: PlanOutput,
}

/// Plan output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanOutput {
    /// Indented node tree
    Text,
    /// JSON output
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
