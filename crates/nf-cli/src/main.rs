//! normflow CLI - compiles stream catalogs into normalized dbt models

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{compile, plan};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Compile(args) => compile::execute(args, &cli.global),
        cli::Commands::Plan(args) => plan::execute(args, &cli.global),
    }
}
