use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn test_parse_compile_overrides() {
    let cli = Cli::parse_from([
        "nf",
        "--verbose",
        "compile",
        "--catalog",
        "catalog.json",
        "-d",
        "snowflake",
        "--schema",
        "analytics",
        "--streams",
        "users,orders",
        "-o",
        "out",
    ]);
    assert!(cli.global.verbose);
    match cli.command {
        Commands::Compile(args) => {
            assert_eq!(args.input.catalog, "catalog.json");
            assert_eq!(args.input.destination.as_deref(), Some("snowflake"));
            assert_eq!(args.input.schema.as_deref(), Some("analytics"));
            assert_eq!(args.input.streams.as_deref(), Some("users,orders"));
            assert_eq!(args.output_dir.as_deref(), Some("out"));
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_plan_defaults_to_text() {
    let cli = Cli::parse_from(["nf", "plan", "--catalog", "c.json", "--config", "nf.yml"]);
    assert_eq!(cli.global.config.as_deref(), Some("nf.yml"));
    match cli.command {
        Commands::Plan(args) => assert_eq!(args.output, PlanOutput::Text),
        other => panic!("unexpected command: {:?}", other),
    }
}
