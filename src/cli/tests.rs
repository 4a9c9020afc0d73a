use clap::Parser;
use std::path::Path;

use super::{Cli, Commands};

#[test]
fn generate_defaults_to_postman_dir() {
    let cli = Cli::parse_from(["postgen", "generate"]);
    let Commands::Generate { output } = cli.command;
    assert_eq!(output, Path::new("postman"));
}

#[test]
fn generate_accepts_output_override() {
    let cli = Cli::parse_from(["postgen", "generate", "--output", "build/exports"]);
    let Commands::Generate { output } = cli.command;
    assert_eq!(output, Path::new("build/exports"));
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["postgen"]).is_err());
}
