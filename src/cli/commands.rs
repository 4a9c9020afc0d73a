use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::write_outputs;

/// Command-line interface for the Postman export generator.
#[derive(Parser)]
#[command(name = "postgen")]
#[command(about = "DemoApp Postman collection generator", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the collection and environment documents
    Generate {
        /// Output directory for the generated JSON files
        #[arg(short, long, default_value = "postman")]
        output: PathBuf,
    },
}

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate { output } => {
            let written = write_outputs(output)?;
            println!("Wrote: {}", written.collection.display());
            println!("Wrote: {}", written.environment.display());
            Ok(())
        }
    }
}
