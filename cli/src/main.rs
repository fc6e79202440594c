#![deny(missing_docs)]

//! # API Doc CLI
//!
//! Command Line Interface for the API documentation generator.
//!
//! Supported Commands:
//! - `generate`: Manifest -> Resource tree -> RAML (or JSON) document.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::error::CliResult;

mod emit;
mod error;
mod generate;
mod manifest;

#[derive(Parser, Debug)]
#[clap(author, version, about = "API documentation generator")]
struct Cli {
    /// Log filter used when `RUST_LOG` is not set (e.g. `debug`, `apidoc_core=trace`).
    #[clap(long, global = true, default_value = "info", env = "APIDOC_LOG_LEVEL")]
    log_level: String,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generates API documentation from a manifest.
    Generate(generate::GenerateArgs),
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match &cli.command {
        Commands::Generate(args) => generate::execute(args)?,
    }

    Ok(())
}
