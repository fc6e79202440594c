#![deny(missing_docs)]

//! # Generate Command
//!
//! Loads a manifest, scans its endpoints and writes the rendered document.
//!
//! The document is written even when errors were recorded; the command then
//! fails so the surrounding build step fails too.

use crate::emit::{render, to_text, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::manifest::ApiManifest;
use apidoc_core::{ApiScanner, Severity};
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the API manifest (`.yaml`, `.yml` or `.json`).
    pub manifest: PathBuf,

    /// Output format.
    #[clap(long, value_enum, default_value_t = OutputFormat::Yaml, env = "APIDOC_FORMAT")]
    pub format: OutputFormat,

    /// Output path. Prints to stdout if not provided.
    #[clap(long, env = "APIDOC_OUTPUT")]
    pub output: Option<PathBuf>,
}

/// Executes the generation.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &GenerateArgs) -> CliResult<()> {
    let manifest = ApiManifest::load(&args.manifest)?;
    tracing::info!(
        manifest = %args.manifest.display(),
        types = manifest.types.len(),
        endpoints = manifest.endpoints.len(),
        "generating documentation"
    );

    let registry = manifest.registry();
    let mut scanner = ApiScanner::new(&registry, &manifest.config);
    for endpoint in &manifest.endpoints {
        scanner.add_endpoint(endpoint)?;
    }
    let documentation = scanner.finish();

    let text = to_text(&render(&manifest, &documentation.tree)?, args.format)?;
    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, text)?;
            tracing::info!(output = %path.display(), "documentation written");
        }
        None => println!("{}", text),
    }

    let errors = documentation
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    if errors > 0 {
        return Err(CliError::Diagnostics(errors));
    }
    Ok(())
}
