#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use apidoc_core::AppError;
use derive_more::{Display, From};

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// Failure inside the generator.
    #[display("{}", _0)]
    Core(AppError),

    /// IO Error wrapper.
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),

    /// Manifest or output YAML failure.
    #[display("YAML Error: {}", _0)]
    Yaml(serde_yaml::Error),

    /// Manifest or output JSON failure.
    #[display("JSON Error: {}", _0)]
    Json(serde_json::Error),

    /// The run recorded errors; artifacts were still written.
    #[from(ignore)]
    #[display("Generation reported {} error(s)", _0)]
    Diagnostics(usize),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_conversion() {
        let err: CliError = AppError::UnresolvedType("model::Ghost".into()).into();
        assert_eq!(err.to_string(), "Unresolved type: model::Ghost");
    }

    #[test]
    fn test_diagnostics_message() {
        assert_eq!(
            CliError::Diagnostics(2).to_string(),
            "Generation reported 2 error(s)"
        );
    }
}
