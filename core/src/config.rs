#![deny(missing_docs)]

//! # Generator Configuration
//!
//! Knobs shared by the scanner, the type introspector and the document
//! generator. Every field has a default so a partial `config` section in a
//! manifest is enough.

use crate::responses::status::StatusSymbol;
use serde::Deserialize;

/// Flavour of a known string-like wrapper, used to pick an example stand-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringWrapperKind {
    /// Absolute URI (`url::Url`, `http::Uri`).
    Uri,
    /// File system path (`std::path::PathBuf`).
    Path,
}

/// A known URI/path-like type serialized as a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StringWrapper {
    /// Qualified type name.
    pub name: String,
    /// Example flavour.
    pub kind: StringWrapperKind,
}

impl StringWrapper {
    fn new(name: &str, kind: StringWrapperKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }
}

/// Configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Media types used when an operation declares none.
    pub default_media_types: Vec<String>,
    /// Roots of the problem detail family.
    pub problem_types: Vec<String>,
    /// Known string-like wrappers.
    pub string_wrappers: Vec<StringWrapper>,
    /// Known integer-like wrappers (status codes).
    pub integer_wrappers: Vec<String>,
    /// Method names that count as a numeric status-code accessor.
    pub status_code_accessors: Vec<String>,
    /// Status of the synthetic success response; also the example value of
    /// status-like wrappers.
    pub default_status: StatusSymbol,
    /// Optional recursion limit for object documents. `None` leaves
    /// recursion unbounded.
    pub max_depth: Option<usize>,
    /// Value of the `$schema` marker on root schema documents.
    pub schema_dialect: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_media_types: vec!["application/json".to_string()],
            problem_types: vec![
                "problem::Problem".to_string(),
                "problem::ProblemDetails".to_string(),
            ],
            string_wrappers: vec![
                StringWrapper::new("url::Url", StringWrapperKind::Uri),
                StringWrapper::new("http::Uri", StringWrapperKind::Uri),
                StringWrapper::new("std::path::PathBuf", StringWrapperKind::Path),
                StringWrapper::new("std::path::Path", StringWrapperKind::Path),
            ],
            integer_wrappers: vec!["http::StatusCode".to_string()],
            status_code_accessors: vec![
                "status_code".to_string(),
                "as_u16".to_string(),
                "code".to_string(),
            ],
            default_status: StatusSymbol::Ok,
            max_depth: None,
            schema_dialect: "http://json-schema.org/draft-04/schema#".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Replaces the default media types.
    pub fn with_default_media_types(mut self, media_types: &[&str]) -> Self {
        self.default_media_types = media_types.iter().map(|m| m.to_string()).collect();
        self
    }

    /// Adds a problem family root.
    pub fn with_problem_type(mut self, name: impl Into<String>) -> Self {
        self.problem_types.push(name.into());
        self
    }

    /// Bounds object recursion.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}
