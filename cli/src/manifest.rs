#![deny(missing_docs)]

//! # API Manifest
//!
//! The file a build hands to `apidoc generate`: API metadata, generator
//! settings, the declared types and the declared endpoints.

use crate::error::CliResult;
use apidoc_core::declarations::EndpointDeclaration;
use apidoc_core::{GeneratorConfig, TypeDescriptor, TypeRegistry};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Everything a generation run needs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiManifest {
    /// API title.
    pub title: String,
    /// API version.
    pub version: Option<String>,
    /// Base URI of the deployed API.
    pub base_uri: Option<String>,
    /// Generator settings.
    pub config: GeneratorConfig,
    /// Declared types, primitives excluded.
    pub types: Vec<TypeDescriptor>,
    /// Declared endpoints, in registration order.
    pub endpoints: Vec<EndpointDeclaration>,
}

impl ApiManifest {
    /// Loads a manifest; `.json` files are read as JSON, anything else as YAML.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)?;
        let manifest = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            _ => serde_yaml::from_str(&content)?,
        };
        Ok(manifest)
    }

    /// Registry holding the primitives and every declared type.
    pub fn registry(&self) -> TypeRegistry {
        TypeRegistry::from_iter(self.types.iter().cloned())
    }
}
