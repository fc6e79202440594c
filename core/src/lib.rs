#![deny(missing_docs)]

//! # API Doc Core
//!
//! Build-time generator of API documentation from declared endpoint types.
//!
//! Drivers describe types through a [`TypeRegistry`] and endpoints through
//! [`declarations`]; an [`ApiScanner`] turns them into a [`ResourceTree`]
//! whose response and request bodies carry a JSON Schema and an example
//! document per negotiated media type.

/// Shared error types.
pub mod error;

/// Non-fatal findings of a run.
pub mod diagnostics;

/// Generator settings.
pub mod config;

/// Type descriptions, registry and classification.
pub mod types;

/// Schema and example document generation.
pub mod document;

/// Resource paths, the resource tree and operations.
pub mod resources;

/// Status, media type and response resolution.
pub mod responses;

/// Driver input records.
pub mod declarations;

/// Endpoint scanning facade.
pub mod scanner;

pub use config::GeneratorConfig;
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use document::{Document, DocumentGenerator};
pub use error::{AppError, AppResult};
pub use resources::{ResourceNode, ResourcePath, ResourceTree};
pub use scanner::{ApiDocumentation, ApiScanner};
pub use types::{TypeDescriptor, TypeRegistry};
