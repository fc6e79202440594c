#![deny(missing_docs)]

//! # Declarations
//!
//! Records handed over by whatever enumerates the declared endpoints. They
//! carry already-extracted names, types and texts and are consumed once.

use crate::resources::operation::HttpMethod;
use crate::responses::status::StatusSymbol;
use serde::Deserialize;

/// An endpoint type: a base path and the operations below it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EndpointDeclaration {
    /// Base URI template.
    pub path: String,
    /// Short human readable name.
    pub display_name: Option<String>,
    /// Long description.
    pub description: Option<String>,
    /// Media types consumed by every operation unless overridden.
    pub consumes: Vec<String>,
    /// Media types produced by every operation unless overridden.
    pub produces: Vec<String>,
    /// Declared operations.
    pub operations: Vec<OperationDeclaration>,
}

/// One declared operation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OperationDeclaration {
    /// The verb.
    pub method: HttpMethod,
    /// URI template relative to the endpoint base path.
    #[serde(default)]
    pub path: String,
    /// Short human readable name.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Long description.
    #[serde(default)]
    pub description: Option<String>,
    /// Declared parameters.
    #[serde(default)]
    pub parameters: Vec<ParameterDeclaration>,
    /// Qualified name of the request payload type.
    #[serde(default)]
    pub request_body: Option<String>,
    /// Media types consumed.
    #[serde(default)]
    pub consumes: Vec<String>,
    /// Media types produced.
    #[serde(default)]
    pub produces: Vec<String>,
    /// Qualified name of the declared result type; `None` for no result.
    #[serde(default)]
    pub result: Option<String>,
    /// Declared interesting responses.
    #[serde(default)]
    pub responses: Vec<ResponseDeclaration>,
}

impl OperationDeclaration {
    /// A bare operation on the endpoint base path.
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            path: String::new(),
            display_name: None,
            description: None,
            parameters: Vec::new(),
            request_body: None,
            consumes: Vec::new(),
            produces: Vec::new(),
            result: None,
            responses: Vec::new(),
        }
    }
}

/// Where a parameter is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// URI template variable.
    Path,
    /// Query string.
    Query,
    /// Request header.
    Header,
}

/// One declared parameter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParameterDeclaration {
    /// Parameter name.
    pub name: String,
    /// Where it is read from.
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Qualified name of its type.
    #[serde(rename = "type", default = "default_type_name")]
    pub type_name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Default value, verbatim.
    #[serde(default)]
    pub default: Option<String>,
    /// Explicit requiredness; path parameters are always required.
    #[serde(default)]
    pub required: Option<bool>,
}

/// One declared response header.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeaderDeclaration {
    /// Header name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Qualified name of its type.
    #[serde(rename = "type", default = "default_type_name")]
    pub type_name: String,
}

/// One declared response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResponseDeclaration {
    /// Symbolic status.
    pub status: Option<StatusSymbol>,
    /// Numeric status code.
    pub status_code: Option<u16>,
    /// Short title.
    pub title: Option<String>,
    /// Detail text.
    pub detail: Option<String>,
    /// Declared headers.
    pub headers: Vec<HeaderDeclaration>,
    /// Qualified name of the payload type; `None` or `()` falls back to the
    /// operation result.
    pub body: Option<String>,
    /// Media types, overriding the operation's.
    pub media_types: Vec<String>,
}

impl ResponseDeclaration {
    /// A response declared by symbolic status.
    pub fn status(status: StatusSymbol) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// A response declared by numeric code.
    pub fn code(code: u16) -> Self {
        Self {
            status_code: Some(code),
            ..Self::default()
        }
    }
}

fn default_type_name() -> String {
    "String".to_string()
}
