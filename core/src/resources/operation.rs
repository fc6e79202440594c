#![deny(missing_docs)]

//! # Operations
//!
//! One [`Operation`] per (resource, verb), with its resolved parameters,
//! bodies and responses.

use crate::document::Document;
use crate::responses::status::ResolvedStatus;
use crate::types::classifier::ScalarType;
use derive_more::Display;
use indexmap::IndexMap;
use serde::Deserialize;
use std::str::FromStr;

/// HTTP verbs an operation can be declared for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Deserialize)]
#[serde(try_from = "String")]
pub enum HttpMethod {
    /// GET
    #[display("GET")]
    Get,
    /// POST
    #[display("POST")]
    Post,
    /// PUT
    #[display("PUT")]
    Put,
    /// PATCH
    #[display("PATCH")]
    Patch,
    /// DELETE
    #[display("DELETE")]
    Delete,
    /// HEAD
    #[display("HEAD")]
    Head,
    /// OPTIONS
    #[display("OPTIONS")]
    Options,
    /// TRACE
    #[display("TRACE")]
    Trace,
}

impl HttpMethod {
    /// Lowercase verb, as used for RAML method keys.
    pub fn as_lower(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "delete",
            HttpMethod::Head => "head",
            HttpMethod::Options => "options",
            HttpMethod::Trace => "trace",
        }
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            "HEAD" => Ok(HttpMethod::Head),
            "OPTIONS" => Ok(HttpMethod::Options),
            "TRACE" => Ok(HttpMethod::Trace),
            _ => Err(format!("unsupported HTTP method `{}`", s)),
        }
    }
}

impl TryFrom<String> for HttpMethod {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A resolved path, query or header parameter, or a resource URI parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Scalar type.
    pub ty: ScalarType,
    /// Description.
    pub description: Option<String>,
    /// Default value, verbatim.
    pub default: Option<String>,
    /// Whether the parameter must be present.
    pub required: bool,
    /// Regex constraint from the URI template.
    pub pattern: Option<String>,
}

impl Parameter {
    /// A required string parameter with nothing else known.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ScalarType::String,
            description: None,
            default: None,
            required: true,
            pattern: None,
        }
    }
}

/// One payload materialized for one media type.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Negotiated media type.
    pub media_type: String,
    /// Qualified name of the payload type.
    pub type_name: String,
    /// Schema document; `None` when generation failed.
    pub schema: Option<Document>,
    /// Example document; `None` when generation failed.
    pub example: Option<Document>,
}

/// A resolved response header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHeader {
    /// Header name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Scalar type.
    pub ty: ScalarType,
}

/// A resolved response.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Status it is documented under.
    pub status: ResolvedStatus,
    /// Composed description.
    pub description: Option<String>,
    /// Headers, by name.
    pub headers: IndexMap<String, ResponseHeader>,
    /// Bodies, by media type.
    pub bodies: IndexMap<String, Body>,
}

/// One verb attached to one resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// The verb.
    pub method: HttpMethod,
    /// Short human readable name.
    pub display_name: Option<String>,
    /// Long description.
    pub description: Option<String>,
    /// Path parameters, by name.
    pub path_parameters: IndexMap<String, Parameter>,
    /// Query parameters, by name.
    pub query_parameters: IndexMap<String, Parameter>,
    /// Header parameters, by name.
    pub header_parameters: IndexMap<String, Parameter>,
    /// Request bodies, by media type.
    pub request_bodies: IndexMap<String, Body>,
    /// Responses, by status code string.
    pub responses: IndexMap<String, Response>,
}

impl Operation {
    /// An empty operation for the given verb.
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            display_name: None,
            description: None,
            path_parameters: IndexMap::new(),
            query_parameters: IndexMap::new(),
            header_parameters: IndexMap::new(),
            request_bodies: IndexMap::new(),
            responses: IndexMap::new(),
        }
    }

    /// Response documented under the given status code.
    pub fn response(&self, code: u16) -> Option<&Response> {
        self.responses.get(&code.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parsing() {
        assert_eq!("get".parse::<HttpMethod>(), Ok(HttpMethod::Get));
        assert_eq!("DELETE".parse::<HttpMethod>(), Ok(HttpMethod::Delete));
        assert!("BREW".parse::<HttpMethod>().is_err());
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(HttpMethod::Patch.as_lower(), "patch");
    }

    #[test]
    fn test_method_deserialize() {
        let method: HttpMethod = serde_json::from_str("\"post\"").unwrap();
        assert_eq!(method, HttpMethod::Post);
    }
}
