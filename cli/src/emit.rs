#![deny(missing_docs)]

//! # RAML Emission
//!
//! Renders a finished resource tree as a RAML-style document tree. Schemas
//! and examples are embedded as pretty-printed JSON text under each body.

use crate::error::CliResult;
use crate::manifest::ApiManifest;
use apidoc_core::resources::{Body, Operation, Parameter, Response, ResponseHeader};
use apidoc_core::{Document, ResourceNode, ResourceTree};
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Header line of RAML documents.
pub const RAML_HEADER: &str = "#%RAML 1.0";

/// Output format of the rendered document.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// RAML flavoured YAML.
    #[default]
    Yaml,
    /// The same tree as JSON.
    Json,
}

/// Builds the document tree for a manifest and its resource tree.
pub fn render(manifest: &ApiManifest, tree: &ResourceTree) -> CliResult<Value> {
    let mut root = Map::new();
    root.insert("title".into(), Value::from(manifest.title.as_str()));
    insert_opt(&mut root, "version", manifest.version.as_deref());
    insert_opt(&mut root, "baseUri", manifest.base_uri.as_deref());
    let media_types = &manifest.config.default_media_types;
    let media_type = match media_types.as_slice() {
        [single] => Value::from(single.as_str()),
        many => Value::from(many.to_vec()),
    };
    root.insert("mediaType".into(), media_type);

    for node in tree.roots() {
        root.insert(node.relative_uri.clone(), render_resource(tree, node)?);
    }
    Ok(Value::Object(root))
}

/// Serializes a rendered tree in the requested format.
pub fn to_text(document: &Value, format: OutputFormat) -> CliResult<String> {
    Ok(match format {
        OutputFormat::Yaml => format!("{}\n{}", RAML_HEADER, serde_yaml::to_string(document)?),
        OutputFormat::Json => serde_json::to_string_pretty(document)?,
    })
}

fn render_resource(tree: &ResourceTree, node: &ResourceNode) -> CliResult<Value> {
    let mut map = Map::new();
    insert_opt(&mut map, "displayName", node.display_name.as_deref());
    insert_opt(&mut map, "description", node.description.as_deref());
    insert_params(&mut map, "uriParameters", &node.uri_parameters);
    for (method, operation) in &node.operations {
        map.insert(method.as_lower().into(), render_operation(operation)?);
    }
    for child in tree.children(node) {
        map.insert(child.relative_uri.clone(), render_resource(tree, child)?);
    }
    Ok(Value::Object(map))
}

fn render_operation(operation: &Operation) -> CliResult<Value> {
    let mut map = Map::new();
    insert_opt(&mut map, "displayName", operation.display_name.as_deref());
    insert_opt(&mut map, "description", operation.description.as_deref());
    insert_params(&mut map, "queryParameters", &operation.query_parameters);
    insert_params(&mut map, "headers", &operation.header_parameters);
    if !operation.request_bodies.is_empty() {
        map.insert("body".into(), render_bodies(&operation.request_bodies)?);
    }
    if !operation.responses.is_empty() {
        let responses = operation
            .responses
            .iter()
            .map(|(code, response)| Ok((code.clone(), render_response(response)?)))
            .collect::<CliResult<Map<_, _>>>()?;
        map.insert("responses".into(), Value::Object(responses));
    }
    Ok(Value::Object(map))
}

fn render_response(response: &Response) -> CliResult<Value> {
    let mut map = Map::new();
    insert_opt(&mut map, "description", response.description.as_deref());
    if !response.headers.is_empty() {
        let headers = response
            .headers
            .iter()
            .map(|(name, header)| (name.clone(), render_header(header)))
            .collect();
        map.insert("headers".into(), Value::Object(headers));
    }
    if !response.bodies.is_empty() {
        map.insert("body".into(), render_bodies(&response.bodies)?);
    }
    Ok(Value::Object(map))
}

fn render_header(header: &ResponseHeader) -> Value {
    let mut map = Map::new();
    map.insert("type".into(), Value::from(header.ty.to_string()));
    insert_opt(&mut map, "description", header.description.as_deref());
    Value::Object(map)
}

fn render_bodies(bodies: &IndexMap<String, Body>) -> CliResult<Value> {
    let mut map = Map::new();
    for (media_type, body) in bodies {
        let mut rendered = Map::new();
        if let Some(schema) = &body.schema {
            rendered.insert("schema".into(), Value::from(pretty(schema)?));
        }
        if let Some(example) = &body.example {
            rendered.insert("example".into(), Value::from(pretty(example)?));
        }
        map.insert(media_type.clone(), Value::Object(rendered));
    }
    Ok(Value::Object(map))
}

fn pretty(document: &Document) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

fn insert_params(map: &mut Map<String, Value>, key: &str, params: &IndexMap<String, Parameter>) {
    if params.is_empty() {
        return;
    }
    let rendered = params
        .iter()
        .map(|(name, param)| {
            let mut entry = Map::new();
            entry.insert("type".into(), Value::from(param.ty.to_string()));
            insert_opt(&mut entry, "description", param.description.as_deref());
            insert_opt(&mut entry, "default", param.default.as_deref());
            insert_opt(&mut entry, "pattern", param.pattern.as_deref());
            entry.insert("required".into(), Value::from(param.required));
            (name.clone(), Value::Object(entry))
        })
        .collect();
    map.insert(key.into(), Value::Object(rendered));
}

fn insert_opt(map: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        map.insert(key.into(), Value::from(value));
    }
}
