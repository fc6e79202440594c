#![deny(missing_docs)]

//! # Schema Emitter
//!
//! JSON Schema (draft-04 flavoured) documents.
//!
//! Wrapper types that reach `string` or `integer` through a heuristic carry
//! an `id` derived from their qualified name, e.g. `model::Email` becomes
//! `urn:jsonschema:model:Email`.

use crate::config::GeneratorConfig;
use crate::document::generator::{Emitter, Node};
use crate::document::Document;
use crate::error::{AppError, AppResult};
use crate::types::classifier::Category;
use crate::types::descriptor::FieldDescriptor;
use indexmap::IndexMap;

/// Emits schema documents.
#[derive(Debug, Clone, Copy)]
pub struct SchemaEmitter<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> SchemaEmitter<'a> {
    /// Creates a schema emitter.
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }
}

/// Stable schema identifier of a qualified type name.
pub fn schema_id(qualified: &str) -> String {
    let mut id = String::from("urn:jsonschema:");
    for part in qualified.split("::").flat_map(|p| p.split('.')) {
        if !part.is_empty() {
            if !id.ends_with(':') {
                id.push(':');
            }
            id.push_str(part);
        }
    }
    id
}

fn typed(json_type: &str) -> IndexMap<String, Document> {
    let mut map = IndexMap::new();
    map.insert("type".to_string(), Document::string(json_type));
    map
}

impl Emitter for SchemaEmitter<'_> {
    fn scalar(&self, node: &Node<'_>) -> Document {
        let mut map = match node.category {
            Category::Boolean => typed("boolean"),
            Category::Integer => typed("integer"),
            Category::Floating => typed("number"),
            Category::Enum => {
                let mut map = typed("string");
                let values = node
                    .ty
                    .enum_values
                    .iter()
                    .map(|v| Document::string(v.as_str()))
                    .collect();
                map.insert("enum".to_string(), Document::Array(values));
                map
            }
            _ => typed("string"),
        };
        if node.wrapper {
            map.insert("id".to_string(), Document::string(schema_id(&node.ty.name)));
        }
        Document::Object(map)
    }

    fn sequence(&self, _node: &Node<'_>, items: Document) -> Document {
        let mut map = typed("array");
        map.insert("items".to_string(), items);
        Document::Object(map)
    }

    fn object(&self, _node: &Node<'_>, properties: IndexMap<String, Document>) -> Document {
        let mut map = typed("object");
        map.insert("properties".to_string(), Document::Object(properties));
        Document::Object(map)
    }

    fn field_override(
        &self,
        field: &FieldDescriptor,
        _category: Category,
    ) -> AppResult<Option<Document>> {
        let Some(raw) = field.schema.as_deref() else {
            return Ok(None);
        };
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(value) => Ok(Some(Document::from(value))),
            Err(_) => Err(AppError::ValueConversion {
                field: field.name.clone(),
                value: raw.to_string(),
                category: "schema".to_string(),
            }),
        }
    }

    fn decorate_field(&self, field: &FieldDescriptor, child: Document) -> Document {
        match (child, field.description.as_deref()) {
            (Document::Object(mut map), Some(description)) => {
                map.entry("description".to_string())
                    .or_insert_with(|| Document::string(description));
                Document::Object(map)
            }
            (child, _) => child,
        }
    }

    fn root(&self, _node: &Node<'_>, document: Document) -> Document {
        // Sequences already arrive as `type: array` objects.
        let map = match document {
            Document::Object(map) => map,
            other => return other,
        };
        let mut framed = IndexMap::new();
        framed.insert(
            "$schema".to_string(),
            Document::string(self.config.schema_dialect.as_str()),
        );
        framed.extend(map);
        Document::Object(framed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::generator::DocumentGenerator;
    use crate::types::descriptor::{MethodDescriptor, TypeDescriptor, TypeKind};
    use crate::types::registry::TypeRegistry;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn registry() -> TypeRegistry {
        TypeRegistry::from_iter([
            TypeDescriptor::object(
                "model::User",
                vec![
                    FieldDescriptor::new("id", "i64").with_description("Primary key"),
                    FieldDescriptor::new("name", "String"),
                    FieldDescriptor::new("admin", "bool"),
                    FieldDescriptor::new("score", "f64"),
                    FieldDescriptor::new("role", "model::Role"),
                    FieldDescriptor::new("email", "model::Email"),
                    FieldDescriptor::new("tags", "Vec<String>"),
                ],
            ),
            TypeDescriptor::enumeration("model::Role", &["ADMIN", "GUEST"]),
            TypeDescriptor::new("model::Email", TypeKind::Object)
                .with_method(MethodDescriptor::instance("to_string", "String"))
                .with_method(MethodDescriptor::factory(
                    "from_str",
                    vec!["&str".into()],
                    "model::Email",
                )),
            TypeDescriptor::collection("Vec<String>", &["String"]),
            TypeDescriptor::collection("Vec<model::User>", &["model::User"]),
        ])
    }

    #[test]
    fn test_schema_id() {
        assert_eq!(schema_id("model::Email"), "urn:jsonschema:model:Email");
        assert_eq!(schema_id("com.example.Uri"), "urn:jsonschema:com:example:Uri");
        assert_eq!(schema_id("Plain"), "urn:jsonschema:Plain");
    }

    #[test]
    fn test_object_schema() {
        let registry = registry();
        let config = GeneratorConfig::default();
        let doc = DocumentGenerator::schema(&registry, &config)
            .generate_named("model::User")
            .unwrap();
        assert_eq!(
            doc.to_json(),
            json!({
                "$schema": "http://json-schema.org/draft-04/schema#",
                "type": "object",
                "properties": {
                    "id": {"type": "integer", "description": "Primary key"},
                    "name": {"type": "string"},
                    "admin": {"type": "boolean"},
                    "score": {"type": "number"},
                    "role": {"type": "string", "enum": ["ADMIN", "GUEST"]},
                    "email": {"type": "string", "id": "urn:jsonschema:model:Email"},
                    "tags": {"type": "array", "items": {"type": "string"}}
                }
            })
        );
        assert_eq!(doc.keys()[0], "$schema");
    }

    #[test]
    fn test_root_collection_schema() {
        let registry = registry();
        let config = GeneratorConfig::default();
        let doc = DocumentGenerator::schema(&registry, &config)
            .generate_named("Vec<model::User>")
            .unwrap();
        let value = doc.to_json();
        assert_eq!(value["type"], "array");
        assert_eq!(value["items"]["type"], "object");
        assert_eq!(value["$schema"], "http://json-schema.org/draft-04/schema#");
    }

    #[test]
    fn test_schema_override() {
        let mut registry = registry();
        registry.register(TypeDescriptor::object(
            "model::Custom",
            vec![FieldDescriptor::new("when", "String").with_schema(r#"{"type":"string","format":"date"}"#)],
        ));
        let config = GeneratorConfig::default();
        let doc = DocumentGenerator::schema(&registry, &config)
            .generate_named("model::Custom")
            .unwrap();
        assert_eq!(
            doc.to_json()["properties"]["when"],
            json!({"type": "string", "format": "date"})
        );
    }

    #[test]
    fn test_schema_override_keeps_field_description() {
        let mut registry = registry();
        registry.register(TypeDescriptor::object(
            "model::Custom",
            vec![
                FieldDescriptor::new("when", "String")
                    .with_schema(r#"{"type":"string","format":"date"}"#)
                    .with_description("Due date"),
                FieldDescriptor::new("why", "String")
                    .with_schema(r#"{"type":"string","description":"From the override"}"#)
                    .with_description("Ignored"),
            ],
        ));
        let config = GeneratorConfig::default();
        let doc = DocumentGenerator::schema(&registry, &config)
            .generate_named("model::Custom")
            .unwrap()
            .to_json();
        assert_eq!(
            doc["properties"]["when"],
            json!({"type": "string", "format": "date", "description": "Due date"})
        );
        assert_eq!(doc["properties"]["why"]["description"], "From the override");
    }

    #[test]
    fn test_invalid_schema_override_fails() {
        let mut registry = registry();
        registry.register(TypeDescriptor::object(
            "model::Custom",
            vec![FieldDescriptor::new("when", "String").with_schema("{not json")],
        ));
        let config = GeneratorConfig::default();
        let err = DocumentGenerator::schema(&registry, &config)
            .generate_named("model::Custom")
            .unwrap_err();
        assert!(err.is_value_conversion());
    }
}
