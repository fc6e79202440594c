#![deny(missing_docs)]

//! # Example Emitter
//!
//! Representative payloads built from a fixed value table:
//!
//! | category            | value                         |
//! |---------------------|-------------------------------|
//! | boolean             | `false`                       |
//! | integer             | `12345`                       |
//! | number              | `123.45`                      |
//! | string              | `"foo"`                       |
//! | enum                | first declared literal        |
//! | array / collection  | one element                   |
//! | URI wrapper         | `"https://example.com/foo"`   |
//! | path wrapper        | `"/path/to/foo"`              |
//! | status wrapper      | code of the default status    |
//!
//! Field examples take precedence and must parse under the field category.

use crate::config::{GeneratorConfig, StringWrapperKind};
use crate::document::generator::{Emitter, Node};
use crate::document::{Document, Scalar};
use crate::error::{AppError, AppResult};
use crate::types::classifier::Category;
use crate::types::descriptor::FieldDescriptor;
use indexmap::IndexMap;

const EXAMPLE_INTEGER: i64 = 12345;
const EXAMPLE_FLOAT: f64 = 123.45;
const EXAMPLE_STRING: &str = "foo";
const EXAMPLE_URI: &str = "https://example.com/foo";
const EXAMPLE_PATH: &str = "/path/to/foo";

/// Emits example documents.
#[derive(Debug, Clone, Copy)]
pub struct ExampleEmitter<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> ExampleEmitter<'a> {
    /// Creates an example emitter.
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }
}

impl Emitter for ExampleEmitter<'_> {
    fn scalar(&self, node: &Node<'_>) -> Document {
        match node.category {
            Category::Boolean => false.into(),
            Category::Integer if node.wrapper => i64::from(self.config.default_status.code()).into(),
            Category::Integer => EXAMPLE_INTEGER.into(),
            Category::Floating => EXAMPLE_FLOAT.into(),
            Category::Enum => node
                .ty
                .enum_values
                .first()
                .map(|v| Document::string(v.as_str()))
                .unwrap_or(Document::Scalar(Scalar::Null)),
            _ => match node.string_wrapper {
                Some(StringWrapperKind::Uri) => EXAMPLE_URI.into(),
                Some(StringWrapperKind::Path) => EXAMPLE_PATH.into(),
                None => EXAMPLE_STRING.into(),
            },
        }
    }

    fn sequence(&self, _node: &Node<'_>, items: Document) -> Document {
        Document::Array(vec![items])
    }

    fn object(&self, _node: &Node<'_>, properties: IndexMap<String, Document>) -> Document {
        Document::Object(properties)
    }

    fn field_override(
        &self,
        field: &FieldDescriptor,
        category: Category,
    ) -> AppResult<Option<Document>> {
        match field.example.as_deref() {
            Some(raw) => parse_example(field, raw, category).map(Some),
            None => Ok(None),
        }
    }

    fn decorate_field(&self, _field: &FieldDescriptor, child: Document) -> Document {
        child
    }

    fn root(&self, _node: &Node<'_>, document: Document) -> Document {
        document
    }
}

/// Parses a declared example under the scalar category of its field.
///
/// Structured categories accept JSON and otherwise keep the text verbatim.
fn parse_example(field: &FieldDescriptor, raw: &str, category: Category) -> AppResult<Document> {
    let conversion_error = || AppError::ValueConversion {
        field: field.name.clone(),
        value: raw.to_string(),
        category: category.to_string(),
    };
    match category {
        Category::Boolean => match raw.trim() {
            "true" => Ok(true.into()),
            "false" => Ok(false.into()),
            _ => Err(conversion_error()),
        },
        Category::Integer => raw
            .trim()
            .parse::<i64>()
            .map(Document::from)
            .map_err(|_| conversion_error()),
        Category::Floating => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(Document::from)
            .ok_or_else(conversion_error),
        Category::String | Category::Enum => Ok(Document::string(raw)),
        Category::Array | Category::Collection | Category::Object => {
            Ok(serde_json::from_str::<serde_json::Value>(raw)
                .map(Document::from)
                .unwrap_or_else(|_| Document::string(raw)))
        }
    }
}
