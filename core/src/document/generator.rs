#![deny(missing_docs)]

//! # Document Generator
//!
//! One recursive traversal, parameterized by an [`Emitter`] that decides what
//! each category turns into. Schema and example documents share everything
//! else: field filtering, element resolution and the order of visits.
//!
//! Self-referential object types are not detected. Recursion is unbounded
//! unless [`GeneratorConfig::max_depth`] is set.

use crate::config::{GeneratorConfig, StringWrapperKind};
use crate::document::example::ExampleEmitter;
use crate::document::schema::SchemaEmitter;
use crate::document::Document;
use crate::error::{AppError, AppResult};
use crate::types::capabilities::{Introspector, TypeCapabilities};
use crate::types::classifier::{classify, is_wrapper, Category};
use crate::types::descriptor::{FieldDescriptor, TypeDescriptor};
use crate::types::registry::TypeRegistry;
use indexmap::IndexMap;

/// The type currently being visited, with its classification.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    /// The visited type.
    pub ty: &'a TypeDescriptor,
    /// Its category.
    pub category: Category,
    /// Reached its category through a wrapper heuristic.
    pub wrapper: bool,
    /// Flavour of a known string-like wrapper.
    pub string_wrapper: Option<StringWrapperKind>,
}

/// Per-category callbacks of one document mode.
pub trait Emitter {
    /// Leaf for `Boolean`, `Integer`, `Floating`, `String` and `Enum`.
    fn scalar(&self, node: &Node<'_>) -> Document;

    /// Array or collection whose element generated to `items`.
    fn sequence(&self, node: &Node<'_>, items: Document) -> Document;

    /// Object whose serialized fields generated to `properties`.
    fn object(&self, node: &Node<'_>, properties: IndexMap<String, Document>) -> Document;

    /// Replacement for a field's generated content, from the field's hints.
    ///
    /// Returning `Some` skips the traversal of the field type.
    fn field_override(
        &self,
        field: &FieldDescriptor,
        category: Category,
    ) -> AppResult<Option<Document>>;

    /// Adjusts a field child, generated or overridden.
    fn decorate_field(&self, field: &FieldDescriptor, child: Document) -> Document;

    /// Frames the finished document.
    fn root(&self, node: &Node<'_>, document: Document) -> Document;
}

/// Recursive generator over a registry.
pub struct DocumentGenerator<'a, E> {
    registry: &'a TypeRegistry,
    config: &'a GeneratorConfig,
    emitter: E,
}

impl<'a> DocumentGenerator<'a, SchemaEmitter<'a>> {
    /// A JSON Schema generator.
    pub fn schema(registry: &'a TypeRegistry, config: &'a GeneratorConfig) -> Self {
        Self::new(registry, config, SchemaEmitter::new(config))
    }
}

impl<'a> DocumentGenerator<'a, ExampleEmitter<'a>> {
    /// An example payload generator.
    pub fn example(registry: &'a TypeRegistry, config: &'a GeneratorConfig) -> Self {
        Self::new(registry, config, ExampleEmitter::new(config))
    }
}

impl<'a, E: Emitter> DocumentGenerator<'a, E> {
    /// A generator with a custom emitter.
    pub fn new(registry: &'a TypeRegistry, config: &'a GeneratorConfig, emitter: E) -> Self {
        Self {
            registry,
            config,
            emitter,
        }
    }

    /// Generates the document of a registered type.
    pub fn generate_named(&self, type_name: &str) -> AppResult<Document> {
        let ty = self.registry.resolve(type_name)?;
        self.generate(ty)
    }

    /// Generates the framed document of a type.
    pub fn generate(&self, ty: &TypeDescriptor) -> AppResult<Document> {
        tracing::debug!(type_name = %ty.name, "generating document");
        let node = self.node(ty);
        let document = self.visit(&node, 0)?;
        Ok(self.emitter.root(&node, document))
    }

    fn node<'t>(&self, ty: &'t TypeDescriptor) -> Node<'t> {
        let caps = Introspector::new(self.config);
        let category = classify(ty, &caps);
        Node {
            ty,
            category,
            wrapper: is_wrapper(ty, category),
            string_wrapper: caps.string_wrapper(ty),
        }
    }

    fn visit(&self, node: &Node<'_>, depth: usize) -> AppResult<Document> {
        if let Some(max) = self.config.max_depth {
            if depth > max {
                return Err(AppError::DepthExceeded {
                    type_name: node.ty.name.clone(),
                    depth: max,
                });
            }
        }

        match node.category {
            Category::Array | Category::Collection => {
                let element_name = node.ty.element_type().ok_or_else(|| {
                    AppError::UnsupportedType(format!("{} has no element type", node.ty.name))
                })?;
                let element = self.node(self.registry.resolve(element_name)?);
                let items = self.visit(&element, depth + 1)?;
                Ok(self.emitter.sequence(node, items))
            }
            Category::Object => {
                let mut properties = IndexMap::new();
                for field in node.ty.declared_fields() {
                    let child = self.node(self.registry.resolve(&field.type_name)?);
                    let document = match self.emitter.field_override(field, child.category)? {
                        Some(document) => document,
                        None => self.visit(&child, depth + 1)?,
                    };
                    let document = self.emitter.decorate_field(field, document);
                    properties.insert(field.name.clone(), document);
                }
                Ok(self.emitter.object(node, properties))
            }
            _ => Ok(self.emitter.scalar(node)),
        }
    }
}
