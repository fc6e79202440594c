#![deny(missing_docs)]

//! # Type Classifier
//!
//! Maps one type to one [`Category`]. Rules are checked in a fixed order and
//! the first match wins, so a type matching several heuristics always lands
//! in the same category. The classifier never looks at field types, which
//! keeps it total on self-referential graphs.

use crate::types::capabilities::TypeCapabilities;
use crate::types::descriptor::{TypeDescriptor, TypeKind};
use derive_more::Display;

/// Classification taxonomy shared by both document modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Category {
    /// `true`/`false`.
    #[display("boolean")]
    Boolean,
    /// Integral numbers, status-like wrappers included.
    #[display("integer")]
    Integer,
    /// Floating point numbers.
    #[display("number")]
    Floating,
    /// Text, string-like wrappers included.
    #[display("string")]
    String,
    /// Enumerations.
    #[display("enum")]
    Enum,
    /// Arrays; the element category is resolved by the caller.
    #[display("array")]
    Array,
    /// Single-parameter generic containers.
    #[display("collection")]
    Collection,
    /// Everything else.
    #[display("object")]
    Object,
}

impl Category {
    /// Whether the category is a sequence.
    pub fn is_sequence(self) -> bool {
        matches!(self, Category::Array | Category::Collection)
    }

    /// Collapses the category to a header/parameter scalar type.
    ///
    /// Structured categories have no header representation and fall back to
    /// string.
    pub fn scalar(self) -> ScalarType {
        match self {
            Category::Boolean => ScalarType::Boolean,
            Category::Integer => ScalarType::Integer,
            Category::Floating => ScalarType::Number,
            _ => ScalarType::String,
        }
    }
}

/// Scalar type of headers and parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    /// `boolean`
    #[display("boolean")]
    Boolean,
    /// `integer`
    #[display("integer")]
    Integer,
    /// `number`
    #[display("number")]
    Number,
    /// `string`
    #[display("string")]
    String,
}

/// Classifies a single type.
pub fn classify(ty: &TypeDescriptor, caps: &impl TypeCapabilities) -> Category {
    if ty.kind == TypeKind::Boolean {
        return Category::Boolean;
    }
    if ty.kind == TypeKind::Integer || caps.is_integer_convertible(ty) {
        return Category::Integer;
    }
    if ty.kind == TypeKind::Floating {
        return Category::Floating;
    }
    if ty.kind == TypeKind::String {
        return Category::String;
    }
    // Enums serialize through their literals even when they also look like
    // string wrappers.
    if ty.kind == TypeKind::Enum {
        return Category::Enum;
    }
    if caps.string_wrapper(ty).is_some() || ty.serialize_as_string || caps.is_string_convertible(ty)
    {
        return Category::String;
    }
    match ty.kind {
        TypeKind::Array => Category::Array,
        TypeKind::Collection if ty.type_args.len() == 1 => Category::Collection,
        _ => Category::Object,
    }
}

/// Whether a type reaches its category through a wrapper heuristic rather
/// than its declared kind.
pub fn is_wrapper(ty: &TypeDescriptor, category: Category) -> bool {
    match category {
        Category::Integer => ty.kind != TypeKind::Integer,
        Category::String => ty.kind != TypeKind::String,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::types::capabilities::Introspector;
    use crate::types::descriptor::MethodDescriptor;

    fn classify_default(ty: &TypeDescriptor) -> Category {
        let config = GeneratorConfig::default();
        classify(ty, &Introspector::new(&config))
    }

    fn string_convertible(ty: TypeDescriptor) -> TypeDescriptor {
        ty.with_method(MethodDescriptor::instance("to_string", "String"))
            .with_method(MethodDescriptor::factory(
                "from_str",
                vec!["&str".into()],
                "Self",
            ))
    }

    #[test]
    fn test_primitive_kinds() {
        let cases = vec![
            (TypeKind::Boolean, Category::Boolean),
            (TypeKind::Integer, Category::Integer),
            (TypeKind::Floating, Category::Floating),
            (TypeKind::String, Category::String),
            (TypeKind::Object, Category::Object),
        ];
        for (kind, expected) in cases {
            assert_eq!(classify_default(&TypeDescriptor::new("t", kind)), expected);
        }
    }

    #[test]
    fn test_enum_wins_over_string_conversion() {
        let ty = string_convertible(TypeDescriptor::enumeration("model::Color", &["RED", "BLUE"]));
        assert_eq!(classify_default(&ty), Category::Enum);
    }

    #[test]
    fn test_integer_wrapper_wins_over_string_wrapper() {
        // Matches both the status-code accessor and the string conversion heuristics.
        let ty = string_convertible(TypeDescriptor::new("api::Status", TypeKind::Object))
            .with_method(MethodDescriptor::instance("status_code", "u16"));
        assert_eq!(classify_default(&ty), Category::Integer);
        assert!(is_wrapper(&ty, Category::Integer));
    }

    #[test]
    fn test_string_like_wrappers() {
        assert_eq!(
            classify_default(&TypeDescriptor::new("url::Url", TypeKind::Object)),
            Category::String
        );
        let annotated = TypeDescriptor::new("model::Slug", TypeKind::Object).serialized_as_string();
        assert_eq!(classify_default(&annotated), Category::String);
        let duck = string_convertible(TypeDescriptor::new("model::Email", TypeKind::Object));
        assert_eq!(classify_default(&duck), Category::String);
        assert!(is_wrapper(&duck, Category::String));
    }

    #[test]
    fn test_sequences() {
        assert_eq!(classify_default(&TypeDescriptor::array_of("i32")), Category::Array);
        assert_eq!(
            classify_default(&TypeDescriptor::collection("Vec<i32>", &["i32"])),
            Category::Collection
        );
    }

    #[test]
    fn test_multi_parameter_containers_are_objects() {
        let map = TypeDescriptor::collection("HashMap<String, i32>", &["String", "i32"]);
        assert_eq!(classify_default(&map), Category::Object);
    }

    #[test]
    fn test_wildcard_is_object() {
        let ty = TypeDescriptor::new("?", TypeKind::Wildcard);
        assert_eq!(classify_default(&ty), Category::Object);
    }

    #[test]
    fn test_scalar_collapse() {
        assert_eq!(Category::Floating.scalar(), ScalarType::Number);
        assert_eq!(Category::Object.scalar(), ScalarType::String);
        assert_eq!(Category::Enum.scalar(), ScalarType::String);
    }
}
