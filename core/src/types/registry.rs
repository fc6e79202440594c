#![deny(missing_docs)]

//! # Type Registry
//!
//! Owns every [`TypeDescriptor`] of a run, keyed by qualified name.

use crate::error::{AppError, AppResult};
use crate::types::descriptor::{TypeDescriptor, TypeKind};
use indexmap::IndexMap;

const PRIMITIVES: &[(&str, TypeKind)] = &[
    ("bool", TypeKind::Boolean),
    ("i8", TypeKind::Integer),
    ("i16", TypeKind::Integer),
    ("i32", TypeKind::Integer),
    ("i64", TypeKind::Integer),
    ("i128", TypeKind::Integer),
    ("isize", TypeKind::Integer),
    ("u8", TypeKind::Integer),
    ("u16", TypeKind::Integer),
    ("u32", TypeKind::Integer),
    ("u64", TypeKind::Integer),
    ("u128", TypeKind::Integer),
    ("usize", TypeKind::Integer),
    ("f32", TypeKind::Floating),
    ("f64", TypeKind::Floating),
    ("char", TypeKind::String),
    ("str", TypeKind::String),
    ("String", TypeKind::String),
    ("()", TypeKind::Void),
];

/// Name-addressed store of declared types.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: IndexMap<String, TypeDescriptor>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// A registry containing only the primitive types.
    pub fn new() -> Self {
        let types = PRIMITIVES
            .iter()
            .map(|(name, kind)| (name.to_string(), TypeDescriptor::new(*name, *kind)))
            .collect();
        Self { types }
    }

    /// Registers a type, replacing any previous descriptor of the same name.
    pub fn register(&mut self, ty: TypeDescriptor) {
        tracing::trace!(name = %ty.name, kind = ?ty.kind, "registering type");
        self.types.insert(ty.name.clone(), ty);
    }

    /// Registers every type of the iterator.
    pub fn extend(&mut self, types: impl IntoIterator<Item = TypeDescriptor>) {
        for ty in types {
            self.register(ty);
        }
    }

    /// Looks up a type by qualified name.
    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    /// Looks up a type, failing with `UnresolvedType` when it is missing.
    pub fn resolve(&self, name: &str) -> AppResult<&TypeDescriptor> {
        self.types
            .get(name)
            .ok_or_else(|| AppError::UnresolvedType(name.to_string()))
    }

    /// Number of registered types, primitives included.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Always false: primitives are pre-registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<TypeDescriptor> for TypeRegistry {
    fn from_iter<I: IntoIterator<Item = TypeDescriptor>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives_are_preseeded() {
        let registry = TypeRegistry::new();
        assert_eq!(registry.resolve("i32").unwrap().kind, TypeKind::Integer);
        assert_eq!(registry.resolve("String").unwrap().kind, TypeKind::String);
        assert_eq!(registry.resolve("()").unwrap().kind, TypeKind::Void);
    }

    #[test]
    fn test_missing_type_is_unresolved() {
        let registry = TypeRegistry::new();
        let err = registry.resolve("model::Missing").unwrap_err();
        assert_eq!(err.to_string(), "Unresolved type: model::Missing");
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = TypeRegistry::new();
        registry.register(TypeDescriptor::new("model::Id", TypeKind::Integer));
        registry.register(TypeDescriptor::new("model::Id", TypeKind::String));
        assert_eq!(registry.resolve("model::Id").unwrap().kind, TypeKind::String);
    }
}
