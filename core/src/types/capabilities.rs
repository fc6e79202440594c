#![deny(missing_docs)]

//! # Type Capabilities
//!
//! Duck-typed wrapper detection. The classifier only asks yes/no questions
//! through [`TypeCapabilities`]; how the answers are found is up to the
//! implementation. [`Introspector`] answers them from declared methods and
//! the configured wrapper lists.

use crate::config::{GeneratorConfig, StringWrapperKind};
use crate::types::descriptor::{Receiver, TypeDescriptor};

/// Capability queries used by the classifier.
pub trait TypeCapabilities {
    /// A known status-like wrapper, or a type exposing a numeric status-code accessor.
    fn is_integer_convertible(&self, ty: &TypeDescriptor) -> bool;

    /// A type with its own no-argument to-string conversion and a public
    /// single-string-argument factory.
    fn is_string_convertible(&self, ty: &TypeDescriptor) -> bool;

    /// Flavour of a known URI/path-like type, if it is one.
    fn string_wrapper(&self, ty: &TypeDescriptor) -> Option<StringWrapperKind>;
}

/// Answers capability queries from descriptors and configuration.
#[derive(Debug, Clone, Copy)]
pub struct Introspector<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> Introspector<'a> {
    /// Creates an introspector over the given configuration.
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    fn has_status_code_accessor(&self, ty: &TypeDescriptor) -> bool {
        ty.find_methods(Receiver::Instance).any(|m| {
            m.public
                && m.params.is_empty()
                && self.config.status_code_accessors.contains(&m.name)
                && m.returns.as_deref().is_some_and(is_integer_name)
        })
    }
}

impl TypeCapabilities for Introspector<'_> {
    fn is_integer_convertible(&self, ty: &TypeDescriptor) -> bool {
        self.config.integer_wrappers.contains(&ty.name) || self.has_status_code_accessor(ty)
    }

    fn is_string_convertible(&self, ty: &TypeDescriptor) -> bool {
        let to_string = ty.find_methods(Receiver::Instance).any(|m| {
            m.params.is_empty() && !m.inherited && m.returns.as_deref().is_some_and(is_string_name)
        });
        let factory = ty.find_methods(Receiver::Static).any(|m| {
            m.public
                && m.returns.is_some()
                && matches!(m.params.as_slice(), [p] if is_string_name(p))
        });
        to_string && factory
    }

    fn string_wrapper(&self, ty: &TypeDescriptor) -> Option<StringWrapperKind> {
        self.config
            .string_wrappers
            .iter()
            .find(|w| w.name == ty.name)
            .map(|w| w.kind)
    }
}

/// Whether a type name denotes text.
pub fn is_string_name(name: &str) -> bool {
    matches!(
        name.trim_start_matches('&').trim(),
        "String" | "str" | "std::string::String" | "Cow<str>" | "Cow<'_, str>"
    )
}

fn is_integer_name(name: &str) -> bool {
    matches!(
        name,
        "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64" | "u128"
            | "usize"
    )
}
