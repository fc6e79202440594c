#![deny(missing_docs)]

//! # Type Description Layer
//!
//! - **descriptor**: Read-only type, field and method descriptions.
//! - **registry**: Name-addressed store of descriptors.
//! - **capabilities**: Duck-typed wrapper detection.
//! - **classifier**: Category per type.

pub mod capabilities;
pub mod classifier;
pub mod descriptor;
pub mod registry;

pub use capabilities::{Introspector, TypeCapabilities};
pub use classifier::{classify, Category, ScalarType};
pub use descriptor::{FieldDescriptor, MethodDescriptor, Receiver, TypeDescriptor, TypeKind};
pub use registry::TypeRegistry;
