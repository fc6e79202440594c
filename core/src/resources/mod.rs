#![deny(missing_docs)]

//! # Resources
//!
//! - **path**: URI template chains and path variables.
//! - **tree**: The mergeable resource hierarchy.
//! - **operation**: Verbs, parameters, bodies and responses attached to resources.

pub mod operation;
pub mod path;
pub mod tree;

pub use operation::{Body, HttpMethod, Operation, Parameter, Response, ResponseHeader};
pub use path::{PathVariable, ResourcePath};
pub use tree::{ResourceNode, ResourceTree};
