#![deny(missing_docs)]

//! # Responses
//!
//! - **status**: Symbolic statuses and the code table.
//! - **media**: Media type fan-out and problem detail rewriting.
//! - **resolver**: Declared responses to documented responses.

pub mod media;
pub mod resolver;
pub mod status;

pub use media::{is_problem_family, problem_media_type, resolve_media_types, PROBLEM_MEDIA_TYPE};
pub use resolver::{describe, humanize, ResponseResolver, SUCCESS_DESCRIPTION};
pub use status::{ResolvedStatus, StatusSymbol};
