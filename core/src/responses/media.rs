#![deny(missing_docs)]

//! # Media Types
//!
//! Media type fan-out and the problem detail rewrite
//! (`application/json` -> `application/problem+json`).

use crate::config::GeneratorConfig;
use crate::types::descriptor::TypeDescriptor;
use crate::types::registry::TypeRegistry;
use indexmap::IndexSet;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Fallback for media types that do not split into type and subtype.
pub const PROBLEM_MEDIA_TYPE: &str = "application/problem+json";

fn media_type_re() -> &'static Regex {
    static MEDIA_TYPE_RE: OnceLock<Regex> = OnceLock::new();
    MEDIA_TYPE_RE.get_or_init(|| {
        Regex::new(r"^\s*([A-Za-z0-9!#$&^_.-]+)/(?:[A-Za-z0-9!#$&^_.-]+\+)?([A-Za-z0-9!#$&^_.-]+)\s*(?:;.*)?$")
            .expect("Invalid regex")
    })
}

/// Problem variant of a media type.
///
/// The structured syntax suffix wins over the subtype, so
/// `application/vnd.acme+xml` becomes `application/problem+xml`.
pub fn problem_media_type(media_type: &str) -> String {
    match media_type_re().captures(media_type) {
        Some(caps) => format!("{}/problem+{}", &caps[1], &caps[2]),
        None => PROBLEM_MEDIA_TYPE.to_string(),
    }
}

/// Media types a body is materialized for.
///
/// Declared candidates win over the configured defaults; duplicates are
/// dropped, first occurrence kept.
pub fn resolve_media_types(
    declared: &[String],
    config: &GeneratorConfig,
    problem: bool,
) -> Vec<String> {
    let candidates = if declared.is_empty() {
        config.default_media_types.as_slice()
    } else {
        declared
    };
    let resolved: IndexSet<String> = candidates
        .iter()
        .map(|m| {
            if problem {
                let rewritten = problem_media_type(m);
                tracing::trace!(from = %m, to = %rewritten, "problem media type");
                rewritten
            } else {
                m.trim().to_string()
            }
        })
        .collect();
    resolved.into_iter().collect()
}

/// Whether a type belongs to the problem detail family.
///
/// Supertypes are followed through the registry; unknown supertypes are
/// only matched by name.
pub fn is_problem_family(
    ty: &TypeDescriptor,
    registry: &TypeRegistry,
    config: &GeneratorConfig,
) -> bool {
    let mut pending = vec![ty.name.as_str()];
    pending.extend(ty.supertypes.iter().map(String::as_str));
    let mut seen = HashSet::new();
    while let Some(name) = pending.pop() {
        if !seen.insert(name) {
            continue;
        }
        if config.problem_types.iter().any(|p| p == name) {
            return true;
        }
        if let Some(declared) = registry.get(name) {
            pending.extend(declared.supertypes.iter().map(String::as_str));
        }
    }
    false
}
