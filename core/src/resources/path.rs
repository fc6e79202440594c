#![deny(missing_docs)]

//! # Resource Paths
//!
//! Immutable parent-linked chains of URI template segments.
//!
//! Inline regex constraints (`{id:[0-9]+}`) are stripped from the rendered
//! segment and kept on the [`PathVariable`]. Two paths with the same rendered
//! form are interchangeable.

use indexmap::IndexSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

const ROOT: &str = "/";

/// A template variable, owned by the segment that declares it.
#[derive(Debug, Clone)]
pub struct PathVariable {
    /// Rendered path of the owning segment chain.
    pub owner: String,
    /// Variable name.
    pub name: String,
    /// Regex constraint, if one was declared inline.
    pub pattern: Option<String>,
}

impl PartialEq for PathVariable {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.pattern == other.pattern
    }
}

impl Eq for PathVariable {}

impl Hash for PathVariable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.pattern.hash(state);
    }
}

#[derive(Debug)]
struct PathNode {
    parent: Option<ResourcePath>,
    segment: String,
    variables: Vec<PathVariable>,
    rendered: String,
}

/// One link of a resource path chain. Cheap to clone.
#[derive(Clone)]
pub struct ResourcePath(Arc<PathNode>);

impl ResourcePath {
    /// Parses a slash-delimited template.
    ///
    /// The leading slash is optional; an empty template yields the root path `/`.
    pub fn of(template: &str) -> Self {
        Self::root().and(template)
    }

    /// The degenerate root path.
    pub fn root() -> Self {
        ResourcePath(Arc::new(PathNode {
            parent: None,
            segment: ROOT.to_string(),
            variables: Vec::new(),
            rendered: ROOT.to_string(),
        }))
    }

    /// Appends the segments of `suffix`.
    ///
    /// Appending to the root replaces it, so `of("/").and("/a")` is `of("/a")`.
    pub fn and(&self, suffix: &str) -> Self {
        let mut current = if self.is_root() {
            None
        } else {
            Some(self.clone())
        };
        for raw in split_segments(suffix) {
            current = Some(Self::child(current, raw));
        }
        current.unwrap_or_else(|| self.clone())
    }

    fn child(parent: Option<ResourcePath>, raw: &str) -> Self {
        let (text, declared) = parse_segment(raw);
        let segment = format!("/{}", text);
        let rendered = match &parent {
            Some(p) => format!("{}{}", p.0.rendered, segment),
            None => segment.clone(),
        };
        let variables = declared
            .into_iter()
            .map(|(name, pattern)| PathVariable {
                owner: rendered.clone(),
                name,
                pattern,
            })
            .collect();
        ResourcePath(Arc::new(PathNode {
            parent,
            segment,
            variables,
            rendered,
        }))
    }

    /// True for the degenerate `/` path.
    pub fn is_root(&self) -> bool {
        self.0.parent.is_none() && self.0.segment == ROOT
    }

    /// This link's own segment, with its leading slash.
    pub fn segment(&self) -> &str {
        &self.0.segment
    }

    /// The chain without its last segment.
    pub fn parent(&self) -> Option<&ResourcePath> {
        self.0.parent.as_ref()
    }

    /// Full rendered path.
    pub fn as_str(&self) -> &str {
        &self.0.rendered
    }

    /// Variables declared by this link's own segment.
    pub fn own_vars(&self) -> &[PathVariable] {
        &self.0.variables
    }

    /// Every variable of the chain, root first.
    pub fn vars(&self) -> IndexSet<PathVariable> {
        let mut chain = Vec::new();
        let mut current = Some(self);
        while let Some(path) = current {
            chain.push(path);
            current = path.parent();
        }
        chain
            .into_iter()
            .rev()
            .flat_map(|p| p.own_vars().iter().cloned())
            .collect()
    }

    /// Number of segments in the chain.
    pub fn depth(&self) -> usize {
        1 + self.parent().map_or(0, ResourcePath::depth)
    }
}

impl PartialEq for ResourcePath {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ResourcePath {}

impl Hash for ResourcePath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourcePath({:?})", self.as_str())
    }
}

/// Splits on slashes outside of braces, dropping empty segments.
fn split_segments(template: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in template.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            '/' if depth == 0 => {
                segments.push(&template[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth > 0 {
        // Unbalanced brace: the remainder splits like plain text.
        segments.extend(template[start..].split('/'));
    } else {
        segments.push(&template[start..]);
    }
    segments.into_iter().filter(|s| !s.is_empty()).collect()
}

/// Renders a segment without inline patterns and collects its variables.
fn parse_segment(raw: &str) -> (String, Vec<(String, Option<String>)>) {
    let mut text = String::with_capacity(raw.len());
    let mut variables = Vec::new();
    let mut depth = 0usize;
    let mut body = String::new();
    for c in raw.chars() {
        match (c, depth) {
            ('{', 0) => {
                depth = 1;
                body.clear();
            }
            ('{', _) => {
                depth += 1;
                body.push(c);
            }
            ('}', 1) => {
                depth = 0;
                let (name, pattern) = match body.split_once(':') {
                    Some((name, pattern)) => (name.trim(), Some(pattern.trim().to_string())),
                    None => (body.trim(), None),
                };
                text.push('{');
                text.push_str(name);
                text.push('}');
                variables.push((name.to_string(), pattern.filter(|p| !p.is_empty())));
            }
            ('}', d) if d > 1 => {
                depth -= 1;
                body.push(c);
            }
            (_, 0) => text.push(c),
            _ => body.push(c),
        }
    }
    if depth > 0 {
        text.push('{');
        text.push_str(&body);
    }
    (text, variables)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_normalizes_leading_slash() {
        assert_eq!(ResourcePath::of("users/{id}").as_str(), "/users/{id}");
        assert_eq!(ResourcePath::of("/users/{id}").as_str(), "/users/{id}");
        assert_eq!(ResourcePath::of("/users/").as_str(), "/users");
    }

    #[test]
    fn test_empty_template_is_root() {
        assert!(ResourcePath::of("").is_root());
        assert!(ResourcePath::of("/").is_root());
        assert_eq!(ResourcePath::of("").as_str(), "/");
    }

    #[test]
    fn test_and_absorbs_root() {
        assert_eq!(ResourcePath::of("").and("/foo"), ResourcePath::of("/foo"));
        assert_eq!(ResourcePath::of("/").and("/foo"), ResourcePath::of("/foo"));
        assert_eq!(ResourcePath::of("/").and("/foo").depth(), 1);
    }

    #[test]
    fn test_and_extends() {
        let base = ResourcePath::of("/api");
        let path = base.and("/users/{id}");
        assert_eq!(path.as_str(), "/api/users/{id}");
        assert_eq!(path.segment(), "/{id}");
        assert_eq!(path.parent().unwrap().as_str(), "/api/users");
        assert_eq!(base.and(""), base);
    }

    #[test]
    fn test_patterns_are_stripped_and_kept() {
        let path = ResourcePath::of("/files/{name:[a-z]+}/{rest:.*/.*}");
        assert_eq!(path.as_str(), "/files/{name}/{rest}");

        let vars: Vec<_> = path.vars().into_iter().collect();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[0].name, "name");
        assert_eq!(vars[0].pattern.as_deref(), Some("[a-z]+"));
        assert_eq!(vars[0].owner, "/files/{name}");
        assert_eq!(vars[1].pattern.as_deref(), Some(".*/.*"));
    }

    #[test]
    fn test_unterminated_brace_is_literal() {
        let path = ResourcePath::of("/files/{name");
        assert_eq!(path.as_str(), "/files/{name");
        assert_eq!(path.segment(), "/{name");
        assert!(path.vars().is_empty());

        let path = ResourcePath::of("/a/pre{x");
        assert_eq!(path.as_str(), "/a/pre{x");

        let path = ResourcePath::of("/b/{id}-{rest");
        assert_eq!(path.as_str(), "/b/{id}-{rest");
        assert_eq!(path.own_vars().len(), 1);
        assert_eq!(path.own_vars()[0].name, "id");

        let path = ResourcePath::of("/c/{open/tail");
        assert_eq!(path.as_str(), "/c/{open/tail");
        assert_eq!(path.segment(), "/tail");
        assert_eq!(path.depth(), 3);
    }

    #[test]
    fn test_nested_braces_in_pattern() {
        let path = ResourcePath::of("/codes/{code:[0-9]{3}}");
        assert_eq!(path.as_str(), "/codes/{code}");
        let var = path.own_vars()[0].clone();
        assert_eq!(var.pattern.as_deref(), Some("[0-9]{3}"));
    }

    #[test]
    fn test_multiple_vars_in_one_segment() {
        let path = ResourcePath::of("/range/{from}-{to:\\d+}");
        assert_eq!(path.segment(), "/{from}-{to}");
        assert_eq!(path.own_vars().len(), 2);
    }

    #[test]
    fn test_variable_equality_ignores_owner() {
        let a = ResourcePath::of("/a/{id}").own_vars()[0].clone();
        let b = ResourcePath::of("/b/{id}").own_vars()[0].clone();
        assert_eq!(a, b);
        let c = ResourcePath::of("/b/{id:\\d+}").own_vars()[0].clone();
        assert_ne!(a, c);
    }

    #[test]
    fn test_rendering_survives_repeated_and() {
        let template = "/shop/{shop}/orders/{order:[0-9]+}/lines";
        let built = ResourcePath::of("/shop")
            .and("{shop}")
            .and("/orders/{order:[0-9]+}")
            .and("lines");
        assert_eq!(built, ResourcePath::of(template));
        assert_eq!(built.as_str(), "/shop/{shop}/orders/{order}/lines");
        assert_eq!(built.vars().len(), 2);
    }
}
