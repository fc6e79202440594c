#![deny(missing_docs)]

//! # Resource Tree
//!
//! An arena of [`ResourceNode`]s addressed by their full rendered path.
//! Parent/child links are path keys, so creating an ancestor on demand and
//! replacing a node on re-registration are plain map operations.
//!
//! Registration has replace semantics: the newest node for a path wins and
//! the previous node, with everything below it, leaves the tree.

use crate::diagnostics::Diagnostics;
use crate::resources::operation::{HttpMethod, Operation, Parameter};
use crate::resources::path::ResourcePath;
use indexmap::IndexMap;

/// A node of the resource hierarchy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceNode {
    /// Short human readable name.
    pub display_name: Option<String>,
    /// Long description.
    pub description: Option<String>,
    /// Own segment, with its leading slash.
    pub relative_uri: String,
    /// Full path of the parent, empty for root-level nodes.
    pub parent_uri: String,
    /// URI parameters declared by the own segment, enriched by operations.
    pub uri_parameters: IndexMap<String, Parameter>,
    /// Operations by verb.
    pub operations: IndexMap<HttpMethod, Operation>,
    children: IndexMap<String, String>,
}

impl ResourceNode {
    /// A node with a display name and description.
    pub fn new(display_name: Option<String>, description: Option<String>) -> Self {
        Self {
            display_name,
            description,
            ..Self::default()
        }
    }

    /// Full rendered path.
    pub fn path(&self) -> String {
        format!("{}{}", self.parent_uri, self.relative_uri)
    }

    /// Child segments mapped to their full paths, in registration order.
    pub fn children(&self) -> &IndexMap<String, String> {
        &self.children
    }

    /// Returns the operation for `method`, creating it on first sight.
    ///
    /// A repeated declaration is reported as an error and continues to
    /// populate the existing operation.
    pub fn declare_operation(
        &mut self,
        method: HttpMethod,
        origin: &str,
        diagnostics: &mut Diagnostics,
    ) -> &mut Operation {
        if self.operations.contains_key(&method) {
            diagnostics.error(origin, format!("Duplicate operation {} {}", method, self.path()));
        }
        self.operations
            .entry(method)
            .or_insert_with(|| Operation::new(method))
    }
}

/// The resource hierarchy of one run.
#[derive(Debug, Clone, Default)]
pub struct ResourceTree {
    nodes: IndexMap<String, ResourceNode>,
    roots: IndexMap<String, String>,
}

impl ResourceTree {
    /// An empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `node` at `path`, replacing whatever was there.
    ///
    /// Missing ancestors are created as empty stubs first.
    pub fn set_resource(&mut self, path: &ResourcePath, mut node: ResourceNode) {
        let key = path.as_str().to_string();
        let parent_key = path.parent().map(|parent| {
            self.resolve(parent);
            parent.as_str().to_string()
        });

        node.relative_uri = path.segment().to_string();
        node.parent_uri = parent_key.clone().unwrap_or_default();
        node.children.clear();
        for var in path.own_vars() {
            node.uri_parameters
                .entry(var.name.clone())
                .or_insert_with(|| Parameter::new(var.name.clone()))
                .pattern = var.pattern.clone();
        }

        if let Some(previous) = self.nodes.shift_remove(&key) {
            tracing::debug!(path = %key, "replacing resource");
            self.discard_children(&previous);
        }

        let siblings = match &parent_key {
            Some(parent) => self.nodes.get_mut(parent).map(|p| &mut p.children),
            None => Some(&mut self.roots),
        };
        if let Some(siblings) = siblings {
            siblings.insert(node.relative_uri.clone(), key.clone());
        }
        tracing::debug!(path = %key, "registered resource");
        self.nodes.insert(key, node);
    }

    /// Returns the node at `path`, creating it (and its ancestors) if absent.
    ///
    /// Repeated lookups of the same path return the same node until the
    /// path is registered again.
    pub fn resolve(&mut self, path: &ResourcePath) -> &mut ResourceNode {
        if !self.nodes.contains_key(path.as_str()) {
            tracing::trace!(path = %path, "creating ancestor stub");
            self.set_resource(path, ResourceNode::default());
        }
        self.nodes.entry(path.as_str().to_string()).or_default()
    }

    /// Node at `path`, if registered.
    pub fn get(&self, path: &ResourcePath) -> Option<&ResourceNode> {
        self.nodes.get(path.as_str())
    }

    /// Node at a rendered path, if registered.
    pub fn get_by_key(&self, key: &str) -> Option<&ResourceNode> {
        self.nodes.get(key)
    }

    /// Mutable node at a rendered path, if registered.
    pub fn get_mut_by_key(&mut self, key: &str) -> Option<&mut ResourceNode> {
        self.nodes.get_mut(key)
    }

    /// Root-level nodes in registration order.
    pub fn roots(&self) -> impl Iterator<Item = &ResourceNode> {
        self.roots.values().filter_map(|key| self.nodes.get(key))
    }

    /// Children of `node` in registration order.
    pub fn children<'a>(&'a self, node: &'a ResourceNode) -> impl Iterator<Item = &'a ResourceNode> {
        node.children.values().filter_map(|key| self.nodes.get(key))
    }

    /// All nodes, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ResourceNode> {
        self.nodes.values()
    }

    /// Number of nodes reachable from the roots.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn discard_children(&mut self, node: &ResourceNode) {
        for child_key in node.children.values() {
            if let Some(child) = self.nodes.shift_remove(child_key) {
                self.discard_children(&child);
            }
        }
    }
}
