use super::edge::DependencyEdge;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stable, path-based identity of a node in the dependency tree.
///
/// The identity is the node's location under the project root
/// (e.g. `node_modules/express/node_modules/debug`), not its package
/// name: the same package appearing at two positions in the tree is
/// two distinct nodes. The root node has the empty path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    /// Identity of the project root node.
    pub fn root() -> Self {
        Self(String::new())
    }

    pub fn from_path(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            write!(f, "(root)")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Declared package metadata for a node, as read from its manifest.
///
/// Every field is optional: installed trees routinely contain packages
/// with no description or repository URL, and the root of a private
/// project may lack a version.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageMetadata {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub repository_url: Option<String>,
}

/// A package instance at a specific position in the dependency tree.
#[derive(Debug, Clone)]
pub struct DependencyNode {
    pub id: NodeId,
    pub name: String,
    pub package: PackageMetadata,
    /// Weak back-reference: the child does not own its parent.
    pub parent: Option<NodeId>,
    /// Outgoing edges - the node's declared dependencies, in
    /// declaration order.
    pub edges_out: Vec<DependencyEdge>,
    /// Incoming edges - identities of the nodes that depend on this one.
    pub edges_in: Vec<NodeId>,
}

impl DependencyNode {
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            package: PackageMetadata::default(),
            parent: None,
            edges_out: Vec::new(),
            edges_in: Vec::new(),
        }
    }

    pub fn with_package(mut self, package: PackageMetadata) -> Self {
        self.package = package;
        self
    }

    pub fn with_parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// The node's declared version, or `None` for unversioned packages.
    pub fn version(&self) -> Option<&str> {
        self.package.version.as_deref()
    }

    /// Number of outgoing edges, regardless of kind.
    pub fn dependency_count(&self) -> usize {
        self.edges_out.len()
    }
}

/// The complete dependency tree of a project, keyed by node identity.
///
/// The tree is read-only from the analyzer's perspective; it is
/// produced by a `TreeLoader` implementation.
#[derive(Debug, Clone)]
pub struct DependencyTree {
    root: NodeId,
    nodes: HashMap<NodeId, DependencyNode>,
}

impl DependencyTree {
    pub fn new(root: NodeId) -> Self {
        Self {
            root,
            nodes: HashMap::new(),
        }
    }

    pub fn root(&self) -> &NodeId {
        &self.root
    }

    pub fn get(&self, id: &NodeId) -> Option<&DependencyNode> {
        self.nodes.get(id)
    }

    pub fn insert(&mut self, node: DependencyNode) {
        self.nodes.insert(node.id.clone(), node);
    }

    /// Records an incoming edge on the target node, if it exists.
    pub fn link_incoming(&mut self, from: &NodeId, to: &NodeId) {
        if let Some(node) = self.nodes.get_mut(to) {
            node.edges_in.push(from.clone());
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trust_analysis::domain::edge::EdgeKind;

    #[test]
    fn test_node_id_root() {
        let id = NodeId::root();
        assert!(id.is_root());
        assert_eq!(id.to_string(), "(root)");
    }

    #[test]
    fn test_node_id_from_path() {
        let id = NodeId::from_path("node_modules/express");
        assert!(!id.is_root());
        assert_eq!(id.as_str(), "node_modules/express");
        assert_eq!(id.to_string(), "node_modules/express");
    }

    #[test]
    fn test_same_package_at_two_paths_is_two_identities() {
        let a = NodeId::from_path("node_modules/debug");
        let b = NodeId::from_path("node_modules/express/node_modules/debug");
        assert_ne!(a, b);
    }

    #[test]
    fn test_tree_insert_and_get() {
        let mut tree = DependencyTree::new(NodeId::root());
        tree.insert(DependencyNode::new(NodeId::root(), "my-project"));
        tree.insert(DependencyNode::new(
            NodeId::from_path("node_modules/express"),
            "express",
        ));

        assert_eq!(tree.node_count(), 2);
        let node = tree.get(&NodeId::from_path("node_modules/express")).unwrap();
        assert_eq!(node.name, "express");
        assert!(tree.get(&NodeId::from_path("node_modules/nope")).is_none());
    }

    #[test]
    fn test_link_incoming() {
        let mut tree = DependencyTree::new(NodeId::root());
        tree.insert(DependencyNode::new(NodeId::root(), "my-project"));
        let child = NodeId::from_path("node_modules/express");
        tree.insert(DependencyNode::new(child.clone(), "express"));

        tree.link_incoming(&NodeId::root(), &child);
        assert_eq!(tree.get(&child).unwrap().edges_in, vec![NodeId::root()]);
    }

    #[test]
    fn test_dependency_count_counts_all_edge_kinds() {
        let id = NodeId::from_path("node_modules/express");
        let mut node = DependencyNode::new(id.clone(), "express");
        node.edges_out.push(DependencyEdge::new(
            id.clone(),
            Some(NodeId::from_path("node_modules/debug")),
            EdgeKind::Prod,
            "^4.0.0",
        ));
        node.edges_out.push(DependencyEdge::new(
            id.clone(),
            Some(NodeId::from_path("node_modules/mocha")),
            EdgeKind::Dev,
            "^10.0.0",
        ));
        assert_eq!(node.dependency_count(), 2);
    }
}
