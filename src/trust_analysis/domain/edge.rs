use super::node::NodeId;
use serde::{Deserialize, Serialize};

/// Declared type of a dependency relationship.
///
/// Only `Prod` edges are traversed by the tree analyzer; the other
/// kinds are carried for completeness and future filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Prod,
    Dev,
    Peer,
    Optional,
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeKind::Prod => write!(f, "prod"),
            EdgeKind::Dev => write!(f, "dev"),
            EdgeKind::Peer => write!(f, "peer"),
            EdgeKind::Optional => write!(f, "optional"),
        }
    }
}

/// Error condition attached to an edge whose target could not be
/// resolved cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeError {
    Detached,
    Missing,
    Invalid,
    PeerMismatch,
}

/// A dependency relationship between two nodes in the tree.
///
/// `to` is `None` when the target package is not present in the tree
/// (in which case `error` carries the reason).
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyEdge {
    pub from: NodeId,
    pub to: Option<NodeId>,
    pub kind: EdgeKind,
    /// The declared version specifier, e.g. `^1.2.0`.
    pub spec: String,
    pub error: Option<EdgeError>,
}

impl DependencyEdge {
    pub fn new(from: NodeId, to: Option<NodeId>, kind: EdgeKind, spec: impl Into<String>) -> Self {
        let error = if to.is_none() {
            Some(EdgeError::Missing)
        } else {
            None
        };
        Self {
            from,
            to,
            kind,
            spec: spec.into(),
            error,
        }
    }

    pub fn with_error(mut self, error: EdgeError) -> Self {
        self.error = Some(error);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_kind_display() {
        assert_eq!(EdgeKind::Prod.to_string(), "prod");
        assert_eq!(EdgeKind::Dev.to_string(), "dev");
        assert_eq!(EdgeKind::Peer.to_string(), "peer");
        assert_eq!(EdgeKind::Optional.to_string(), "optional");
    }

    #[test]
    fn test_edge_without_target_is_marked_missing() {
        let edge = DependencyEdge::new(
            NodeId::root(),
            None,
            EdgeKind::Prod,
            "^1.0.0",
        );
        assert_eq!(edge.error, Some(EdgeError::Missing));
    }

    #[test]
    fn test_with_error_overrides_the_default() {
        let edge = DependencyEdge::new(
            NodeId::root(),
            Some(NodeId::from_path("node_modules/left-pad")),
            EdgeKind::Peer,
            "^1.0.0",
        )
        .with_error(EdgeError::PeerMismatch);
        assert_eq!(edge.error, Some(EdgeError::PeerMismatch));
    }

    #[test]
    fn test_edge_with_target_has_no_error() {
        let edge = DependencyEdge::new(
            NodeId::root(),
            Some(NodeId::from_path("node_modules/left-pad")),
            EdgeKind::Prod,
            "^1.0.0",
        );
        assert!(edge.error.is_none());
    }
}
