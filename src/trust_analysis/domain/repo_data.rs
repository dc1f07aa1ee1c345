use serde::{Deserialize, Serialize};

/// Normalized facts about a node's upstream GitHub repository.
///
/// Popularity counts come from the remote metadata API; `version` and
/// `dependencies` are carried forward from the node itself, not from
/// the remote response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoData {
    /// Canonical clone URL reported by the API.
    pub url: String,
    pub owner: String,
    pub repo: String,
    pub forks: u64,
    pub stars: u64,
    /// The node's declared version ("0.0.0" when missing).
    pub version: String,
    /// The node's outgoing edge count.
    pub dependencies: usize,
}
