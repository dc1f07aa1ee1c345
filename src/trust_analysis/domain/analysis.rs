use super::repo_data::RepoData;
use serde::{Deserialize, Serialize};

/// Heuristic confidence signal about a dependency's repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trust {
    High,
    Low,
    Indeterminate,
}

impl std::fmt::Display for Trust {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trust::High => write!(f, "high"),
            Trust::Low => write!(f, "low"),
            Trust::Indeterminate => write!(f, "indeterminate"),
        }
    }
}

/// Outcome of analyzing a single node.
///
/// `Unavailable` means the analysis ran but produced nothing: the node
/// had no repository URL, the URL was not a supported GitHub URL, or
/// the metadata lookup failed. This is distinct from "not yet
/// analyzed", which the tree analyzer represents by the absence of any
/// `Analysis` for the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Analysis {
    Unavailable,
    Classified { trust: Trust, data: RepoData },
}

impl Analysis {
    pub fn trust(&self) -> Option<Trust> {
        match self {
            Analysis::Unavailable => None,
            Analysis::Classified { trust, .. } => Some(*trust),
        }
    }

    pub fn data(&self) -> Option<&RepoData> {
        match self {
            Analysis::Unavailable => None,
            Analysis::Classified { data, .. } => Some(data),
        }
    }
}
