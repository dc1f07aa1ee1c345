use crate::shared::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Raw response from the remote repository-metadata API.
///
/// This is the shape that gets cached verbatim; normalization into the
/// domain `RepoData` happens in the fetcher, which also carries forward
/// node-local facts (declared version, dependency count).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryResponse {
    pub clone_url: String,
    pub name: String,
    pub owner: RepositoryOwner,
    pub forks_count: u64,
    pub stargazers_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryOwner {
    pub login: String,
}

/// RepositoryClient port for the remote repository-metadata API
///
/// One read-only operation: "get repository by owner and name".
/// Authentication is supplied at adapter construction time, not
/// managed through this port.
///
/// # Errors
/// Implementations fail on network errors, non-2xx responses, and
/// unparseable bodies. There is no retry at this level; the tree
/// analyzer recovers per node.
#[async_trait]
pub trait RepositoryClient: Send + Sync {
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepositoryResponse>;
}
