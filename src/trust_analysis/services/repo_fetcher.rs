use crate::ports::outbound::{CacheEntry, CacheStore, RepositoryClient, RepositoryResponse};
use crate::shared::Result;
use crate::trust_analysis::domain::{DependencyNode, RepoData};
use chrono::{Duration, Utc};
use regex::Regex;

/// Cache entries older than this trigger a refetch.
const CACHE_TTL_HOURS: i64 = 24;

/// Shape of a supported repository URL:
/// `scheme://[user@]host/owner/repo.git`. Anchored so partial matches
/// inside a longer string are rejected.
const REPO_URL_PATTERN: &str = r"^(.*)://([^@]*@)?(.*)/(.*)/(.*)\.git$";

/// Parsed owner/repo reference extracted from a repository URL.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RepoRef {
    owner: String,
    repo: String,
}

/// RepoDataFetcher resolves a node's repository URL into normalized
/// repository data, caching raw API responses for 24 hours.
///
/// The remote client and the cache store are injected; the fetcher
/// owns the URL parsing, the expiry check, and the normalization.
pub struct RepoDataFetcher<C, S> {
    client: C,
    cache: S,
    url_pattern: Regex,
}

impl<C, S> RepoDataFetcher<C, S>
where
    C: RepositoryClient,
    S: CacheStore,
{
    pub fn new(client: C, cache: S) -> Self {
        Self {
            client,
            cache,
            // The pattern is a string literal; compilation cannot fail.
            url_pattern: Regex::new(REPO_URL_PATTERN).unwrap(),
        }
    }

    /// Fetches repository data for the given node.
    ///
    /// Returns `Ok(None)` when the node has no repository URL, the URL
    /// does not look like a GitHub repository, or the owner/repo
    /// segments are empty. A failed remote lookup propagates as an
    /// error; the caller decides how to degrade.
    pub async fn fetch(&self, node: &DependencyNode) -> Result<Option<RepoData>> {
        let url = match node.package.repository_url.as_deref() {
            Some(url) => url,
            None => return Ok(None),
        };

        let repo_ref = match self.parse_repo_url(url) {
            Some(repo_ref) => repo_ref,
            None => return Ok(None),
        };

        let cache_key = format!("github/{}/{}", repo_ref.owner, repo_ref.repo);

        // If we have fresh cached data, use it and skip the network
        if let Some(value) = self.cache.get(&cache_key) {
            if let Ok(entry) = serde_json::from_value::<CacheEntry<RepositoryResponse>>(value) {
                if entry.age(Utc::now()) < Duration::hours(CACHE_TTL_HOURS) {
                    return Ok(Some(extract_repo_data(&entry.data, node)));
                }
            }
        }

        let response = self
            .client
            .get_repository(&repo_ref.owner, &repo_ref.repo)
            .await?;

        // Cache the raw response, best-effort
        if let Ok(value) = serde_json::to_value(CacheEntry::new(response.clone())) {
            self.cache.update(&cache_key, value);
        }

        Ok(Some(extract_repo_data(&response, node)))
    }

    /// Parses `scheme://[user@]host/owner/repo.git` into an owner/repo
    /// reference, lowercased. Returns `None` unless the host is
    /// github.com and both segments are non-empty.
    fn parse_repo_url(&self, url: &str) -> Option<RepoRef> {
        let captures = self.url_pattern.captures(url)?;

        let host = captures.get(3)?.as_str().to_lowercase();
        let owner = captures.get(4)?.as_str().to_lowercase();
        let repo = captures.get(5)?.as_str().to_lowercase();

        if host != "github.com" {
            return None;
        }
        if owner.is_empty() || repo.is_empty() {
            return None;
        }

        Some(RepoRef { owner, repo })
    }
}

/// Normalizes a raw API response into `RepoData`, carrying forward the
/// node's declared version and outgoing-edge count.
fn extract_repo_data(response: &RepositoryResponse, node: &DependencyNode) -> RepoData {
    RepoData {
        url: response.clone_url.clone(),
        owner: response.owner.login.clone(),
        repo: response.name.clone(),
        forks: response.forks_count,
        stars: response.stargazers_count,
        version: node.version().unwrap_or("0.0.0").to_string(),
        dependencies: node.dependency_count(),
    }
}
