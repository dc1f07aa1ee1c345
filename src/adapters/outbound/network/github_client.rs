use crate::ports::outbound::{RepositoryClient, RepositoryResponse};
use crate::shared::error::TrustError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Configuration for the GitHub metadata client.
///
/// The token is read once at construction; there is no implicit
/// reload. To pick up a changed token, build a new client.
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// Personal access token for authenticated requests. Unauthenticated
    /// requests work but are rate-limited to 60/hour.
    pub token: Option<String>,
    /// API base URL, overridable for GitHub Enterprise and tests.
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_url: "https://api.github.com".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// GitHubClient adapter for fetching repository metadata from the
/// GitHub REST API.
///
/// This adapter implements the RepositoryClient port with a single
/// read-only call, `GET /repos/{owner}/{repo}`. There is no retry:
/// a failed lookup surfaces to the caller, which recovers per node.
pub struct GitHubClient {
    client: reqwest::Client,
    config: GitHubConfig,
}

impl GitHubClient {
    /// Creates a new GitHub client with the given configuration
    pub fn new(config: GitHubConfig) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("npm-trust/{}", version);
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// Validates and sanitizes an owner/repo segment for URL safety
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        if component.contains('/') || component.contains('\\') {
            anyhow::bail!(
                "Security: {} contains path separators which are not allowed",
                component_type
            );
        }

        if component.contains("..") {
            anyhow::bail!(
                "Security: {} contains '..' which is not allowed",
                component_type
            );
        }

        if component.contains('#') || component.contains('?') || component.contains('@') {
            anyhow::bail!(
                "Security: {} contains URL-unsafe characters",
                component_type
            );
        }

        Ok(())
    }
}

#[async_trait]
impl RepositoryClient for GitHubClient {
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepositoryResponse> {
        Self::validate_url_component(owner, "Repository owner")?;
        Self::validate_url_component(repo, "Repository name")?;

        let encoded_owner = urlencoding::encode(owner);
        let encoded_repo = urlencoding::encode(repo);
        let url = format!(
            "{}/repos/{}/{}",
            self.config.api_url, encoded_owner, encoded_repo
        );

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = self.config.token.as_deref() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(TrustError::MetadataLookupError {
                owner: owner.to_string(),
                repo: repo.to_string(),
                details: format!("GitHub API returned status code {}", response.status()),
            }
            .into());
        }

        let repository: RepositoryResponse = response.json().await?;
        Ok(repository)
    }
}
