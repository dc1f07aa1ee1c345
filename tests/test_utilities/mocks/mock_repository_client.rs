use async_trait::async_trait;
use npm_trust::ports::outbound::repository_client::RepositoryOwner;
use npm_trust::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock RepositoryClient with per-repository scripted popularity
/// counts, tracking lookup counts.
#[derive(Default, Clone)]
pub struct MockRepositoryClient {
    repositories: Arc<Mutex<HashMap<String, (u64, u64)>>>,
    call_count: Arc<AtomicUsize>,
}

impl MockRepositoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a repository with the given (forks, stars).
    pub fn with_repository(self, owner: &str, repo: &str, forks: u64, stars: u64) -> Self {
        self.repositories
            .lock()
            .unwrap()
            .insert(format!("{}/{}", owner, repo), (forks, stars));
        self
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RepositoryClient for MockRepositoryClient {
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepositoryResponse> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        let key = format!("{}/{}", owner, repo);
        let Some((forks, stars)) = self.repositories.lock().unwrap().get(&key).copied() else {
            anyhow::bail!("mock: unknown repository {}", key);
        };

        Ok(RepositoryResponse {
            clone_url: format!("https://github.com/{}/{}.git", owner, repo),
            name: repo.to_string(),
            owner: RepositoryOwner {
                login: owner.to_string(),
            },
            forks_count: forks,
            stargazers_count: stars,
        })
    }
}
