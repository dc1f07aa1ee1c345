pub mod classifier;
pub mod repo_fetcher;
pub mod tree_analyzer;

pub use classifier::classify;
pub use repo_fetcher::RepoDataFetcher;
pub use tree_analyzer::TreeAnalyzer;
