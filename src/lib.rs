//! npm-trust - dependency trust analysis for npm projects
//!
//! This library walks an npm project's dependency tree and annotates
//! each dependency with a heuristic trust rating derived from its
//! GitHub repository's popularity (forks/stars) and version maturity,
//! following hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain + Services** (`trust_analysis`): the dependency tree
//!   model, the trust classifier, the caching repository data fetcher,
//!   and the incremental tree analyzer
//! - **Application Layer** (`application`): use cases and DTOs
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use npm_trust::prelude::*;
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let tree_loader = PackageLockReader::new();
//! let repository_client = GitHubClient::new(GitHubConfig::default())?;
//! let cache_store = InMemoryCacheStore::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = AnalyzeTreeUseCase::new(
//!     tree_loader,
//!     repository_client,
//!     cache_store,
//!     progress_reporter,
//! );
//!
//! // Execute
//! let request = AnalyzeRequest::new(PathBuf::from("."), None);
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let formatter = TextReportFormatter::new();
//! let output = formatter.format(&response.rows)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;
pub mod trust_analysis;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, JsonFileCacheStore, PackageLockReader, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonReportFormatter, TextReportFormatter};
    pub use crate::adapters::outbound::memory::InMemoryCacheStore;
    pub use crate::adapters::outbound::network::{GitHubClient, GitHubConfig};
    pub use crate::application::dto::{AnalyzeRequest, AnalyzeResponse};
    pub use crate::application::use_cases::AnalyzeTreeUseCase;
    pub use crate::ports::outbound::report_formatter::ReportRow;
    pub use crate::ports::outbound::{
        CacheEntry, CacheStore, OutputPresenter, ProgressReporter, ReportFormatter,
        RepositoryClient, RepositoryResponse, TreeLoader,
    };
    pub use crate::trust_analysis::domain::{
        Analysis, DependencyEdge, DependencyNode, DependencyTree, EdgeError, EdgeKind, NodeId,
        PackageMetadata, RepoData, Trust,
    };
    pub use crate::trust_analysis::services::{classify, RepoDataFetcher, TreeAnalyzer};
    pub use crate::shared::Result;
}
