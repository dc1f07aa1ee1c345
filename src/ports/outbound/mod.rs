/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod cache_store;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;
pub mod repository_client;
pub mod tree_loader;

pub use cache_store::{CacheEntry, CacheStore};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::{ReportFormatter, ReportRow};
pub use repository_client::{RepositoryClient, RepositoryResponse};
pub use tree_loader::TreeLoader;
