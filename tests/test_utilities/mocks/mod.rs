mod mock_progress_reporter;
mod mock_repository_client;
mod mock_tree_loader;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_repository_client::MockRepositoryClient;
pub use mock_tree_loader::MockTreeLoader;
