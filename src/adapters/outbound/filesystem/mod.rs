/// Filesystem adapters for file I/O operations
mod file_writer;
mod json_cache_store;
mod package_lock_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use json_cache_store::JsonFileCacheStore;
pub use package_lock_reader::PackageLockReader;
