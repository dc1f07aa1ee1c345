/// In-memory adapters, used for cache-less runs and tests
mod in_memory_cache_store;

pub use in_memory_cache_store::InMemoryCacheStore;
