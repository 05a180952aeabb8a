mod in_memory_store;

pub use in_memory_store::{InMemoryCancellationStore, DEFAULT_SWEEP_INTERVAL, DEFAULT_TTL};
