mod in_memory_repository;

pub use in_memory_repository::{
    InMemoryJobRepository, DEFAULT_RETENTION, DEFAULT_SWEEP_INTERVAL,
};
