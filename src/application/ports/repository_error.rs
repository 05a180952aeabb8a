#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("job not found: {0}")]
    NotFound(String),
    #[error("job already exists: {0}")]
    Conflict(String),
    #[error("backend error: {0}")]
    Backend(String),
}
