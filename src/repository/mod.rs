use std::path::PathBuf;

use thiserror::Error;

use crate::domain::review::ProductReviewSet;

pub mod json;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize reviews: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Persists the result of a finished run.
pub trait ReviewWriter {
    /// Stores `reviews` and returns where they were written.
    fn save(&self, reviews: &ProductReviewSet) -> RepositoryResult<PathBuf>;
}
