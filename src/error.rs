use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::ranking::RankError;
use crate::store::StoreLoadError;

/// Errors returned across the retrieval engine boundary.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("Store error: {0}")]
    Store(#[from] StoreLoadError),

    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl SearchError {
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Get error category for logging and API responses
    pub fn category(&self) -> &'static str {
        match self {
            SearchError::InvalidInput { .. } => "invalid_input",
            SearchError::DimensionMismatch { .. } => "dimension_mismatch",
            SearchError::Embedding(inner) => inner.category(),
            SearchError::Store(_) => "store",
            SearchError::TaskJoin(_) => "task",
        }
    }
}

impl From<RankError> for SearchError {
    fn from(error: RankError) -> Self {
        match error {
            RankError::InvalidInput { message } => SearchError::InvalidInput { message },
            RankError::DimensionMismatch { expected, actual } => {
                SearchError::DimensionMismatch { expected, actual }
            }
        }
    }
}
