use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading or validating a persisted embedding artifact.
///
/// Any of these is fatal for the artifact: no partially valid store is
/// ever produced.
#[derive(Debug, Error)]
pub enum StoreLoadError {
    #[error("Failed to read store artifact {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decompress store artifact {}: {source}", path.display())]
    Decompress {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed store artifact: {message}")]
    Parse { message: String },

    #[error("Store artifact does not declare an embedding model")]
    EmptyModel,

    #[error("Store artifact declares a zero embedding dimension")]
    ZeroDimension,

    #[error("Store artifact has {documents} documents but {embeddings} embeddings")]
    CountMismatch { documents: usize, embeddings: usize },

    #[error("Embedding {index} has {actual} components, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Embedding {index} contains a non-finite component")]
    NonFiniteComponent { index: usize },

    #[error("Document {index} is missing field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("Duplicate document id: {id}")]
    DuplicateId { id: String },

    #[error("Store was built with model {found}, but the embedding client uses {expected}")]
    ModelMismatch { expected: String, found: String },
}
