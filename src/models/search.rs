use serde::{Deserialize, Serialize};

use super::document::{DocumentId, DocumentMetadata};

/// Similarity of one store entry to a query, by store index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub index: usize,
    /// Cosine similarity, always within [-1, 1].
    pub similarity: f32,
}

/// A ranked hit joined with its document metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub document_id: DocumentId,
    pub similarity: f32,
    pub metadata: DocumentMetadata,
}
