//! Immutable in-memory corpus of document embeddings.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use super::artifact::{read_artifact, RawArtifact};
use super::errors::StoreLoadError;
use crate::models::DocumentMetadata;

/// Read-only view of one stored document vector.
#[derive(Debug, Clone, Copy)]
pub struct DocumentVector<'a> {
    pub index: usize,
    pub components: &'a [f32],
    pub norm: f64,
    pub metadata: &'a DocumentMetadata,
}

/// Summary of a loaded store, reported by `inspect` and the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub documents: usize,
    pub dimension: usize,
    pub model: String,
    pub loaded_at: DateTime<Utc>,
}

/// Validated corpus: one vector and one metadata record per index.
///
/// Vectors live in a single row-major buffer of `len() * dimension()`
/// floats; norms are computed once at construction.
#[derive(Debug)]
pub struct VectorStore {
    model: String,
    dimension: usize,
    components: Vec<f32>,
    norms: Vec<f64>,
    metadata: Vec<DocumentMetadata>,
    loaded_at: DateTime<Utc>,
}

impl VectorStore {
    /// Load an artifact from disk and check it was built with `expected_model`.
    pub fn load(path: impl AsRef<Path>, expected_model: &str) -> Result<Self, StoreLoadError> {
        let path = path.as_ref();
        let raw = read_artifact(path)?;
        let store = Self::from_artifact(raw)?;
        store.ensure_model(expected_model)?;

        info!(
            path = %path.display(),
            documents = store.len(),
            dimension = store.dimension,
            model = %store.model,
            "Loaded vector store"
        );

        Ok(store)
    }

    /// Validate a deserialized artifact and build the store.
    pub fn from_artifact(raw: RawArtifact) -> Result<Self, StoreLoadError> {
        if raw.documents.len() != raw.embeddings.len() {
            return Err(StoreLoadError::CountMismatch {
                documents: raw.documents.len(),
                embeddings: raw.embeddings.len(),
            });
        }

        let documents = raw
            .documents
            .into_iter()
            .enumerate()
            .map(|(index, doc)| doc.into_metadata(index))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_documents(
            raw.model,
            raw.dimension,
            documents.into_iter().zip(raw.embeddings),
        )
    }

    /// Build a store from metadata/vector pairs, enforcing every store invariant.
    pub fn from_documents<I>(
        model: impl Into<String>,
        dimension: usize,
        documents: I,
    ) -> Result<Self, StoreLoadError>
    where
        I: IntoIterator<Item = (DocumentMetadata, Vec<f32>)>,
    {
        let model = model.into();
        if model.trim().is_empty() {
            return Err(StoreLoadError::EmptyModel);
        }
        if dimension == 0 {
            return Err(StoreLoadError::ZeroDimension);
        }

        let mut components = Vec::new();
        let mut norms = Vec::new();
        let mut metadata = Vec::new();
        let mut seen_ids = HashSet::new();

        for (index, (doc, vector)) in documents.into_iter().enumerate() {
            if vector.len() != dimension {
                return Err(StoreLoadError::DimensionMismatch {
                    index,
                    expected: dimension,
                    actual: vector.len(),
                });
            }
            if vector.iter().any(|c| !c.is_finite()) {
                return Err(StoreLoadError::NonFiniteComponent { index });
            }
            if !seen_ids.insert(doc.id.clone()) {
                return Err(StoreLoadError::DuplicateId {
                    id: doc.id.to_string(),
                });
            }

            norms.push(crate::ranking::l2_norm(&vector));
            components.extend_from_slice(&vector);
            metadata.push(doc);
        }

        Ok(Self {
            model,
            dimension,
            components,
            norms,
            metadata,
            loaded_at: Utc::now(),
        })
    }

    pub fn ensure_model(&self, expected_model: &str) -> Result<(), StoreLoadError> {
        if self.model != expected_model {
            return Err(StoreLoadError::ModelMismatch {
                expected: expected_model.to_string(),
                found: self.model.clone(),
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.metadata.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn metadata(&self, index: usize) -> Option<&DocumentMetadata> {
        self.metadata.get(index)
    }

    pub fn get(&self, index: usize) -> Option<DocumentVector<'_>> {
        let metadata = self.metadata.get(index)?;
        let start = index * self.dimension;
        Some(DocumentVector {
            index,
            components: &self.components[start..start + self.dimension],
            norm: self.norms[index],
            metadata,
        })
    }

    /// Iterate over all entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = DocumentVector<'_>> + '_ {
        self.components
            .chunks_exact(self.dimension)
            .zip(self.norms.iter())
            .zip(self.metadata.iter())
            .enumerate()
            .map(|(index, ((components, &norm), metadata))| DocumentVector {
                index,
                components,
                norm,
                metadata,
            })
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            documents: self.len(),
            dimension: self.dimension,
            model: self.model.clone(),
            loaded_at: self.loaded_at,
        }
    }
}
