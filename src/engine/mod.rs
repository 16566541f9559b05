//! Retrieval engine: embed the query, rank the live store, join metadata.

use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info};

use crate::embedding::EmbeddingClient;
use crate::error::SearchError;
use crate::models::SearchResult;
use crate::ranking;
use crate::store::{StoreHandle, StoreStats, VectorStore};

pub struct RetrievalEngine {
    embedder: EmbeddingClient,
    store: StoreHandle,
}

impl RetrievalEngine {
    /// Pair an embedding client with a loaded store.
    ///
    /// Fails if the store was built with a different model or dimension than
    /// the client produces.
    pub fn new(embedder: EmbeddingClient, store: VectorStore) -> Result<Self, SearchError> {
        Self::check_compatible(&embedder, &store)?;
        Ok(Self {
            embedder,
            store: StoreHandle::new(store),
        })
    }

    fn check_compatible(embedder: &EmbeddingClient, store: &VectorStore) -> Result<(), SearchError> {
        store.ensure_model(embedder.model_name())?;
        if store.dimension() != embedder.dimension() {
            return Err(SearchError::DimensionMismatch {
                expected: embedder.dimension(),
                actual: store.dimension(),
            });
        }
        Ok(())
    }

    /// Return the `k` corpus documents most similar to `query`, best first.
    pub async fn search(&self, query: &str, k: usize) -> Result<Vec<SearchResult>, SearchError> {
        if query.trim().is_empty() {
            return Err(SearchError::invalid_input("query text must not be empty"));
        }
        if k == 0 {
            return Err(SearchError::invalid_input("k must be a positive integer"));
        }

        let started = Instant::now();
        let query_vector = self.embedder.embed(query).await?;

        let store = self.store.snapshot();
        let scored = ranking::rank(&query_vector, &store, k)?;

        let results: Vec<SearchResult> = scored
            .into_iter()
            .filter_map(|hit| {
                store.metadata(hit.index).map(|metadata| SearchResult {
                    document_id: metadata.id.clone(),
                    similarity: hit.similarity,
                    metadata: metadata.clone(),
                })
            })
            .collect();

        info!(
            query_chars = query.chars().count(),
            k,
            results = results.len(),
            corpus = store.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Search completed"
        );

        Ok(results)
    }

    /// Load a new artifact off to the side and swap it in once valid.
    ///
    /// On any failure the current store keeps serving.
    pub async fn reload(&self, path: impl AsRef<Path>) -> Result<StoreStats, SearchError> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let model = self.embedder.model_name().to_string();

        let loaded = tokio::task::spawn_blocking(move || VectorStore::load(&path, &model)).await?;

        match loaded {
            Ok(store) => self.install(store),
            Err(e) => {
                error!(error = %e, "Store reload rejected, keeping current store");
                Err(e.into())
            }
        }
    }

    /// Swap in an already built store after checking it fits the client.
    pub fn install(&self, store: VectorStore) -> Result<StoreStats, SearchError> {
        Self::check_compatible(&self.embedder, &store)?;
        let stats = store.stats();
        self.store.replace(store);
        Ok(stats)
    }

    pub fn stats(&self) -> StoreStats {
        self.store.snapshot().stats()
    }

    pub fn model_name(&self) -> &str {
        self.embedder.model_name()
    }
}
