use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::info;

use super::vector_store::VectorStore;

/// Process-wide slot holding the live store.
///
/// Readers take a snapshot and keep it for the whole request, so a
/// concurrent [`StoreHandle::replace`] is observed either entirely or not
/// at all.
#[derive(Debug)]
pub struct StoreHandle {
    current: ArcSwap<VectorStore>,
}

impl StoreHandle {
    pub fn new(store: VectorStore) -> Self {
        Self {
            current: ArcSwap::from_pointee(store),
        }
    }

    pub fn snapshot(&self) -> Arc<VectorStore> {
        self.current.load_full()
    }

    /// Atomically install a fully built store, returning the previous one.
    pub fn replace(&self, store: VectorStore) -> Arc<VectorStore> {
        info!(
            documents = store.len(),
            dimension = store.dimension(),
            model = %store.model(),
            "Swapping in new vector store"
        );
        self.current.swap(Arc::new(store))
    }
}
