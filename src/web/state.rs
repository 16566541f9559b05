use std::path::PathBuf;
use std::sync::Arc;

use crate::engine::RetrievalEngine;

/// Shared state handed to every HTTP handler.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RetrievalEngine>,
    /// Artifact re-read by `POST /api/reload`.
    pub store_path: PathBuf,
    pub default_k: usize,
    pub max_k: usize,
}
