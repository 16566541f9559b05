//! Corpus storage: artifact loading, validation and the live store slot.

pub mod artifact;
mod errors;
mod handle;
mod vector_store;

pub use errors::StoreLoadError;
pub use handle::StoreHandle;
pub use vector_store::{DocumentVector, StoreStats, VectorStore};
