pub mod document;
pub mod search;

pub use document::{DocumentId, DocumentMetadata, SessionInfo};
pub use search::{ScoredResult, SearchResult};
