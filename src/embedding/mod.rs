//! Query embedding: provider abstraction, the OpenAI HTTP provider, and the
//! retrying client the search engine calls.

pub mod client;
pub mod errors;
pub mod openai;
pub mod provider;
pub mod retry;

pub use client::EmbeddingClient;
pub use errors::{EmbeddingError, ProviderError};
pub use openai::{OpenAiConfig, OpenAiProvider};
pub use provider::EmbeddingProvider;
pub use retry::{BackoffPolicy, FullJitterBackoff, RetryError, RetryHandler};
