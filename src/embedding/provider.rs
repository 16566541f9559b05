//! Embedding provider abstraction

use async_trait::async_trait;

use super::errors::ProviderError;

/// Provider-agnostic trait for turning text into an embedding vector.
///
/// One call issues exactly one request to the backing service; retrying is
/// the caller's concern.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed `text` with this provider's model.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, ProviderError>;

    /// Get the provider name for logging and debugging
    fn provider_name(&self) -> &'static str;

    /// Get the model identifier being used
    fn model_name(&self) -> &str;
}
