use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

use super::errors::EmbeddingError;
use super::provider::EmbeddingProvider;
use super::retry::{BackoffPolicy, RetryError, RetryHandler};

/// Turns query text into a query vector with retries and an overall deadline.
///
/// Holds no mutable state, so one client can serve concurrent searches.
#[derive(Clone)]
pub struct EmbeddingClient {
    provider: Arc<dyn EmbeddingProvider>,
    policy: BackoffPolicy,
    deadline: Duration,
    dimension: usize,
}

impl EmbeddingClient {
    /// `dimension` is the corpus-wide embedding size every result must match.
    pub fn new(provider: Arc<dyn EmbeddingProvider>, dimension: usize) -> Self {
        Self {
            provider,
            policy: BackoffPolicy::default(),
            deadline: Duration::from_secs(120),
            dimension,
        }
    }

    pub fn with_policy(mut self, policy: BackoffPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn model_name(&self) -> &str {
        self.provider.model_name()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(EmbeddingError::InvalidInput {
                message: "query text must not be empty".to_string(),
            });
        }

        let mut handler = RetryHandler::new(self.policy.backoff());
        let outcome = timeout(self.deadline, handler.retry(|| self.provider.embed(text))).await;

        let vector = match outcome {
            Err(_) => {
                return Err(EmbeddingError::Timeout {
                    deadline_ms: self.deadline.as_millis() as u64,
                    attempts: handler.attempts(),
                });
            }
            Ok(Err(RetryError::NonRetryable { source })) => {
                return Err(EmbeddingError::from_permanent(source));
            }
            Ok(Err(RetryError::Exhausted { attempts, source })) => {
                return Err(EmbeddingError::Exhausted {
                    attempts,
                    last_error: source.to_string(),
                });
            }
            Ok(Ok(vector)) => vector,
        };

        if vector.len() != self.dimension {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.len(),
            });
        }
        if vector.iter().any(|c| !c.is_finite()) {
            return Err(EmbeddingError::MalformedResponse {
                message: "embedding contains non-finite components".to_string(),
            });
        }

        debug!(
            provider = self.provider.provider_name(),
            model = self.provider.model_name(),
            attempts = handler.attempts(),
            "Query embedded"
        );

        Ok(vector)
    }
}
