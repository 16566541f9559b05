use thiserror::Error;

/// Failure of a single request to the embedding provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Rate limit exceeded: {message}")]
    RateLimitExceeded { message: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Network error: {message}")]
    NetworkError { message: String },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    #[error("Service unavailable: {message}")]
    ServiceUnavailable { message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },
}

impl ProviderError {
    /// Transient failures worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderError::RateLimitExceeded { .. } => true,
            ProviderError::Timeout { .. } => true,
            ProviderError::NetworkError { .. } => true,
            ProviderError::ServerError { status, .. } => *status >= 500,
            ProviderError::ServiceUnavailable { .. } => true,
            _ => false,
        }
    }

    pub fn from_reqwest_error(error: reqwest::Error, timeout_ms: u64) -> Self {
        if error.is_timeout() {
            ProviderError::Timeout { timeout_ms }
        } else if let Some(status) = error.status() {
            Self::from_status_and_body(status, &error.to_string())
        } else if error.is_decode() {
            ProviderError::ParseError {
                message: error.to_string(),
            }
        } else {
            ProviderError::NetworkError {
                message: error.to_string(),
            }
        }
    }

    pub fn from_status_and_body(status: reqwest::StatusCode, body: &str) -> Self {
        let status_code = status.as_u16();

        // Provider error bodies look like {"error": {"message": "..."}}
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| body.to_string());

        match status_code {
            400 | 404 | 422 => ProviderError::InvalidRequest { message },
            401 | 403 => ProviderError::AuthenticationFailed { message },
            408 => ProviderError::Timeout { timeout_ms: 0 },
            429 => ProviderError::RateLimitExceeded { message },
            503 => ProviderError::ServiceUnavailable { message },
            500..=599 => ProviderError::ServerError {
                status: status_code,
                message,
            },
            _ => ProviderError::InvalidRequest {
                message: format!("HTTP {status_code}: {message}"),
            },
        }
    }
}

/// Outcome of an embedding call after input validation and retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmbeddingError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Embedding has {actual} dimensions, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Embedding provider rejected credentials: {message}")]
    Unauthorized { message: String },

    #[error("Embedding provider rejected request: {message}")]
    InvalidRequest { message: String },

    #[error("Embedding provider returned a malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("Embedding deadline of {deadline_ms}ms expired after {attempts} attempts")]
    Timeout { deadline_ms: u64, attempts: u32 },

    #[error("Embedding failed after {attempts} attempts: {last_error}")]
    Exhausted { attempts: u32, last_error: String },
}

impl EmbeddingError {
    /// Classify a provider failure that will not be retried.
    pub fn from_permanent(error: ProviderError) -> Self {
        match error {
            ProviderError::AuthenticationFailed { message } => {
                EmbeddingError::Unauthorized { message }
            }
            ProviderError::ParseError { message } | ProviderError::InvalidResponse { message } => {
                EmbeddingError::MalformedResponse { message }
            }
            other => EmbeddingError::InvalidRequest {
                message: other.to_string(),
            },
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            EmbeddingError::InvalidInput { .. } => "invalid_input",
            EmbeddingError::DimensionMismatch { .. } => "dimension_mismatch",
            EmbeddingError::Unauthorized { .. } => "unauthorized",
            EmbeddingError::InvalidRequest { .. } => "invalid_request",
            EmbeddingError::MalformedResponse { .. } => "malformed_response",
            EmbeddingError::Timeout { .. } => "timeout",
            EmbeddingError::Exhausted { .. } => "exhausted",
        }
    }
}
