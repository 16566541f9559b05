//! Environment variable constants used throughout the application
//!
//! This module centralizes all environment variable names so configuration
//! overrides stay consistent across the CLI, the web server and tests.

/// Logging configuration
pub mod logging {
    /// Log level configuration (e.g., "debug", "info", "warn", "error")
    pub const LOG_LEVEL: &str = "POSTER_SEARCH_LOG_LEVEL";

    /// Log file path for file-based logging
    pub const LOG_FILE: &str = "POSTER_SEARCH_LOG_FILE";

    /// Emit logs as JSON lines when set to "1" or "true"
    pub const LOG_JSON: &str = "POSTER_SEARCH_LOG_JSON";

    /// Disable colored output (follows the NO_COLOR standard)
    pub const NO_COLOR: &str = "NO_COLOR";
}

/// Embedding provider configuration
pub mod apis {
    /// OpenAI API key used for query embeddings
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

    /// Base URL of the OpenAI-compatible embeddings endpoint
    pub const EMBEDDING_BASE_URL: &str = "POSTER_SEARCH_EMBEDDING_BASE_URL";

    /// Embedding model identifier
    pub const EMBEDDING_MODEL: &str = "POSTER_SEARCH_EMBEDDING_MODEL";
}

/// Corpus store configuration
pub mod store {
    /// Path to the precomputed embedding artifact
    pub const STORE_PATH: &str = "POSTER_SEARCH_STORE";
}

/// Configuration file location
pub mod config {
    /// Explicit config file path (overrides ~/.poster-search/config.toml)
    pub const CONFIG_PATH: &str = "POSTER_SEARCH_CONFIG";
}
