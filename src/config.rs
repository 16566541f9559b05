//! Configuration file management for poster-search
//!
//! Values are read from `~/.poster-search/config.toml` (or the file named by
//! `POSTER_SEARCH_CONFIG`), then overridden by environment variables.
//! Command-line flags are applied last by the CLI.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::embedding::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::embedding::{BackoffPolicy, OpenAiConfig};
use crate::env::{apis as env_apis, config as env_config, store as env_store};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub embedding: EmbeddingSettings,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("embeddings/poster_embeddings.json"),
        }
    }
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct EmbeddingSettings {
    pub model: String,
    pub base_url: String,
    pub api_key: Option<String>,
    pub request_timeout_secs: u64,
    pub deadline_secs: u64,
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            request_timeout_secs: 30,
            deadline_secs: 120,
            max_attempts: 6,
            base_delay_ms: 1_000,
            max_delay_ms: 60_000,
        }
    }
}

impl fmt::Debug for EmbeddingSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddingSettings")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("deadline_secs", &self.deadline_secs)
            .field("max_attempts", &self.max_attempts)
            .field("base_delay_ms", &self.base_delay_ms)
            .field("max_delay_ms", &self.max_delay_ms)
            .finish()
    }
}

impl EmbeddingSettings {
    pub fn backoff_policy(&self) -> BackoffPolicy {
        BackoffPolicy::new(self.max_attempts)
            .with_base_delay(Duration::from_millis(self.base_delay_ms))
            .with_max_delay(Duration::from_millis(self.max_delay_ms))
    }

    pub fn deadline(&self) -> Duration {
        Duration::from_secs(self.deadline_secs)
    }

    /// Provider settings; fails when no API key is configured.
    pub fn openai_config(&self) -> Result<OpenAiConfig> {
        let api_key = self
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .with_context(|| {
                format!(
                    "{} is not set. Please set it with: export {}=\"your-api-key\"",
                    env_apis::OPENAI_API_KEY,
                    env_apis::OPENAI_API_KEY
                )
            })?;

        Ok(OpenAiConfig::new(api_key)
            .with_base_url(self.base_url.clone())
            .with_model(self.model.clone())
            .with_request_timeout(Duration::from_secs(self.request_timeout_secs)))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub default_k: usize,
    pub max_k: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_k: 5,
            max_k: 20,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Config {
    /// Get the default config file path (~/.poster-search/config.toml)
    pub fn default_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Could not find home directory")?;
        Ok(home_dir.join(".poster-search").join("config.toml"))
    }

    /// Load configuration from the default location with env overrides.
    /// A missing default file yields the built-in defaults.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(env_config::CONFIG_PATH) {
            Ok(path) => Self::read_file(Path::new(&path))?,
            Err(_) => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::read_file(&path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit file with env overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::read_file(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(env_apis::OPENAI_API_KEY) {
            self.embedding.api_key = Some(key);
        }
        if let Ok(url) = std::env::var(env_apis::EMBEDDING_BASE_URL) {
            self.embedding.base_url = url;
        }
        if let Ok(model) = std::env::var(env_apis::EMBEDDING_MODEL) {
            self.embedding.model = model;
        }
        if let Ok(path) = std::env::var(env_store::STORE_PATH) {
            self.store.path = PathBuf::from(path);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.embedding.model.trim().is_empty() {
            bail!("embedding.model cannot be empty");
        }
        if self.embedding.max_attempts == 0 {
            bail!("embedding.max_attempts must be at least 1");
        }
        if self.embedding.deadline_secs == 0 {
            bail!("embedding.deadline_secs must be positive");
        }
        if self.embedding.base_delay_ms == 0 {
            bail!("embedding.base_delay_ms must be positive");
        }
        if self.embedding.max_delay_ms < self.embedding.base_delay_ms {
            bail!("embedding.max_delay_ms must not be below embedding.base_delay_ms");
        }
        if self.search.default_k == 0 || self.search.default_k > self.search.max_k {
            bail!(
                "search.default_k must be between 1 and search.max_k ({})",
                self.search.max_k
            );
        }
        Ok(())
    }
}
