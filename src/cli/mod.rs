pub mod inspect;
pub mod query;
pub mod web;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::embedding::{EmbeddingClient, OpenAiProvider};
use crate::engine::RetrievalEngine;
use crate::store::VectorStore;

#[derive(Parser)]
#[command(name = "poster-search")]
#[command(about = "Semantic search over conference posters")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ~/.poster-search/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Embedding artifact to search (overrides the config file)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the poster corpus with a natural language query
    Search {
        /// Search query, e.g. "machine learning in healthcare"
        query: String,
        /// Number of results (default from config, 5)
        #[arg(short, long)]
        k: Option<usize>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Serve the search API over HTTP
    Serve {
        /// Host to bind (default from config)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (default from config)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Validate the embedding artifact and print its summary
    Inspect,
}

impl Cli {
    fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(store) = &self.store {
            config.store.path = store.clone();
        }

        Ok(config)
    }

    pub fn run(self) -> Result<()> {
        let config = self.load_config()?;
        let rt = Runtime::new()?;

        rt.block_on(async {
            match self.command {
                Commands::Search { query, k, json } => {
                    query::handle_search_command(&config, query, k, json).await
                }
                Commands::Serve { host, port } => {
                    web::handle_web_command(&config, host, port).await
                }
                Commands::Inspect => inspect::handle_inspect_command(&config).await,
            }
        })
    }
}

/// Load the configured store and connect it to the configured provider.
pub async fn build_engine(config: &Config) -> Result<RetrievalEngine> {
    let openai = config.embedding.openai_config()?;
    let provider = OpenAiProvider::new(openai).context("Failed to create embedding provider")?;

    let store = load_store(config).await?;

    let client = EmbeddingClient::new(Arc::new(provider), store.dimension())
        .with_policy(config.embedding.backoff_policy())
        .with_deadline(config.embedding.deadline());

    RetrievalEngine::new(client, store).context("Store does not match the embedding client")
}

pub async fn load_store(config: &Config) -> Result<VectorStore> {
    let path = config.store.path.clone();
    let model = config.embedding.model.clone();

    tokio::task::spawn_blocking(move || VectorStore::load(&path, &model))
        .await?
        .with_context(|| {
            format!(
                "Error loading embeddings from {}",
                config.store.path.display()
            )
        })
}
