pub mod cli;
pub mod embedding;
pub mod engine;
pub mod models;
pub mod ranking;
pub mod store;
pub mod web;

pub mod config;
pub mod env;
pub mod error;
pub mod logging;

pub use config::Config;
pub use engine::RetrievalEngine;
pub use error::SearchError;
pub use logging::{init_logging, LoggingConfig};
