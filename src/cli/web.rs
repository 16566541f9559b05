use anyhow::Result;
use std::sync::Arc;

use crate::config::Config;
use crate::web::AppState;

pub async fn handle_web_command(
    config: &Config,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);

    let engine = super::build_engine(config).await?;
    let state = AppState {
        engine: Arc::new(engine),
        store_path: config.store.path.clone(),
        default_k: config.search.default_k,
        max_k: config.search.max_k,
    };

    crate::web::run_server(&host, port, state).await
}
