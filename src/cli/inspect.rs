use anyhow::Result;

use crate::config::Config;

pub async fn handle_inspect_command(config: &Config) -> Result<()> {
    let store = super::load_store(config).await?;
    let stats = store.stats();

    println!("Store: {}", config.store.path.display());
    println!("  Model: {}", stats.model);
    println!("  Dimension: {}", stats.dimension);
    println!("  Documents: {}", stats.documents);

    let zero_vectors = store.iter().filter(|entry| entry.norm == 0.0).count();
    if zero_vectors > 0 {
        println!("  Zero vectors: {zero_vectors} (always score 0.0)");
    }

    println!();
    for entry in store.iter().take(5) {
        println!(
            "  [{}] {} ({})",
            entry.index, entry.metadata.title, entry.metadata.id
        );
    }
    if store.len() > 5 {
        println!("  ... {} more", store.len() - 5);
    }

    Ok(())
}
