use anyhow::{Context, Result};

use crate::config::Config;
use crate::models::SearchResult;

pub async fn handle_search_command(
    config: &Config,
    query: String,
    k: Option<usize>,
    json: bool,
) -> Result<()> {
    let engine = super::build_engine(config).await?;
    let k = k.unwrap_or(config.search.default_k);

    let results = engine
        .search(&query, k)
        .await
        .context("Search failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("Top {} Results for \"{}\":", results.len(), query.trim());
    println!();

    for (rank, result) in results.iter().enumerate() {
        print_result(rank + 1, result);
    }

    Ok(())
}

fn print_result(rank: usize, result: &SearchResult) {
    let doc = &result.metadata;
    let session = &doc.session_info;

    println!("{rank}. {}", doc.title);
    println!("   Similarity: {:.3}", result.similarity);
    println!("   Poster: {} | Authors: {}", doc.poster_number, doc.authors);
    println!(
        "   Session: {} | {} | {} {}",
        session.session_name, session.location, session.date, session.time
    );
    println!("   {}", doc.abstract_preview(200));
    println!();
}
