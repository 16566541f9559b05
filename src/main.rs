use clap::Parser;
use poster_search::cli::Cli;
use poster_search::{init_logging, LoggingConfig};

fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (ignore errors if missing)
    dotenvy::dotenv().ok();

    init_logging(LoggingConfig::from_env())?;

    let cli = Cli::parse();
    cli.run()
}
