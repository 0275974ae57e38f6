use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use yt_tags::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("yt_tags=info,tower_http=info")),
        )
        .init();

    // Parse command line arguments
    let cli = Cli::parse();

    info!("Starting yt-tags v{}", env!("CARGO_PKG_VERSION"));

    // Handle the command
    cli.run().await?;

    Ok(())
}
