use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::core::{HttpFetcher, MemoryCache, TagService};
use crate::server::{self, TagsResponse};

#[derive(Parser)]
#[command(name = "yt-tags")]
#[command(about = "Extract the tags of a YouTube video from its watch page")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true, env = "YT_TAGS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve {
        /// Port to listen on, overrides the config file and PORT
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Extract tags for a single URL and print the JSON response
    Extract {
        /// Video URL
        #[arg(value_name = "URL")]
        url: String,
    },
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        let mut config = Config::load(self.config.as_deref())?;

        match &self.command {
            None => server::serve(config).await,
            Some(Command::Serve { port }) => {
                if let Some(port) = port {
                    config.port = *port;
                }
                server::serve(config).await
            }
            Some(Command::Extract { url }) => {
                let service = TagService::new(
                    Arc::new(HttpFetcher::from_config(&config)?),
                    Arc::new(MemoryCache::new(config.cache_ttl())),
                );
                let result = service.extract_tags(url).await?;
                let response = TagsResponse::from(result);
                println!("{}", serde_json::to_string_pretty(&response)?);
                Ok(())
            }
        }
    }
}
