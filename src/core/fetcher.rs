use async_trait::async_trait;
use std::time::Duration;
use url::Url;

use crate::config::Config;
use crate::core::FetchError;

/// Retrieves the raw markup of a page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &Url) -> Result<String, FetchError>;
}

/// Single-shot GET fetcher backed by `reqwest`. No retries.
pub struct HttpFetcher {
    client: reqwest::Client,
    accept_language: String,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, accept_language: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            accept_language: accept_language.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::new(
            &config.user_agent,
            &config.accept_language,
            Duration::from_secs(config.fetch_timeout_secs),
        )
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url.as_str())
            .header(
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header("Accept-Language", &self.accept_language)
            .send()
            .await
            .map_err(FetchError::from_send)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let html = response.text().await.map_err(FetchError::from_body)?;
        tracing::debug!("Fetched {} bytes from {}", html.len(), url);

        Ok(html)
    }
}
