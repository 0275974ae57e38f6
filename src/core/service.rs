use std::sync::Arc;

use crate::core::{
    parse_source, ExtractionPipeline, ExtractionResult, PageFetcher, Provenance, ResultCache,
    TagError,
};

/// Validates, consults the cache, fetches and extracts.
pub struct TagService {
    fetcher: Arc<dyn PageFetcher>,
    cache: Arc<dyn ResultCache>,
    pipeline: ExtractionPipeline,
}

impl TagService {
    pub fn new(fetcher: Arc<dyn PageFetcher>, cache: Arc<dyn ResultCache>) -> Self {
        Self::with_pipeline(fetcher, cache, ExtractionPipeline::new())
    }

    pub fn with_pipeline(
        fetcher: Arc<dyn PageFetcher>,
        cache: Arc<dyn ResultCache>,
        pipeline: ExtractionPipeline,
    ) -> Self {
        Self {
            fetcher,
            cache,
            pipeline,
        }
    }

    /// Returns the tags for `url`.
    ///
    /// The cache key is the caller's string as given. Fetch failures are
    /// returned as-is and never cached; empty extractions are cached.
    pub async fn extract_tags(&self, url: &str) -> Result<ExtractionResult, TagError> {
        if url.trim().is_empty() {
            return Err(TagError::MissingUrl);
        }
        let source = parse_source(url)?;

        if let Some(tags) = self.cache.get(url).await {
            tracing::debug!("Cache hit for {}", url);
            return Ok(ExtractionResult {
                tags,
                provenance: Provenance::Cache,
            });
        }

        let html = self.fetcher.fetch_page(&source).await?;
        let tags = self.pipeline.extract(&html);
        self.cache.set(url, tags.clone()).await;

        let provenance = if tags.is_empty() {
            Provenance::NoMatch
        } else {
            Provenance::Scrape
        };
        tracing::info!("Extracted {} tags from {}", tags.len(), url);

        Ok(ExtractionResult { tags, provenance })
    }
}
