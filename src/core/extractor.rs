use crate::core::TagList;
use crate::extractors::{
    InlineScriptStrategy, MetaKeywordsStrategy, OgVideoTagStrategy, PlayerResponseStrategy,
};

/// One heuristic for locating tags in raw page markup.
///
/// Implementations must be pure: the same markup always yields the same
/// tags, and internal parse failures produce an empty list instead of an error.
pub trait TagStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn extract(&self, html: &str) -> Vec<String>;
}

/// Runs strategies in priority order and keeps the first non-empty result.
pub struct ExtractionPipeline {
    pub strategies: Vec<Box<dyn TagStrategy>>,
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionPipeline {
    /// Pipeline with the built-in strategies, most structured source first.
    pub fn new() -> Self {
        Self {
            strategies: vec![
                Box::new(MetaKeywordsStrategy),
                Box::new(PlayerResponseStrategy),
                Box::new(OgVideoTagStrategy),
                Box::new(InlineScriptStrategy),
            ],
        }
    }

    pub fn empty() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    pub fn register_strategy(&mut self, strategy: Box<dyn TagStrategy>) {
        self.strategies.push(strategy);
    }

    pub fn extract(&self, html: &str) -> TagList {
        for strategy in &self.strategies {
            let tags = TagList::from_raw(strategy.extract(html));
            if !tags.is_empty() {
                tracing::debug!("Strategy {} produced {} tags", strategy.name(), tags.len());
                return tags;
            }
            tracing::debug!("Strategy {} found nothing", strategy.name());
        }

        TagList::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str, Vec<&'static str>);

    impl TagStrategy for Fixed {
        fn name(&self) -> &'static str {
            self.0
        }

        fn extract(&self, _html: &str) -> Vec<String> {
            self.1.iter().map(|s| s.to_string()).collect()
        }
    }

    #[test]
    fn test_first_non_empty_strategy_wins() {
        let mut pipeline = ExtractionPipeline::empty();
        pipeline.register_strategy(Box::new(Fixed("blank", vec!["  ", ""])));
        pipeline.register_strategy(Box::new(Fixed("second", vec!["x", "x", "y"])));
        pipeline.register_strategy(Box::new(Fixed("third", vec!["z"])));

        assert_eq!(pipeline.extract("").as_slice(), ["x", "y"]);
    }

    #[test]
    fn test_empty_pipeline_yields_nothing() {
        assert!(ExtractionPipeline::empty().extract("<html></html>").is_empty());
    }

    #[test]
    fn test_default_strategy_order() {
        let names: Vec<_> = ExtractionPipeline::new()
            .strategies
            .iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(
            names,
            ["meta-keywords", "player-response", "og-video-tag", "inline-script"]
        );
    }
}
