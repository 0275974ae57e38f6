use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use serde_json::Value;

use crate::core::TagStrategy;
use crate::utils::string_tags;

static KEYWORDS_ARRAY: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r#""keywords"\s*:\s*(\[[\s\S]*?\])"#).ok());

/// Last resort: any inline `<script>` carrying a `"keywords": [...]` literal.
///
/// The array capture stops at the first `]`, so arrays containing nested
/// arrays or a literal `]` inside a string are not recovered.
pub struct InlineScriptStrategy;

impl InlineScriptStrategy {
    fn parse_block(re: &Regex, script: &str) -> Option<Vec<String>> {
        let captures = re.captures(script)?;
        let array = captures.get(1)?.as_str();
        match serde_json::from_str::<Vec<Value>>(array) {
            Ok(values) => Some(string_tags(&values)),
            Err(e) => {
                tracing::debug!("Skipping script with unparseable keywords array: {}", e);
                None
            }
        }
    }
}

impl TagStrategy for InlineScriptStrategy {
    fn name(&self) -> &'static str {
        "inline-script"
    }

    fn extract(&self, html: &str) -> Vec<String> {
        let Some(re) = KEYWORDS_ARRAY.as_ref() else {
            return Vec::new();
        };
        let Ok(selector) = Selector::parse("script:not([src])") else {
            return Vec::new();
        };
        let document = Html::parse_document(html);

        document
            .select(&selector)
            .map(|script| script.text().collect::<String>())
            .filter(|text| text.contains("keywords"))
            .find_map(|text| Self::parse_block(re, &text))
            .unwrap_or_default()
    }
}
