use scraper::{Html, Selector};

use crate::core::TagStrategy;
use crate::utils::{clean_tags, split_keywords};

fn select_contents(html: &str, selector: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };
    let document = Html::parse_document(html);

    document
        .select(&selector)
        .filter_map(|el| el.value().attr("content"))
        .map(str::to_string)
        .collect()
}

/// `<meta name="keywords" content="a, b, c">`. Only the first such element counts.
pub struct MetaKeywordsStrategy;

impl TagStrategy for MetaKeywordsStrategy {
    fn name(&self) -> &'static str {
        "meta-keywords"
    }

    fn extract(&self, html: &str) -> Vec<String> {
        let Ok(selector) = Selector::parse(r#"meta[name="keywords"]"#) else {
            return Vec::new();
        };
        let document = Html::parse_document(html);

        document
            .select(&selector)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(split_keywords)
            .unwrap_or_default()
    }
}

/// Every `<meta property="og:video:tag">` contributes one tag.
pub struct OgVideoTagStrategy;

impl TagStrategy for OgVideoTagStrategy {
    fn name(&self) -> &'static str {
        "og-video-tag"
    }

    fn extract(&self, html: &str) -> Vec<String> {
        clean_tags(select_contents(html, r#"meta[property="og:video:tag"]"#))
    }
}
