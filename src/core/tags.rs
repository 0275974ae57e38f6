use serde::{Deserialize, Serialize};

use crate::utils::{clean_tags, dedup_preserving_order};

/// Upper bound on the number of tags returned for a single video.
pub const MAX_TAGS: usize = 200;

/// Ordered, deduplicated list of non-empty tags, capped at [`MAX_TAGS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagList(Vec<String>);

impl TagList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds a list from raw strategy output: trims, drops blanks, removes
    /// duplicates keeping the first occurrence, then truncates.
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags = dedup_preserving_order(clean_tags(raw));
        tags.truncate(MAX_TAGS);
        Self(tags)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// Where an [`ExtractionResult`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Cache,
    Scrape,
    NoMatch,
}

impl Provenance {
    /// Value reported in the `source` field of the response envelope.
    pub fn source(&self) -> &'static str {
        match self {
            Provenance::Cache => "cache",
            Provenance::Scrape | Provenance::NoMatch => "scrape",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub tags: TagList,
    pub provenance: Provenance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_cleans_and_dedups() {
        let tags = TagList::from_raw(["  rust ", "", "async", "rust", "   ", "Rust"]);
        assert_eq!(tags.as_slice(), ["rust", "async", "Rust"]);
    }

    #[test]
    fn test_from_raw_truncates() {
        let raw: Vec<String> = (0..500).map(|i| format!("tag{}", i)).collect();
        let tags = TagList::from_raw(&raw);
        assert_eq!(tags.len(), MAX_TAGS);
        assert_eq!(tags.as_slice()[0], "tag0");
        assert_eq!(tags.as_slice()[MAX_TAGS - 1], "tag199");
    }

    #[test]
    fn test_dedup_happens_before_truncation() {
        let mut raw = vec!["same".to_string(); 300];
        raw.push("other".to_string());
        let tags = TagList::from_raw(raw);
        assert_eq!(tags.as_slice(), ["same", "other"]);
    }

    #[test]
    fn test_provenance_source() {
        assert_eq!(Provenance::Cache.source(), "cache");
        assert_eq!(Provenance::Scrape.source(), "scrape");
        assert_eq!(Provenance::NoMatch.source(), "scrape");
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let tags = TagList::from_raw(["a", "b"]);
        assert_eq!(serde_json::to_string(&tags).unwrap(), r#"["a","b"]"#);
    }
}
