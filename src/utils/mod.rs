use std::collections::HashSet;

/// Trims every entry and drops the ones that end up empty.
pub fn clean_tags<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Cleans a JSON keyword array. Any non-string entry makes the whole array
/// unusable and yields nothing.
pub fn string_tags(values: &[serde_json::Value]) -> Vec<String> {
    let strings: Option<Vec<&str>> = values.iter().map(|v| v.as_str()).collect();
    strings.map(clean_tags).unwrap_or_default()
}

/// Splits a comma separated keyword attribute into cleaned tags.
pub fn split_keywords(content: &str) -> Vec<String> {
    clean_tags(content.split(','))
}

/// Removes exact (case-sensitive) duplicates, keeping first-seen order.
pub fn dedup_preserving_order(tags: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(tags.len());
    tags.into_iter()
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}
