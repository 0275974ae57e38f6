use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::core::TagStrategy;
use crate::utils::string_tags;

// Both assignment forms YouTube has used for the embedded player config.
// The capture ends at the first `};`, which is good enough for the object
// literal as it is served; anything that fails to parse is skipped.
static PLAYER_RESPONSE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r#"ytInitialPlayerResponse\s*=\s*(\{[\s\S]*?\});"#,
        r#"window\["ytInitialPlayerResponse"\]\s*=\s*(\{[\s\S]*?\});"#,
    ]
    .iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

/// Reads `videoDetails.keywords` from the `ytInitialPlayerResponse` blob.
pub struct PlayerResponseStrategy;

impl PlayerResponseStrategy {
    fn keywords(player_response: &Value) -> Vec<String> {
        let Some(keywords) = player_response
            .get("videoDetails")
            .and_then(|details| details.get("keywords"))
            .and_then(|v| v.as_array())
        else {
            return Vec::new();
        };

        string_tags(keywords)
    }
}

impl TagStrategy for PlayerResponseStrategy {
    fn name(&self) -> &'static str {
        "player-response"
    }

    fn extract(&self, html: &str) -> Vec<String> {
        for re in PLAYER_RESPONSE_PATTERNS.iter() {
            let Some(captures) = re.captures(html) else {
                continue;
            };
            let Some(json_str) = captures.get(1) else {
                continue;
            };

            match serde_json::from_str::<Value>(json_str.as_str()) {
                Ok(parsed) => {
                    let tags = Self::keywords(&parsed);
                    if !tags.is_empty() {
                        return tags;
                    }
                }
                Err(e) => {
                    tracing::debug!("Discarding unparseable ytInitialPlayerResponse: {}", e);
                }
            }
        }

        Vec::new()
    }
}
