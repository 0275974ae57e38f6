use url::Url;

use crate::core::TagError;

/// Hosts the service is willing to fetch from. Subdomains are accepted.
pub const ALLOWED_HOSTS: [&str; 2] = ["youtube.com", "youtu.be"];

fn host_allowed(host: &str) -> bool {
    let host = host.trim_end_matches('.').to_ascii_lowercase();
    ALLOWED_HOSTS.iter().any(|allowed| {
        host == *allowed
            || host
                .strip_suffix(allowed)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

/// Parses `url` and checks that it points at a YouTube host over http(s).
///
/// This is the only thing standing between callers and arbitrary outbound
/// requests, so anything that fails to parse is rejected.
pub fn parse_source(url: &str) -> Result<Url, TagError> {
    let parsed = Url::parse(url).map_err(|_| TagError::InvalidUrl)?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(TagError::InvalidUrl);
    }

    match parsed.host_str() {
        Some(host) if host_allowed(host) => Ok(parsed),
        _ => Err(TagError::InvalidUrl),
    }
}

pub fn is_valid_source(url: &str) -> bool {
    parse_source(url).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_youtube_hosts() {
        assert!(is_valid_source("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_valid_source("https://youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_valid_source("https://m.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_valid_source("https://youtu.be/dQw4w9WgXcQ"));
        assert!(is_valid_source("http://WWW.YouTube.com/shorts/abc"));
    }

    #[test]
    fn test_rejects_other_hosts() {
        assert!(!is_valid_source("https://vimeo.com/123"));
        assert!(!is_valid_source("https://example.com"));
        assert!(!is_valid_source("https://notyoutube.com/watch?v=x"));
        assert!(!is_valid_source("https://youtube.com.evil.com/watch?v=x"));
        assert!(!is_valid_source("https://youtu.be.example.org/x"));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(!is_valid_source("not a url"));
        assert!(!is_valid_source(""));
        assert!(!is_valid_source("youtube.com/watch?v=x"));
    }

    #[test]
    fn test_rejects_non_http_schemes() {
        assert!(!is_valid_source("ftp://youtube.com/file"));
        assert!(!is_valid_source("file:///etc/passwd"));
    }
}
