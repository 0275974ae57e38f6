use thiserror::Error;

/// Failure while retrieving a page from the upstream host.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("upstream responded with HTTP {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

impl FetchError {
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Transport(err)
        }
    }

    pub(crate) fn from_body(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Body(err)
        }
    }
}

/// Errors that cross the boundary between the tag service and its callers.
#[derive(Debug, Error)]
pub enum TagError {
    #[error("Missing url query param")]
    MissingUrl,

    #[error("Invalid YouTube URL")]
    InvalidUrl,

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
