use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::core::TagError;

/// Wraps [`TagError`] so handlers can use `?` and still produce JSON errors.
#[derive(Debug)]
pub struct HttpError(pub TagError);

impl IntoResponse for HttpError {
    fn into_response(self) -> axum::response::Response {
        match self.0 {
            TagError::MissingUrl | TagError::InvalidUrl => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": self.0.to_string()})),
            ),
            // The cause stays in the logs; clients only get a generic message.
            TagError::Fetch(ref err) => {
                tracing::error!("extract-tags error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "Failed to fetch or parse video page"})),
                )
            }
        }
        .into_response()
    }
}

impl<E> From<E> for HttpError
where
    E: Into<TagError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
