pub mod error;
pub mod rate_limit;

use anyhow::Result;
use axum::{
    extract::{Query, State},
    middleware,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::core::{ExtractionResult, HttpFetcher, MemoryCache, TagError, TagService};
pub use error::HttpError;
pub use rate_limit::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TagService>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractParams {
    pub url: Option<String>,
}

/// JSON envelope returned by `/extract-tags`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagsResponse {
    pub tags: Vec<String>,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<ExtractionResult> for TagsResponse {
    fn from(result: ExtractionResult) -> Self {
        let message = result.tags.is_empty().then(|| "No tags found".to_string());
        Self {
            source: result.provenance.source().to_string(),
            tags: result.tags.into_vec(),
            message,
        }
    }
}

async fn extract_tags(
    State(state): State<AppState>,
    Query(params): Query<ExtractParams>,
) -> Result<Json<TagsResponse>, HttpError> {
    let url = params.url.ok_or(TagError::MissingUrl)?;
    let result = state.service.extract_tags(&url).await?;
    Ok(Json(result.into()))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({"ok": true}))
}

pub fn router(state: AppState, limiter: Arc<RateLimiter>) -> Router {
    let limited = Router::new()
        .route("/extract-tags", get(extract_tags))
        .route_layer(middleware::from_fn_with_state(limiter, rate_limit::limit));

    Router::new()
        .route("/health", get(health))
        .merge(limited)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    tower_http::trace::DefaultMakeSpan::new().level(tracing::Level::INFO),
                )
                .on_response(
                    tower_http::trace::DefaultOnResponse::new().level(tracing::Level::INFO),
                ),
        )
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutting down");
}

/// Builds the service from `config` and serves until Ctrl-C or SIGTERM.
pub async fn serve(config: Config) -> Result<()> {
    let fetcher = Arc::new(HttpFetcher::from_config(&config)?);
    let cache = Arc::new(MemoryCache::new(config.cache_ttl()));
    let sweeper = cache.spawn_sweeper(config.cache_sweep_interval());

    let state = AppState {
        service: Arc::new(TagService::new(fetcher, cache)),
    };
    let limiter = Arc::new(RateLimiter::new(
        config.rate_limit_window(),
        config.rate_limit_max,
    ));
    let limiter_sweeper = limiter.spawn_sweeper();
    let app = router(state, limiter);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);

    let served = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await;

    sweeper.abort();
    limiter_sweeper.abort();
    served?;
    Ok(())
}
