use axum::{
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use dashmap::DashMap;
use serde_json::json;
use std::collections::VecDeque;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

/// Per-client sliding window: at most `max` requests in any `window`.
pub struct RateLimiter {
    hits: DashMap<IpAddr, VecDeque<Instant>>,
    window: Duration,
    max: usize,
}

impl RateLimiter {
    pub fn new(window: Duration, max: usize) -> Self {
        Self {
            hits: DashMap::new(),
            window,
            max,
        }
    }

    /// Records a request from `client` and reports whether it is allowed.
    /// Rejected requests are not recorded.
    pub fn check(&self, client: IpAddr) -> bool {
        self.check_at(client, Instant::now())
    }

    fn check_at(&self, client: IpAddr, now: Instant) -> bool {
        let mut hits = self.hits.entry(client).or_default();
        while let Some(&oldest) = hits.front() {
            if now.duration_since(oldest) >= self.window {
                hits.pop_front();
            } else {
                break;
            }
        }

        if hits.len() >= self.max {
            return false;
        }
        hits.push_back(now);
        true
    }

    pub fn tracked_clients(&self) -> usize {
        self.hits.len()
    }

    /// Forgets clients whose most recent request has left the window.
    pub fn purge_idle(&self) -> usize {
        self.purge_idle_at(Instant::now())
    }

    fn purge_idle_at(&self, now: Instant) -> usize {
        let before = self.hits.len();
        self.hits.retain(|_, hits| {
            hits.back()
                .is_some_and(|&last| now.duration_since(last) < self.window)
        });
        before.saturating_sub(self.hits.len())
    }

    /// Runs [`RateLimiter::purge_idle`] once per window until aborted.
    pub fn spawn_sweeper(self: &Arc<Self>) -> JoinHandle<()> {
        let limiter = Arc::clone(self);
        let every = self.window.max(Duration::from_millis(1));
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            interval.tick().await;
            loop {
                interval.tick().await;
                let removed = limiter.purge_idle();
                if removed > 0 {
                    tracing::debug!("Rate limiter forgot {} idle clients", removed);
                }
            }
        })
    }
}

pub async fn limit(
    State(limiter): State<Arc<RateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    if !limiter.check(client) {
        tracing::warn!("Rate limit exceeded for {}", client);
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({"error": "Too many requests, slow down"})),
        )
            .into_response();
    }

    next.run(request).await
}
