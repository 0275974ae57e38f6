use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

use crate::core::TagList;

/// Keyed store for finished extraction results.
#[async_trait]
pub trait ResultCache: Send + Sync {
    async fn get(&self, key: &str) -> Option<TagList>;
    async fn set(&self, key: &str, tags: TagList);
}

#[derive(Debug, Clone)]
struct CacheEntry {
    tags: TagList,
    inserted: Instant,
}

/// In-memory cache with a fixed per-entry TTL counted from insertion.
///
/// Expired entries are ignored (and removed) on read; [`MemoryCache::spawn_sweeper`]
/// additionally clears them in the background. There is no capacity bound.
pub struct MemoryCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl MemoryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_fresh(&self, entry: &CacheEntry, now: Instant) -> bool {
        now.duration_since(entry.inserted) < self.ttl
    }

    /// Drops every expired entry and returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| self.is_fresh(entry, now));
        before.saturating_sub(self.entries.len())
    }

    /// Periodically purges expired entries until the handle is aborted.
    /// Intervals shorter than a millisecond are raised to one.
    pub fn spawn_sweeper(self: &Arc<Self>, every: Duration) -> JoinHandle<()> {
        let cache = Arc::clone(self);
        let every = every.max(Duration::from_millis(1));
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            interval.tick().await;
            loop {
                interval.tick().await;
                let removed = cache.purge_expired();
                if removed > 0 {
                    tracing::debug!("Cache sweep removed {} expired entries", removed);
                }
            }
        })
    }
}

#[async_trait]
impl ResultCache for MemoryCache {
    async fn get(&self, key: &str) -> Option<TagList> {
        let now = Instant::now();
        if let Some(entry) = self.entries.get(key) {
            if self.is_fresh(&entry, now) {
                return Some(entry.tags.clone());
            }
        }
        self.entries
            .remove_if(key, |_, entry| !self.is_fresh(entry, now));
        None
    }

    async fn set(&self, key: &str, tags: TagList) {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                tags,
                inserted: Instant::now(),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip() {
        let cache = MemoryCache::new(Duration::from_secs(60));
        let tags = TagList::from_raw(["a", "b"]);
        cache.set("key", tags.clone()).await;
        assert_eq!(cache.get("key").await, Some(tags));
        assert_eq!(cache.get("other").await, None);
    }

    #[tokio::test]
    async fn test_empty_list_is_cached() {
        let cache = MemoryCache::new(Duration::from_secs(60));
        cache.set("key", TagList::new()).await;
        assert_eq!(cache.get("key").await, Some(TagList::new()));
    }

    #[tokio::test]
    async fn test_entries_expire() {
        let cache = MemoryCache::new(Duration::from_millis(20));
        cache.set("key", TagList::from_raw(["a"])).await;
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert_eq!(cache.get("key").await, None);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_purge_expired() {
        let cache = MemoryCache::new(Duration::from_millis(20));
        cache.set("old", TagList::from_raw(["a"])).await;
        tokio::time::sleep(Duration::from_millis(40)).await;
        cache.set("new", TagList::from_raw(["b"])).await;
        assert_eq!(cache.purge_expired(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_sweeper_clears_entries() {
        let cache = Arc::new(MemoryCache::new(Duration::from_millis(10)));
        cache.set("key", TagList::from_raw(["a"])).await;
        let handle = cache.spawn_sweeper(Duration::from_millis(15));
        tokio::time::sleep(Duration::from_millis(80)).await;
        assert!(cache.is_empty());
        handle.abort();
    }

    #[tokio::test]
    async fn test_zero_sweep_interval_keeps_running() {
        let cache = Arc::new(MemoryCache::new(Duration::from_millis(10)));
        cache.set("key", TagList::from_raw(["a"])).await;
        let handle = cache.spawn_sweeper(Duration::ZERO);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!handle.is_finished());
        assert!(cache.is_empty());
        handle.abort();
    }

    #[tokio::test]
    async fn test_key_is_exact_url() {
        let cache = MemoryCache::new(Duration::from_secs(60));
        cache
            .set("https://youtu.be/abc", TagList::from_raw(["a"]))
            .await;
        assert_eq!(cache.get("https://www.youtube.com/watch?v=abc").await, None);
    }
}
