use anyhow::Result;
use rand::RngExt;
use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

struct StoredEntry<V> {
    value: V,
    expires_at: Instant,
}

/// In-memory key/value store where every entry carries its own expiry.
///
/// Expired entries are kept until overwritten so callers can fall back to
/// stale data when a refresh fails.
pub struct TtlCache<K, V> {
    entries: RwLock<HashMap<K, StoredEntry<V>>>,
    ttl: Duration,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
{
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Stores a value that stays fresh for `ttl`.
    #[tracing::instrument(name = "put_cache", level = "debug", skip(self, value))]
    async fn store(&self, key: K, value: V, ttl: Duration) {
        let expires_at = Instant::now()
            .checked_add(ttl)
            .unwrap_or_else(|| Instant::now() + Duration::from_secs(86_400 * 365));
        self.entries
            .write()
            .await
            .insert(key, StoredEntry { value, expires_at });
    }

    /// Retrieves a value if it exists and has not expired.
    /// Returns `None` for cache misses or expired entries.
    #[tracing::instrument(name = "query_cache", level = "debug", skip(self))]
    pub async fn get(&self, key: &K) -> Option<V> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some(entry) if Instant::now() < entry.expires_at => {
                tracing::debug!("Key found and still fresh");
                Some(entry.value.clone())
            }
            Some(_) => {
                tracing::debug!("Key found but expired");
                None
            }
            None => {
                tracing::debug!("Key not found");
                None
            }
        }
    }

    /// Retrieves a value regardless of its expiry.
    pub async fn get_stale(&self, key: &K) -> Option<V> {
        self.entries
            .read()
            .await
            .get(key)
            .map(|entry| entry.value.clone())
    }

    /// Returns the fresh cached value or runs `fetch` and caches its result.
    ///
    /// The stored TTL is jittered by +/-10% so entries filled together do not
    /// all expire in the same instant. Errors from `fetch` are not cached.
    pub async fn get_or_fetch<F, Fut>(&self, key: K, fetch: F) -> Result<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>>,
    {
        if let Some(value) = self.get(&key).await {
            return Ok(value);
        }
        let value = fetch().await?;
        let ttl = self.ttl.mul_f64(rand::rng().random_range(0.9..1.1));
        self.store(key, value.clone(), ttl).await;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_store_and_get() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.store("tokyo".to_string(), 42, cache.ttl).await;
        assert_eq!(cache.get(&"tokyo".to_string()).await, Some(42));
        assert_eq!(cache.get(&"osaka".to_string()).await, None);
    }

    #[tokio::test]
    async fn test_expired_entry_is_a_miss_but_stale_readable() {
        let cache = TtlCache::new(Duration::ZERO);
        cache.store("rate", 0.0089, Duration::ZERO).await;
        assert_eq!(cache.get(&"rate").await, None);
        assert_eq!(cache.get_stale(&"rate").await, Some(0.0089));
    }

    #[tokio::test]
    async fn test_get_or_fetch_only_fetches_once() {
        let cache = TtlCache::new(Duration::from_secs(60));
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let value = cache
                .get_or_fetch("key", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(7)
                })
                .await
                .unwrap();
            assert_eq!(value, 7);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_is_refetched() {
        let cache = TtlCache::new(Duration::ZERO);
        let calls = AtomicUsize::new(0);

        for expected in 1..=2 {
            let value = cache
                .get_or_fetch("key", || async { Ok(calls.fetch_add(1, Ordering::SeqCst) + 1) })
                .await
                .unwrap();
            assert_eq!(value, expected);
        }
    }

    #[tokio::test]
    async fn test_get_or_fetch_does_not_cache_errors() {
        let cache: TtlCache<&str, i32> = TtlCache::new(Duration::from_secs(60));
        let failed = cache
            .get_or_fetch("key", || async { Err(anyhow::anyhow!("upstream down")) })
            .await;
        assert!(failed.is_err());
        assert_eq!(cache.get_stale(&"key").await, None);
    }
}
