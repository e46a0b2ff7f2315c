use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

/// Single-value cache with a fixed time-to-live and an explicit
/// invalidation hook. Used for rarely-changing reference data (the venue
/// listing) so the read path does not hit the store on every request.
pub struct TtlCache<T> {
    ttl: Duration,
    slot: RwLock<Option<Entry<T>>>,
}

struct Entry<T> {
    value: Arc<T>,
    loaded_at: Instant,
}

impl<T> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
        }
    }

    /// Returns the cached value, or `None` when empty or past its TTL.
    pub async fn get(&self) -> Option<Arc<T>> {
        let slot = self.slot.read().await;
        let entry = slot.as_ref()?;
        if entry.loaded_at.elapsed() >= self.ttl {
            return None;
        }
        Some(Arc::clone(&entry.value))
    }

    /// Replaces the cached value and restarts its TTL.
    pub async fn put(&self, value: T) -> Arc<T> {
        let value = Arc::new(value);
        let mut slot = self.slot.write().await;
        *slot = Some(Entry {
            value: Arc::clone(&value),
            loaded_at: Instant::now(),
        });
        value
    }

    pub async fn invalidate(&self) {
        let mut slot = self.slot.write().await;
        *slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_value_within_ttl() {
        let cache = TtlCache::new(Duration::from_secs(60));
        assert!(cache.get().await.is_none());
        cache.put(vec![1, 2, 3]).await;
        assert_eq!(*cache.get().await.unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn expires_after_ttl() {
        let cache = TtlCache::new(Duration::from_millis(20));
        cache.put("venues").await;
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert!(cache.get().await.is_none());
    }

    #[tokio::test]
    async fn invalidation_empties_the_cache() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.put("venues").await;
        cache.invalidate().await;
        assert!(cache.get().await.is_none());
    }

    #[tokio::test]
    async fn put_restarts_the_ttl() {
        let cache = TtlCache::new(Duration::from_millis(50));
        cache.put(1).await;
        tokio::time::sleep(Duration::from_millis(30)).await;
        cache.put(2).await;
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(*cache.get().await.unwrap(), 2);
    }
}
