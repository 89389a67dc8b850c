//! TTL-bounded LRU cache for catalog responses.
//!
//! Keyed by the composite (category, days, status) string. Lookups promote
//! recency; expired entries are dropped lazily on the next lookup for their
//! key. The lock is held only around map access, never across the fetch
//! await, so concurrent misses for one key may fetch twice; the last writer
//! wins and the map stays consistent either way.

use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use lru::LruCache;

use crate::error::Result;
use crate::models::RawEvent;
use crate::services::intent::Query;

pub const DEFAULT_TTL: Duration = Duration::from_secs(300);
pub const DEFAULT_CAPACITY: usize = 100;

struct CacheEntry {
    events: Vec<RawEvent>,
    inserted_at: Instant,
}

pub struct EventCache {
    ttl: Duration,
    entries: Mutex<LruCache<String, CacheEntry>>,
}

impl Default for EventCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL, DEFAULT_CAPACITY)
    }
}

impl EventCache {
    /// TTL and capacity are injectable so tests can force expiry and
    /// eviction deterministically.
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            ttl,
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Composite cache key. Status is fixed to "open": the pipeline only
    /// ever asks the catalog for ongoing events.
    pub fn cache_key(query: &Query) -> String {
        let category = query
            .category
            .map(|cat| cat.as_str())
            .unwrap_or("all");
        format!("{}_{}_open", category, query.days)
    }

    /// Return the live cached event list for `query`, or run `fetch` and
    /// cache its result. A failed fetch propagates without writing an entry.
    pub async fn get_or_fetch<F, Fut>(&self, query: &Query, fetch: F) -> Result<Vec<RawEvent>>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<Vec<RawEvent>>>,
    {
        let key = Self::cache_key(query);

        {
            let mut entries = self.entries.lock().expect("event cache lock");
            match entries.get(&key) {
                Some(entry) if entry.inserted_at.elapsed() < self.ttl => {
                    tracing::debug!(%key, "returning cached catalog data");
                    return Ok(entry.events.clone());
                }
                Some(_) => {
                    entries.pop(&key);
                }
                None => {}
            }
        }

        let events = fetch().await?;

        let mut entries = self.entries.lock().expect("event cache lock");
        entries.push(
            key,
            CacheEntry {
                events: events.clone(),
                inserted_at: Instant::now(),
            },
        );

        Ok(events)
    }
}
