//! # News Cache
//! Single-slot, key + TTL gated cache of normalized article lists.
//!
//! Time is passed explicitly to `get`/`put` so expiry is testable without a
//! real clock. There is exactly one slot: a put with a new key evicts the old
//! entry, and interleaved puts are last-writer-wins by construction.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use crate::article::Article;
use crate::source::NewsSource;

/// Default entry validity window (5 minutes).
pub fn default_ttl() -> Duration {
    Duration::minutes(5)
}

#[derive(Debug, Clone)]
struct CacheEntry {
    key: String,
    data: Vec<Article>,
    source: NewsSource,
    timestamp: DateTime<Utc>,
}

/// Process-wide look-aside cache with a single slot.
#[derive(Debug)]
pub struct NewsCache {
    slot: Mutex<Option<CacheEntry>>,
    ttl: Duration,
}

impl Default for NewsCache {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsCache {
    pub fn new() -> Self {
        Self::with_ttl(default_ttl())
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            slot: Mutex::new(None),
            ttl,
        }
    }

    /// Return the cached list + source tag if the key matches and the entry
    /// is still fresh at `now`. A stale or mismatched entry is a miss.
    pub fn get(&self, key: &str, now: DateTime<Utc>) -> Option<(Vec<Article>, NewsSource)> {
        let slot = self.slot.lock().expect("news cache mutex poisoned");
        match slot.as_ref() {
            Some(e) if e.key == key && now - e.timestamp < self.ttl => {
                Some((e.data.clone(), e.source))
            }
            _ => None,
        }
    }

    /// Unconditionally replace the slot.
    pub fn put(&self, key: &str, data: Vec<Article>, source: NewsSource, now: DateTime<Utc>) {
        let mut slot = self.slot.lock().expect("news cache mutex poisoned");
        *slot = Some(CacheEntry {
            key: key.to_string(),
            data,
            source,
            timestamp: now,
        });
    }

    /// TTL in seconds (for diagnostics/telemetry).
    pub fn ttl_secs(&self) -> i64 {
        self.ttl.num_seconds()
    }
}
