//! Response cache in front of API reads.
//!
//! Policy: an entry is fresh for [`CACHE_STALE_MS`] and served without a
//! request; a stale entry is still returned as a fallback but triggers a
//! refetch; after [`CACHE_RETAIN_MS`] it is evicted, either when looked up or
//! when any new response is stored. Window focus never triggers a refetch. Failed fetches are retried [`FETCH_RETRIES`] times.

#[cfg(test)]
#[path = "query_cache_test.rs"]
mod query_cache_test;

use std::collections::HashMap;

use crate::config::{CACHE_RETAIN_MS, CACHE_STALE_MS, FETCH_RETRIES};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CachePolicy {
    pub stale_ms: f64,
    pub retain_ms: f64,
    pub retries: u32,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self { stale_ms: CACHE_STALE_MS, retain_ms: CACHE_RETAIN_MS, retries: FETCH_RETRIES }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Lookup {
    Fresh(serde_json::Value),
    Stale(serde_json::Value),
    Miss,
}

#[derive(Clone, Debug)]
struct Entry {
    value: serde_json::Value,
    stored_at: f64,
}

#[derive(Clone, Debug, Default)]
pub struct QueryCache {
    policy: CachePolicy,
    entries: HashMap<String, Entry>,
}

impl QueryCache {
    pub fn new(policy: CachePolicy) -> Self {
        Self { policy, entries: HashMap::new() }
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up `key` at time `now` (ms). Expired entries are evicted here.
    pub fn lookup(&mut self, key: &str, now: f64) -> Lookup {
        let Some(entry) = self.entries.get(key) else {
            return Lookup::Miss;
        };
        let age = now - entry.stored_at;
        if age >= self.policy.retain_ms {
            self.entries.remove(key);
            Lookup::Miss
        } else if age < self.policy.stale_ms {
            Lookup::Fresh(entry.value.clone())
        } else {
            Lookup::Stale(entry.value.clone())
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: serde_json::Value, now: f64) {
        self.entries.insert(key.into(), Entry { value, stored_at: now });
    }

    /// Drop every entry older than the retention window.
    pub fn evict_expired(&mut self, now: f64) {
        let retain = self.policy.retain_ms;
        self.entries.retain(|_, e| now - e.stored_at < retain);
    }
}
