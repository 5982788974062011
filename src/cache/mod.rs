//! Response body cache.
//!
//! Memoizes resolved bodies per `(content type, status code)`. Entries live
//! for the process lifetime: there is no expiry, eviction or size bound, the
//! key space being the format × code pairs a deployment actually serves.
//!
//! Concurrent misses for the same key may each load; the first stored value
//! wins and every caller receives a complete `Bytes`.

use std::sync::Arc;

use bytes::Bytes;
use dashmap::DashMap;
use tokio::task::JoinError;

use crate::code::ErrorCode;
use crate::config::CacheConfig;
use crate::observability::metrics;

/// Identifies one cached body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    content_type: String,
    code: ErrorCode,
}

impl CacheKey {
    pub fn new(content_type: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            content_type: content_type.into(),
            code,
        }
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }
}

/// A thread-safe, process-lifetime body cache.
///
/// Cloning is cheap and clones share entries.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    entries: Arc<DashMap<CacheKey, Bytes>>,
    enabled: bool,
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            enabled: true,
        }
    }

    /// A cache that never stores anything; every lookup misses.
    pub fn disabled() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            enabled: false,
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        if config.enabled {
            Self::new()
        } else {
            Self::disabled()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Stored body for `key`, if any.
    pub fn lookup(&self, key: &CacheKey) -> Option<Bytes> {
        if !self.enabled {
            return None;
        }

        let hit = self.entries.get(key).map(|entry| entry.value().clone());
        metrics::record_cache_lookup(hit.is_some());
        hit
    }

    /// Store `body` under `key` unless another caller got there first.
    /// Returns the body now associated with the key.
    pub fn insert(&self, key: CacheKey, body: Bytes) -> Bytes {
        if !self.enabled {
            return body;
        }

        let stored = {
            let entry = self.entries.entry(key).or_insert(body);
            entry.value().clone()
        };
        metrics::record_cache_size(self.entries.len());
        stored
    }

    /// Return the cached body, running `loader` only on a miss.
    pub fn get_or_load<F>(&self, key: CacheKey, loader: F) -> Bytes
    where
        F: FnOnce() -> Bytes,
    {
        match self.lookup(&key) {
            Some(body) => body,
            None => self.insert(key, loader()),
        }
    }

    /// [`ResponseCache::get_or_load`] for loaders that block: on a miss the
    /// loader runs on the blocking pool. Fails only if the loader panics, in
    /// which case nothing is stored.
    pub async fn get_or_load_blocking<F>(&self, key: CacheKey, loader: F) -> Result<Bytes, JoinError>
    where
        F: FnOnce() -> Bytes + Send + 'static,
    {
        if let Some(body) = self.lookup(&key) {
            return Ok(body);
        }

        let body = tokio::task::spawn_blocking(loader).await?;
        Ok(self.insert(key, body))
    }

    /// Count cached bodies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
