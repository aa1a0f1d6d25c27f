//! Cache backends for nearby snapshots.
//!
//! `MokaCache` is the in-process production backend; entries carry their
//! own TTL via moka's per-entry expiry hook. `UnavailableCache` simulates a
//! dead backend so the engine's degrade path can be exercised.

use std::time::{Duration, Instant};

use moka::{Expiry, future::Cache};
use tracing::trace;

use crate::{error::CacheError, traits::CacheStore};

#[derive(Clone)]
struct Entry {
  bytes: Vec<u8>,
  ttl: Duration,
}

/// Expire each entry `entry.ttl` after creation.
struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
  fn expire_after_create(&self, _key: &String, entry: &Entry, _created_at: Instant) -> Option<Duration> {
    Some(entry.ttl)
  }
}

/// Moka-backed byte cache.
pub struct MokaCache {
  cache: Cache<String, Entry>,
}

impl MokaCache {
  /// Create a cache with the default capacity (10k keys).
  pub fn new() -> Self {
    Self::with_capacity(10_000)
  }

  pub fn with_capacity(capacity: u64) -> Self {
    Self {
      cache: Cache::builder()
        .max_capacity(capacity)
        .expire_after(PerEntryTtl)
        .build(),
    }
  }
}

impl Default for MokaCache {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait::async_trait]
impl CacheStore for MokaCache {
  async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
    let hit = self.cache.get(key).await;
    trace!(key, hit = hit.is_some(), "cache get");
    Ok(hit.map(|entry| entry.bytes))
  }

  async fn set_with_expiry(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError> {
    trace!(key, bytes = value.len(), ttl_secs = ttl.as_secs(), "cache set");
    self.cache.insert(key.to_string(), Entry { bytes: value, ttl }).await;
    Ok(())
  }
}

/// A cache whose backend is down. Every call fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableCache;

#[async_trait::async_trait]
impl CacheStore for UnavailableCache {
  async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
    Err(CacheError::Unavailable("cache backend is down".to_string()))
  }

  async fn set_with_expiry(&self, _key: &str, _value: Vec<u8>, _ttl: Duration) -> Result<(), CacheError> {
    Err(CacheError::Unavailable("cache backend is down".to_string()))
  }
}
