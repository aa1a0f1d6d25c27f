//! Cache-aside nearby pipeline.
//!
//! Keys are 7-char geohashes of the query point, so queries from roughly
//! the same 150m cell share a snapshot. A hit is returned as-is with no
//! re-filtering; staleness inside the TTL window is the accepted
//! trade-off. A cache that errors (or a snapshot that fails to decode or
//! encode) degrades to a direct store scan; the request never fails over
//! the cache. Text search never goes through here.

use std::time::Duration;

use chrono::NaiveTime;
use nearbite_core::{Config, QueryPoint, Restaurant};
use store::{CacheStore, RestaurantStore};
use tracing::{debug, warn};

use crate::{error::Result, policy, proximity};

/// All open restaurants strictly inside the policy radius around `point`.
///
/// Invalid coordinates return an empty list; only a failing full-catalog
/// scan is a hard error.
pub async fn find_nearby(
  restaurants: &dyn RestaurantStore,
  cache: &dyn CacheStore,
  config: &Config,
  point: QueryPoint,
  time: NaiveTime,
) -> Result<Vec<Restaurant>> {
  if !point.is_valid() {
    debug!(latitude = point.latitude, longitude = point.longitude, "Invalid query point, nothing nearby");
    return Ok(Vec::new());
  }

  let key = point.geohash(config.cache.geohash_precision);

  match cache.get(&key).await {
    Ok(Some(bytes)) => match serde_json::from_slice::<Vec<Restaurant>>(&bytes) {
      Ok(snapshot) => {
        debug!(key = %key, count = snapshot.len(), "Nearby cache hit");
        return Ok(snapshot);
      }
      // A snapshot we cannot decode counts as a miss; the rewrite below
      // replaces it with a valid one.
      Err(error) => warn!(key = %key, %error, "Undecodable cache snapshot, recomputing"),
    },
    Ok(None) => debug!(key = %key, "Nearby cache miss"),
    Err(error) => warn!(key = %key, %error, "Cache read failed, scanning store directly"),
  }

  let radius_km = policy::serving_radius_km(time, &config.radius);
  let entities = restaurants.find_all().await?;
  let matches: Vec<Restaurant> = entities
    .iter()
    .filter(|entity| proximity::is_open_and_nearby(&point, time, entity, radius_km))
    .map(Restaurant::from)
    .collect();

  debug!(key = %key, scanned = entities.len(), matched = matches.len(), radius_km, "Nearby scan complete");

  // Concurrent misses for the same key may both land here; each writes a
  // complete snapshot and last-writer-wins. The result is already in hand,
  // so nothing on the write path is allowed to fail the request.
  match serde_json::to_vec(&matches) {
    Ok(bytes) => {
      let ttl = Duration::from_secs(config.cache.ttl_secs);
      if let Err(error) = cache.set_with_expiry(&key, bytes, ttl).await {
        warn!(key = %key, %error, "Cache write failed, serving uncached result");
      }
    }
    Err(error) => warn!(key = %key, %error, "Snapshot encoding failed, serving uncached result"),
  }

  Ok(matches)
}
