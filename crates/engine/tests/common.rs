//! Shared fixtures for engine integration tests.
//!
//! All tests run against `MemoryStore` seeded around a fixed query point
//! in Bangalore, with a `FixedClock` so open-hours checks are
//! deterministic.

use std::{sync::Arc, time::Duration};

use chrono::NaiveTime;
use engine::{FixedClock, Nearbite};
use nearbite_core::{Config, ItemEntity, MenuEntity, QueryPoint, RestaurantEntity};
use store::{CacheError, CacheStore, MemoryStore, MokaCache, RestaurantStore, StoreError};

/// The query point every fixture restaurant is placed relative to.
pub const ORIGIN: QueryPoint = QueryPoint {
  latitude: 12.9716,
  longitude: 77.5946,
};

/// Approximate kilometers per degree of latitude.
const KM_PER_LAT_DEGREE: f64 = 111.2;

#[allow(dead_code)]
pub fn at(hour: u32, minute: u32) -> NaiveTime {
  NaiveTime::from_hms_opt(hour, minute, 0).expect("valid clock time")
}

/// A restaurant `km_north` kilometers due north of [`ORIGIN`].
#[allow(dead_code)]
pub fn restaurant_at(id: &str, name: &str, km_north: f64, opens: &str, closes: &str, attrs: &[&str]) -> RestaurantEntity {
  RestaurantEntity {
    restaurant_id: id.to_string(),
    name: name.to_string(),
    city: "Bangalore".to_string(),
    image_url: format!("https://img.example/{id}.jpg"),
    latitude: ORIGIN.latitude + km_north / KM_PER_LAT_DEGREE,
    longitude: ORIGIN.longitude,
    opens_at: opens.to_string(),
    closes_at: closes.to_string(),
    attributes: attrs.iter().map(|a| a.to_string()).collect(),
  }
}

#[allow(dead_code)]
pub fn menu_for(restaurant_id: &str, items: &[(&str, &str, &[&str])]) -> MenuEntity {
  MenuEntity {
    restaurant_id: restaurant_id.to_string(),
    items: items
      .iter()
      .map(|(item_id, name, attrs)| ItemEntity {
        item_id: item_id.to_string(),
        name: name.to_string(),
        attributes: attrs.iter().map(|a| a.to_string()).collect(),
        price: 12000,
      })
      .collect(),
  }
}

/// The standard fixture: three open nearby restaurants with menus.
///
/// - `r-dosa`: "Dosa Palace", 1km out, South Indian, serves Masala Dosa
/// - `r-andhra`: "Andhra Ruchulu", 2km out, Andhra, serves Chicken 65 (spicy)
/// - `r-cafe`: "Corner Cafe", 1.5km out, Continental, serves Pasta
#[allow(dead_code)]
pub async fn seeded_store() -> MemoryStore {
  let store = MemoryStore::new();
  store
    .seed(
      vec![
        restaurant_at("r-dosa", "Dosa Palace", 1.0, "08:00", "22:00", &["South Indian"]),
        restaurant_at("r-andhra", "Andhra Ruchulu", 2.0, "08:00", "22:00", &["Andhra"]),
        restaurant_at("r-cafe", "Corner Cafe", 1.5, "08:00", "22:00", &["Continental"]),
      ],
      vec![
        menu_for("r-dosa", &[("i-dosa", "Masala Dosa", &["veg"])]),
        menu_for("r-andhra", &[("i-c65", "Chicken 65", &["spicy", "non-veg"])]),
        menu_for("r-cafe", &[("i-pasta", "Pasta Arrabbiata", &["veg"])]),
      ],
    )
    .await;
  store
}

/// Service over one `MemoryStore` handle, fixed clock, moka cache.
#[allow(dead_code)]
pub fn service_over(store: MemoryStore, time: NaiveTime) -> Nearbite {
  service_with_cache(store, Arc::new(MokaCache::new()), time)
}

#[allow(dead_code)]
pub fn service_with_cache(store: MemoryStore, cache: Arc<dyn CacheStore>, time: NaiveTime) -> Nearbite {
  let store = Arc::new(store);
  Nearbite::with_clock(
    store.clone(),
    store,
    cache,
    Arc::new(FixedClock(time)),
    Config::default(),
  )
}

/// Restaurant ids of an outcome or nearby list, in order.
#[allow(dead_code)]
pub fn ids(restaurants: &[nearbite_core::Restaurant]) -> Vec<&str> {
  restaurants.iter().map(|r| r.restaurant_id.as_str()).collect()
}

/// A restaurant store whose name lookup always fails; everything else
/// delegates to the wrapped `MemoryStore`.
#[allow(dead_code)]
pub struct FailingNameStore(pub MemoryStore);

#[async_trait::async_trait]
impl RestaurantStore for FailingNameStore {
  async fn find_all(&self) -> Result<Vec<RestaurantEntity>, StoreError> {
    self.0.find_all().await
  }

  async fn find_by_name(&self, _query: &str) -> Result<Vec<RestaurantEntity>, StoreError> {
    Err(StoreError::Query("name index offline".to_string()))
  }

  async fn find_by_attribute(&self, query: &str) -> Result<Vec<RestaurantEntity>, StoreError> {
    self.0.find_by_attribute(query).await
  }

  async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<RestaurantEntity>, StoreError> {
    self.0.find_by_ids(ids).await
  }
}

/// A cache that hands back an undecodable snapshot on every read and
/// refuses every write.
#[allow(dead_code)]
pub struct CorruptCache;

#[async_trait::async_trait]
impl CacheStore for CorruptCache {
  async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
    Ok(Some(b"not a snapshot".to_vec()))
  }

  async fn set_with_expiry(&self, _key: &str, _value: Vec<u8>, _ttl: Duration) -> Result<(), CacheError> {
    Err(CacheError::Backend("read-only replica".to_string()))
  }
}

/// Per-query latency used by the fan-out speedup test.
#[allow(dead_code)]
pub const STORE_LATENCY: Duration = Duration::from_millis(40);
