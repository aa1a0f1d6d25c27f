//! Read-only trait seams for restaurants, menus and the nearby cache.

use std::time::Duration;

use nearbite_core::{ItemEntity, MenuEntity, RestaurantEntity};

use crate::error::{CacheError, StoreError};

/// Read-only restaurant queries.
///
/// All text matching is case-insensitive substring matching, so exact
/// matches come back from the same query as partial ones.
#[async_trait::async_trait]
pub trait RestaurantStore: Send + Sync {
  /// Every restaurant in the store.
  async fn find_all(&self) -> Result<Vec<RestaurantEntity>, StoreError>;

  /// Restaurants whose display name contains `query`.
  async fn find_by_name(&self, query: &str) -> Result<Vec<RestaurantEntity>, StoreError>;

  /// Restaurants with at least one cuisine attribute containing `query`.
  async fn find_by_attribute(&self, query: &str) -> Result<Vec<RestaurantEntity>, StoreError>;

  /// Restaurants whose id appears in `ids`, in store order.
  async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<RestaurantEntity>, StoreError>;
}

/// Read-only menu queries.
#[async_trait::async_trait]
pub trait MenuStore: Send + Sync {
  /// The menu for one restaurant, if it has one.
  async fn find_menu(&self, restaurant_id: &str) -> Result<Option<MenuEntity>, StoreError>;

  /// Items whose name contains `query`.
  async fn find_items_by_name(&self, query: &str) -> Result<Vec<ItemEntity>, StoreError>;

  /// Items with at least one attribute containing `query`.
  async fn find_items_by_attribute(&self, query: &str) -> Result<Vec<ItemEntity>, StoreError>;

  /// Ids of restaurants whose menu serves any of `item_ids`, deduplicated,
  /// in store order.
  async fn restaurant_ids_serving(&self, item_ids: &[String]) -> Result<Vec<String>, StoreError>;
}

/// Byte cache with per-entry expiry.
///
/// Values are opaque serialized snapshots; the engine owns the encoding.
/// Concurrent writers for the same key may race; each write must be a
/// complete snapshot, and last-writer-wins is acceptable.
#[async_trait::async_trait]
pub trait CacheStore: Send + Sync {
  async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

  async fn set_with_expiry(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError>;
}
