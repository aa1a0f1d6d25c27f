//! In-memory restaurant and menu store.
//!
//! Backs the CLI demo and every engine test. `with_latency` injects an
//! artificial per-query delay so tests can model I/O-bound stores and
//! observe the concurrent aggregator's speedup.

use std::{collections::HashSet, sync::Arc, time::Duration};

use nearbite_core::{ItemEntity, MenuEntity, RestaurantEntity};
use tokio::sync::RwLock;

use crate::{
  error::StoreError,
  traits::{MenuStore, RestaurantStore},
};

/// Shared, clonable in-memory store implementing both store traits.
///
/// Reads take a shared lock, so the four search sub-queries can run
/// against one instance concurrently without external synchronization.
#[derive(Clone, Default)]
pub struct MemoryStore {
  restaurants: Arc<RwLock<Vec<RestaurantEntity>>>,
  menus: Arc<RwLock<Vec<MenuEntity>>>,
  latency: Option<Duration>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Sleep `latency` at the start of every query, simulating a remote store.
  pub fn with_latency(mut self, latency: Duration) -> Self {
    self.latency = Some(latency);
    self
  }

  pub async fn add_restaurant(&self, restaurant: RestaurantEntity) {
    self.restaurants.write().await.push(restaurant);
  }

  pub async fn add_menu(&self, menu: MenuEntity) {
    self.menus.write().await.push(menu);
  }

  pub async fn seed(&self, restaurants: Vec<RestaurantEntity>, menus: Vec<MenuEntity>) {
    self.restaurants.write().await.extend(restaurants);
    self.menus.write().await.extend(menus);
  }

  async fn simulate_io(&self) {
    if let Some(latency) = self.latency {
      tokio::time::sleep(latency).await;
    }
  }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
  haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait::async_trait]
impl RestaurantStore for MemoryStore {
  async fn find_all(&self) -> Result<Vec<RestaurantEntity>, StoreError> {
    self.simulate_io().await;
    Ok(self.restaurants.read().await.clone())
  }

  async fn find_by_name(&self, query: &str) -> Result<Vec<RestaurantEntity>, StoreError> {
    self.simulate_io().await;
    let restaurants = self.restaurants.read().await;
    Ok(restaurants.iter().filter(|r| contains_ci(&r.name, query)).cloned().collect())
  }

  async fn find_by_attribute(&self, query: &str) -> Result<Vec<RestaurantEntity>, StoreError> {
    self.simulate_io().await;
    let restaurants = self.restaurants.read().await;
    Ok(
      restaurants
        .iter()
        .filter(|r| r.attributes.iter().any(|a| contains_ci(a, query)))
        .cloned()
        .collect(),
    )
  }

  async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<RestaurantEntity>, StoreError> {
    self.simulate_io().await;
    let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
    let restaurants = self.restaurants.read().await;
    Ok(
      restaurants
        .iter()
        .filter(|r| wanted.contains(r.restaurant_id.as_str()))
        .cloned()
        .collect(),
    )
  }
}

#[async_trait::async_trait]
impl MenuStore for MemoryStore {
  async fn find_menu(&self, restaurant_id: &str) -> Result<Option<MenuEntity>, StoreError> {
    self.simulate_io().await;
    let menus = self.menus.read().await;
    Ok(menus.iter().find(|m| m.restaurant_id == restaurant_id).cloned())
  }

  async fn find_items_by_name(&self, query: &str) -> Result<Vec<ItemEntity>, StoreError> {
    self.simulate_io().await;
    let menus = self.menus.read().await;
    Ok(
      menus
        .iter()
        .flat_map(|m| m.items.iter())
        .filter(|item| contains_ci(&item.name, query))
        .cloned()
        .collect(),
    )
  }

  async fn find_items_by_attribute(&self, query: &str) -> Result<Vec<ItemEntity>, StoreError> {
    self.simulate_io().await;
    let menus = self.menus.read().await;
    Ok(
      menus
        .iter()
        .flat_map(|m| m.items.iter())
        .filter(|item| item.attributes.iter().any(|a| contains_ci(a, query)))
        .cloned()
        .collect(),
    )
  }

  async fn restaurant_ids_serving(&self, item_ids: &[String]) -> Result<Vec<String>, StoreError> {
    self.simulate_io().await;
    let wanted: HashSet<&str> = item_ids.iter().map(String::as_str).collect();
    let menus = self.menus.read().await;

    let mut seen = HashSet::new();
    let mut restaurant_ids = Vec::new();
    for menu in menus.iter() {
      if menu.items.iter().any(|item| wanted.contains(item.item_id.as_str()))
        && seen.insert(menu.restaurant_id.clone())
      {
        restaurant_ids.push(menu.restaurant_id.clone());
      }
    }
    Ok(restaurant_ids)
  }
}
