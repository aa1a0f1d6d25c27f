//! The [`Nearbite`] facade: stores + cache + clock + config in one handle.

use std::sync::Arc;

use chrono::NaiveTime;
use nearbite_core::{Config, Menu, QueryPoint, Restaurant};
use store::{CacheStore, MenuStore, RestaurantStore};

use crate::{
  clock::{Clock, SystemClock},
  error::Result,
  nearby,
  search::{self, SearchOutcome},
};

/// The engine's caller-facing service.
///
/// Stores and the cache are shared read-only; cloning the `Arc`s is cheap
/// and the whole struct is `Send + Sync`.
pub struct Nearbite {
  restaurants: Arc<dyn RestaurantStore>,
  menus: Arc<dyn MenuStore>,
  cache: Arc<dyn CacheStore>,
  clock: Arc<dyn Clock>,
  config: Config,
}

impl Nearbite {
  /// Build a service on the system clock.
  pub fn new(
    restaurants: Arc<dyn RestaurantStore>,
    menus: Arc<dyn MenuStore>,
    cache: Arc<dyn CacheStore>,
    config: Config,
  ) -> Self {
    Self::with_clock(restaurants, menus, cache, Arc::new(SystemClock), config)
  }

  /// Build a service with an injected clock (deterministic tests).
  pub fn with_clock(
    restaurants: Arc<dyn RestaurantStore>,
    menus: Arc<dyn MenuStore>,
    cache: Arc<dyn CacheStore>,
    clock: Arc<dyn Clock>,
    config: Config,
  ) -> Self {
    Self {
      restaurants,
      menus,
      cache,
      clock,
      config,
    }
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Open restaurants strictly within the serving radius, via the cache.
  pub async fn find_nearby(&self, point: QueryPoint) -> Result<Vec<Restaurant>> {
    self.find_nearby_at(point, self.clock.now_time()).await
  }

  pub async fn find_nearby_at(&self, point: QueryPoint, time: NaiveTime) -> Result<Vec<Restaurant>> {
    nearby::find_nearby(self.restaurants.as_ref(), self.cache.as_ref(), &self.config, point, time).await
  }

  /// Sequential multi-criteria search.
  pub async fn search(&self, point: QueryPoint, text: &str) -> SearchOutcome {
    self.search_at(point, text, self.clock.now_time()).await
  }

  pub async fn search_at(&self, point: QueryPoint, text: &str, time: NaiveTime) -> SearchOutcome {
    search::search(self.restaurants.as_ref(), self.menus.as_ref(), &self.config, point, text, time).await
  }

  /// Concurrent multi-criteria search; same contract and output as
  /// [`Nearbite::search`], lower wall-clock latency on I/O-bound stores.
  pub async fn search_concurrent(&self, point: QueryPoint, text: &str) -> SearchOutcome {
    self.search_concurrent_at(point, text, self.clock.now_time()).await
  }

  pub async fn search_concurrent_at(&self, point: QueryPoint, text: &str, time: NaiveTime) -> SearchOutcome {
    search::search_concurrent(self.restaurants.as_ref(), self.menus.as_ref(), &self.config, point, text, time).await
  }

  /// A restaurant's menu as a public record, if it has one.
  pub async fn menu(&self, restaurant_id: &str) -> Result<Option<Menu>> {
    let menu = self.menus.find_menu(restaurant_id).await?;
    Ok(menu.as_ref().map(Menu::from))
  }
}
