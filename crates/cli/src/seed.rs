//! Fixture loading for the demo store.

use std::path::Path;

use anyhow::Context;
use nearbite_core::{MenuEntity, RestaurantEntity};
use serde::Deserialize;
use store::MemoryStore;
use tracing::info;

/// Bundled demo catalog, used when no --data file is given.
const SAMPLE: &str = include_str!("../data/sample.json");

#[derive(Debug, Deserialize)]
struct SeedFile {
  #[serde(default)]
  restaurants: Vec<RestaurantEntity>,
  #[serde(default)]
  menus: Vec<MenuEntity>,
}

/// Build a `MemoryStore` from a JSON fixture file, or the bundled sample.
pub async fn load_store(data: Option<&Path>) -> anyhow::Result<MemoryStore> {
  let raw = match data {
    Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
    None => SAMPLE.to_string(),
  };
  let seed: SeedFile = serde_json::from_str(&raw).context("parsing seed data")?;

  info!(restaurants = seed.restaurants.len(), menus = seed.menus.len(), "Seeding store");
  let store = MemoryStore::new();
  store.seed(seed.restaurants, seed.menus).await;
  Ok(store)
}
