//! Stored entities and the public records derived from them.
//!
//! Entities are the shape the stores hand back: opening hours are kept as
//! raw `"HH:MM"` strings and parsed lazily, so one unparsable record can be
//! skipped without aborting a whole scan. Records are what the engine
//! returns to callers (and serialises into cache snapshots). Conversion is
//! explicit and field-by-field; there is deliberately no reflective mapping
//! layer in between.

use serde::{Deserialize, Serialize};

/// A restaurant as the store holds it.
///
/// `opens_at` / `closes_at` are `"HH:MM"` strings on the same clock; a
/// value that fails to parse means the restaurant is treated as never open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantEntity {
  pub restaurant_id: String,
  pub name: String,
  pub city: String,
  pub image_url: String,
  pub latitude: f64,
  pub longitude: f64,
  pub opens_at: String,
  pub closes_at: String,
  /// Cuisine tags, e.g. "South Indian", "Chinese".
  #[serde(default)]
  pub attributes: Vec<String>,
}

/// A single menu item. Owned by exactly one menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemEntity {
  pub item_id: String,
  pub name: String,
  #[serde(default)]
  pub attributes: Vec<String>,
  /// Price in the smallest currency unit.
  pub price: i64,
}

/// A restaurant's menu. `restaurant_id` is a back-reference, not ownership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntity {
  pub restaurant_id: String,
  #[serde(default)]
  pub items: Vec<ItemEntity>,
}

// ============================================================================
// Public records
// ============================================================================

/// The restaurant record returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
  pub restaurant_id: String,
  pub name: String,
  pub city: String,
  pub image_url: String,
  pub latitude: f64,
  pub longitude: f64,
  pub opens_at: String,
  pub closes_at: String,
  #[serde(default)]
  pub attributes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
  pub item_id: String,
  pub name: String,
  #[serde(default)]
  pub attributes: Vec<String>,
  pub price: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
  pub restaurant_id: String,
  #[serde(default)]
  pub items: Vec<Item>,
}

impl From<&RestaurantEntity> for Restaurant {
  fn from(entity: &RestaurantEntity) -> Self {
    Self {
      restaurant_id: entity.restaurant_id.clone(),
      name: entity.name.clone(),
      city: entity.city.clone(),
      image_url: entity.image_url.clone(),
      latitude: entity.latitude,
      longitude: entity.longitude,
      opens_at: entity.opens_at.clone(),
      closes_at: entity.closes_at.clone(),
      attributes: entity.attributes.clone(),
    }
  }
}

impl From<&ItemEntity> for Item {
  fn from(entity: &ItemEntity) -> Self {
    Self {
      item_id: entity.item_id.clone(),
      name: entity.name.clone(),
      attributes: entity.attributes.clone(),
      price: entity.price,
    }
  }
}

impl From<&MenuEntity> for Menu {
  fn from(entity: &MenuEntity) -> Self {
    Self {
      restaurant_id: entity.restaurant_id.clone(),
      items: entity.items.iter().map(Item::from).collect(),
    }
  }
}
