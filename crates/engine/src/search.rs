//! Four-way search aggregation.
//!
//! A search fans out over four fixed sources (restaurant name, cuisine
//! attribute, menu item name, menu item attribute), each filtered through
//! the proximity predicate per candidate. Results merge in that fixed
//! source order with first-seen-wins dedup by restaurant id, so the
//! sequential and concurrent variants produce identical output.
//!
//! A failing source does not empty the whole response: it contributes
//! nothing and is reported in [`SearchOutcome::failed_sources`] while the
//! surviving sources still merge. Callers that need all four sources must
//! check `failed_sources` before trusting the list to be complete.

use std::{collections::HashSet, fmt};

use chrono::NaiveTime;
use nearbite_core::{Config, ItemEntity, QueryPoint, Restaurant, RestaurantEntity};
use store::{MenuStore, RestaurantStore, StoreError};
use tracing::{debug, warn};

use crate::{policy, proximity};

/// The four search dimensions, in merge order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchSource {
  Name,
  Attribute,
  ItemName,
  ItemAttribute,
}

impl fmt::Display for SearchSource {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SearchSource::Name => write!(f, "name"),
      SearchSource::Attribute => write!(f, "attribute"),
      SearchSource::ItemName => write!(f, "item-name"),
      SearchSource::ItemAttribute => write!(f, "item-attribute"),
    }
  }
}

/// One sub-search that could not run.
#[derive(Debug)]
pub struct SourceFailure {
  pub source: SearchSource,
  pub error: StoreError,
}

/// Merged search results plus which sources (if any) failed.
#[derive(Debug, Default)]
pub struct SearchOutcome {
  /// Deduplicated restaurants in first-source-wins order.
  pub restaurants: Vec<Restaurant>,
  /// Sources that errored and therefore contributed nothing.
  pub failed_sources: Vec<SourceFailure>,
}

impl SearchOutcome {
  /// Whether any source failed, i.e. the list may be incomplete.
  pub fn is_partial(&self) -> bool {
    !self.failed_sources.is_empty()
  }
}

type SourceResult = Result<Vec<Restaurant>, StoreError>;

/// Sequential variant: the four sources run one after another on the
/// caller's task.
pub async fn search(
  restaurants: &dyn RestaurantStore,
  menus: &dyn MenuStore,
  config: &Config,
  point: QueryPoint,
  text: &str,
  time: NaiveTime,
) -> SearchOutcome {
  let Some((query, radius_km)) = prepare(config, point, text, time) else {
    return SearchOutcome::default();
  };

  let name = by_name(restaurants, &point, query, time, radius_km).await;
  let attribute = by_attribute(restaurants, &point, query, time, radius_km).await;
  let item_name = by_item_name(restaurants, menus, &point, query, time, radius_km).await;
  let item_attribute = by_item_attribute(restaurants, menus, &point, query, time, radius_km).await;

  merge([
    (SearchSource::Name, name),
    (SearchSource::Attribute, attribute),
    (SearchSource::ItemName, item_name),
    (SearchSource::ItemAttribute, item_attribute),
  ])
}

/// Concurrent variant: same four sources, same merge order, but dispatched
/// together and joined before merging. The join barrier (not completion
/// order) fixes the merge order, so output is identical to [`search`].
pub async fn search_concurrent(
  restaurants: &dyn RestaurantStore,
  menus: &dyn MenuStore,
  config: &Config,
  point: QueryPoint,
  text: &str,
  time: NaiveTime,
) -> SearchOutcome {
  let Some((query, radius_km)) = prepare(config, point, text, time) else {
    return SearchOutcome::default();
  };

  // Fixed fan-out of four; no task depends on another's result.
  let (name, attribute, item_name, item_attribute) = tokio::join!(
    by_name(restaurants, &point, query, time, radius_km),
    by_attribute(restaurants, &point, query, time, radius_km),
    by_item_name(restaurants, menus, &point, query, time, radius_km),
    by_item_attribute(restaurants, menus, &point, query, time, radius_km),
  );

  merge([
    (SearchSource::Name, name),
    (SearchSource::Attribute, attribute),
    (SearchSource::ItemName, item_name),
    (SearchSource::ItemAttribute, item_attribute),
  ])
}

/// Shared preamble for both variants: trim the query, reject empty text
/// and invalid points, pick the policy radius.
fn prepare<'t>(config: &Config, point: QueryPoint, text: &'t str, time: NaiveTime) -> Option<(&'t str, f64)> {
  let query = text.trim();
  if query.is_empty() {
    // Empty and whitespace-only both mean "no results", never the full
    // catalog.
    debug!("Empty search text, returning nothing");
    return None;
  }
  if !point.is_valid() {
    debug!(latitude = point.latitude, longitude = point.longitude, "Invalid query point, returning nothing");
    return None;
  }
  Some((query, policy::serving_radius_km(time, &config.radius)))
}

async fn by_name(
  restaurants: &dyn RestaurantStore,
  point: &QueryPoint,
  query: &str,
  time: NaiveTime,
  radius_km: f64,
) -> SourceResult {
  let candidates = restaurants.find_by_name(query).await?;
  Ok(qualify(&candidates, point, time, radius_km))
}

async fn by_attribute(
  restaurants: &dyn RestaurantStore,
  point: &QueryPoint,
  query: &str,
  time: NaiveTime,
  radius_km: f64,
) -> SourceResult {
  let candidates = restaurants.find_by_attribute(query).await?;
  Ok(qualify(&candidates, point, time, radius_km))
}

async fn by_item_name(
  restaurants: &dyn RestaurantStore,
  menus: &dyn MenuStore,
  point: &QueryPoint,
  query: &str,
  time: NaiveTime,
  radius_km: f64,
) -> SourceResult {
  let items = menus.find_items_by_name(query).await?;
  via_serving_restaurants(restaurants, menus, items, point, time, radius_km).await
}

async fn by_item_attribute(
  restaurants: &dyn RestaurantStore,
  menus: &dyn MenuStore,
  point: &QueryPoint,
  query: &str,
  time: NaiveTime,
  radius_km: f64,
) -> SourceResult {
  let items = menus.find_items_by_attribute(query).await?;
  via_serving_restaurants(restaurants, menus, items, point, time, radius_km).await
}

/// Map matched items back to the restaurants serving them, then qualify.
async fn via_serving_restaurants(
  restaurants: &dyn RestaurantStore,
  menus: &dyn MenuStore,
  items: Vec<ItemEntity>,
  point: &QueryPoint,
  time: NaiveTime,
  radius_km: f64,
) -> SourceResult {
  if items.is_empty() {
    return Ok(Vec::new());
  }
  let item_ids: Vec<String> = items.into_iter().map(|item| item.item_id).collect();

  let restaurant_ids = menus.restaurant_ids_serving(&item_ids).await?;
  if restaurant_ids.is_empty() {
    return Ok(Vec::new());
  }

  let candidates = restaurants.find_by_ids(&restaurant_ids).await?;
  Ok(qualify(&candidates, point, time, radius_km))
}

/// Apply the proximity predicate and convert survivors to records.
fn qualify(candidates: &[RestaurantEntity], point: &QueryPoint, time: NaiveTime, radius_km: f64) -> Vec<Restaurant> {
  candidates
    .iter()
    .filter(|entity| proximity::is_open_and_nearby(point, time, entity, radius_km))
    .map(Restaurant::from)
    .collect()
}

/// First-source-wins merge over the fixed source order.
fn merge(sources: [(SearchSource, SourceResult); 4]) -> SearchOutcome {
  let mut seen: HashSet<String> = HashSet::new();
  let mut restaurants = Vec::new();
  let mut failed_sources = Vec::new();

  for (source, result) in sources {
    match result {
      Ok(list) => {
        for restaurant in list {
          if seen.insert(restaurant.restaurant_id.clone()) {
            restaurants.push(restaurant);
          }
        }
      }
      Err(error) => {
        warn!(source = %source, %error, "Search source failed, merging the rest");
        failed_sources.push(SourceFailure { source, error });
      }
    }
  }

  SearchOutcome {
    restaurants,
    failed_sources,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn record(id: &str) -> Restaurant {
    Restaurant {
      restaurant_id: id.to_string(),
      name: id.to_string(),
      city: String::new(),
      image_url: String::new(),
      latitude: 0.0,
      longitude: 0.0,
      opens_at: "08:00".to_string(),
      closes_at: "22:00".to_string(),
      attributes: vec![],
    }
  }

  #[test]
  fn merge_dedupes_with_first_source_winning() {
    let outcome = merge([
      (SearchSource::Name, Ok(vec![record("a")])),
      (SearchSource::Attribute, Ok(vec![record("b"), record("a")])),
      (SearchSource::ItemName, Ok(vec![record("c"), record("b")])),
      (SearchSource::ItemAttribute, Ok(vec![])),
    ]);

    let ids: Vec<&str> = outcome.restaurants.iter().map(|r| r.restaurant_id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert!(!outcome.is_partial());
  }

  #[test]
  fn merge_keeps_surviving_sources_on_failure() {
    let outcome = merge([
      (SearchSource::Name, Err(StoreError::Query("boom".to_string()))),
      (SearchSource::Attribute, Ok(vec![record("b")])),
      (SearchSource::ItemName, Ok(vec![record("c")])),
      (SearchSource::ItemAttribute, Ok(vec![record("b")])),
    ]);

    let ids: Vec<&str> = outcome.restaurants.iter().map(|r| r.restaurant_id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c"]);
    assert!(outcome.is_partial());
    assert_eq!(outcome.failed_sources.len(), 1);
    assert_eq!(outcome.failed_sources[0].source, SearchSource::Name);
  }
}
