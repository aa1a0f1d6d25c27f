//! The open-hours + distance predicate.
//!
//! Both halves are strict: a restaurant exactly at its opening or closing
//! instant is closed, and one exactly at the serving radius is out of
//! range. The same predicate feeds the nearby pipeline and every search
//! sub-source, so strictness cannot drift between paths.

use chrono::NaiveTime;
use nearbite_core::{QueryPoint, RestaurantEntity, geo};
use tracing::debug;

/// Parse a stored `"HH:MM"` (or `"HH:MM:SS"`) clock string.
fn parse_clock(raw: &str) -> Option<NaiveTime> {
  let raw = raw.trim();
  NaiveTime::parse_from_str(raw, "%H:%M")
    .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
    .ok()
}

/// True iff `time` is strictly between the restaurant's opening and
/// closing times.
///
/// A record with an unparsable time is treated as never open rather than
/// failing the scan. No overnight wraparound: `opens_at >= closes_at`
/// never matches.
pub fn is_open_at(time: NaiveTime, entity: &RestaurantEntity) -> bool {
  let (Some(opens), Some(closes)) = (parse_clock(&entity.opens_at), parse_clock(&entity.closes_at)) else {
    debug!(
      restaurant_id = %entity.restaurant_id,
      opens_at = %entity.opens_at,
      closes_at = %entity.closes_at,
      "Unparsable opening hours, treating restaurant as closed"
    );
    return false;
  };

  opens < time && time < closes
}

/// True iff the great-circle distance from `point` to the restaurant is
/// strictly less than `radius_km`. An invalid query point matches nothing.
pub fn is_within_radius(point: &QueryPoint, entity: &RestaurantEntity, radius_km: f64) -> bool {
  if !point.is_valid() {
    return false;
  }
  geo::distance_km(point.latitude, point.longitude, entity.latitude, entity.longitude) < radius_km
}

/// The combined qualification predicate: open now AND within radius.
pub fn is_open_and_nearby(point: &QueryPoint, time: NaiveTime, entity: &RestaurantEntity, radius_km: f64) -> bool {
  is_open_at(time, entity) && is_within_radius(point, entity, radius_km)
}
