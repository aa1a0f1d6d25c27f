//! Geo primitives: query points, great-circle distance and geohashing.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers, as used by the haversine formula.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Base-32 alphabet used by the geohash encoding (no a, i, l, o).
const GEOHASH_BASE32: &[u8] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// A caller-supplied query location.
///
/// The transport boundary validates coordinates before they get here, but
/// the engine does not trust that blindly: an out-of-range point yields no
/// matches rather than undefined math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueryPoint {
  pub latitude: f64,
  pub longitude: f64,
}

impl QueryPoint {
  pub fn new(latitude: f64, longitude: f64) -> Self {
    Self { latitude, longitude }
  }

  /// Whether the point lies in the valid coordinate ranges.
  ///
  /// NaN fails every comparison, so NaN coordinates are invalid too.
  pub fn is_valid(&self) -> bool {
    (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
  }

  /// Geohash of this point at the given character precision.
  pub fn geohash(&self, precision: usize) -> String {
    geohash(self.latitude, self.longitude, precision)
  }
}

/// Great-circle distance in kilometers between two lat/lon pairs.
pub fn distance_km(src_lat: f64, src_lon: f64, dst_lat: f64, dst_lon: f64) -> f64 {
  distance_with_elevation_km(src_lat, src_lon, dst_lat, dst_lon, 0.0, 0.0)
}

/// Haversine distance with an optional elevation delta folded in.
///
/// Elevations are in meters; the vertical leg is combined with the
/// horizontal great-circle leg by Pythagoras. Pass 0.0 for both when the
/// height difference is irrelevant.
pub fn distance_with_elevation_km(
  src_lat: f64,
  src_lon: f64,
  dst_lat: f64,
  dst_lon: f64,
  src_elevation_m: f64,
  dst_elevation_m: f64,
) -> f64 {
  let lat_delta = (dst_lat - src_lat).to_radians();
  let lon_delta = (dst_lon - src_lon).to_radians();

  let a = (lat_delta / 2.0).sin().powi(2)
    + src_lat.to_radians().cos() * dst_lat.to_radians().cos() * (lon_delta / 2.0).sin().powi(2);
  let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

  let horizontal_km = EARTH_RADIUS_KM * c;
  let vertical_km = (src_elevation_m - dst_elevation_m) / 1000.0;

  (horizontal_km.powi(2) + vertical_km.powi(2)).sqrt()
}

/// Encode a lat/lon pair as a base-32 geohash of `precision` characters.
///
/// Standard interleaved bisection: even bits narrow longitude, odd bits
/// narrow latitude, five bits per output character. Precision 7 gives a
/// cell roughly 150m wide, which is what the nearby-cache keys use.
pub fn geohash(latitude: f64, longitude: f64, precision: usize) -> String {
  let mut lat_range = (-90.0f64, 90.0f64);
  let mut lon_range = (-180.0f64, 180.0f64);

  let mut hash = String::with_capacity(precision);
  let mut bits = 0u8;
  let mut bit_count = 0u8;
  let mut even_bit = true;

  while hash.len() < precision {
    if even_bit {
      let mid = (lon_range.0 + lon_range.1) / 2.0;
      if longitude >= mid {
        bits = (bits << 1) | 1;
        lon_range.0 = mid;
      } else {
        bits <<= 1;
        lon_range.1 = mid;
      }
    } else {
      let mid = (lat_range.0 + lat_range.1) / 2.0;
      if latitude >= mid {
        bits = (bits << 1) | 1;
        lat_range.0 = mid;
      } else {
        bits <<= 1;
        lat_range.1 = mid;
      }
    }
    even_bit = !even_bit;

    bit_count += 1;
    if bit_count == 5 {
      hash.push(GEOHASH_BASE32[bits as usize] as char);
      bits = 0;
      bit_count = 0;
    }
  }

  hash
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn distance_to_self_is_zero() {
    assert_eq!(distance_km(12.9716, 77.5946, 12.9716, 77.5946), 0.0);
  }

  #[test]
  fn haversine_matches_known_distance() {
    // Bangalore city center to Mysore, roughly 128km great-circle.
    let d = distance_km(12.9716, 77.5946, 12.2958, 76.6394);
    assert!((d - 128.0).abs() < 2.0, "unexpected distance: {d}");
  }

  #[test]
  fn elevation_delta_lengthens_distance() {
    let flat = distance_km(12.97, 77.59, 12.98, 77.60);
    let raised = distance_with_elevation_km(12.97, 77.59, 12.98, 77.60, 0.0, 900.0);
    assert!(raised > flat);
  }

  #[test]
  fn geohash_known_vector() {
    // Canonical geohash example cell.
    assert_eq!(geohash(42.605, -5.603, 5), "ezs42");
  }

  #[test]
  fn geohash_precision_and_alphabet() {
    let h = geohash(28.4900591, 77.536386, 7);
    assert_eq!(h.len(), 7);
    assert!(h.bytes().all(|b| GEOHASH_BASE32.contains(&b)));
  }

  #[test]
  fn nearby_points_share_a_cell_prefix() {
    // ~10m apart: identical at precision 7's parent levels.
    let a = geohash(12.97160, 77.59460, 7);
    let b = geohash(12.97165, 77.59465, 7);
    assert_eq!(a[..5], b[..5]);
  }

  #[test]
  fn out_of_range_points_are_invalid() {
    assert!(!QueryPoint::new(90.1, 0.0).is_valid());
    assert!(!QueryPoint::new(-91.0, 0.0).is_valid());
    assert!(!QueryPoint::new(0.0, 180.5).is_valid());
    assert!(!QueryPoint::new(f64::NAN, 0.0).is_valid());
    assert!(QueryPoint::new(90.0, -180.0).is_valid());
  }
}
