//! Peak-hour serving radius policy.
//!
//! During the daily rush windows the serving radius tightens from 5km to
//! 3km (values come from config). Window bounds are inclusive at the start
//! and exclusive at the end, and that one convention applies everywhere:
//! 08:00 is peak, 10:00 is not.

use chrono::{NaiveTime, Timelike};
use nearbite_core::RadiusConfig;

/// Daily peak windows as seconds from midnight: 08:00-10:00, 13:00-14:00,
/// 19:00-21:00.
const PEAK_WINDOWS: [(u32, u32); 3] = [
  (8 * 3600, 10 * 3600),
  (13 * 3600, 14 * 3600),
  (19 * 3600, 21 * 3600),
];

/// Whether `time` falls in a peak window (start inclusive, end exclusive).
pub fn is_peak_hour(time: NaiveTime) -> bool {
  let seconds = time.num_seconds_from_midnight();
  PEAK_WINDOWS.iter().any(|&(start, end)| start <= seconds && seconds < end)
}

/// The serving radius in kilometers for a given time of day.
pub fn serving_radius_km(time: NaiveTime, radius: &RadiusConfig) -> f64 {
  if is_peak_hour(time) { radius.peak_km } else { radius.normal_km }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
  }

  #[test]
  fn peak_windows_use_the_tight_radius() {
    let radius = RadiusConfig::default();
    for time in [at(8, 0), at(9, 59), at(13, 0), at(13, 30), at(19, 0), at(20, 59)] {
      assert_eq!(serving_radius_km(time, &radius), 3.0, "{time} should be peak");
    }
  }

  #[test]
  fn off_peak_uses_the_normal_radius() {
    let radius = RadiusConfig::default();
    for time in [at(0, 0), at(7, 59), at(12, 0), at(15, 0), at(18, 59), at(23, 59)] {
      assert_eq!(serving_radius_km(time, &radius), 5.0, "{time} should be off-peak");
    }
  }

  #[test]
  fn window_ends_are_exclusive() {
    // Inclusive start, exclusive end, uniformly.
    assert!(is_peak_hour(at(8, 0)));
    assert!(!is_peak_hour(at(10, 0)));
    assert!(is_peak_hour(at(13, 0)));
    assert!(!is_peak_hour(at(14, 0)));
    assert!(is_peak_hour(at(19, 0)));
    assert!(!is_peak_hour(at(21, 0)));
  }

  #[test]
  fn second_precision_respects_the_boundary() {
    assert!(is_peak_hour(NaiveTime::from_hms_opt(9, 59, 59).unwrap()));
    assert!(!is_peak_hour(NaiveTime::from_hms_opt(10, 0, 1).unwrap()));
  }
}
