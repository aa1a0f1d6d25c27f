//! Injectable time source.
//!
//! Open-hours and peak-window checks only care about the local time of
//! day, so the seam is a `NaiveTime`, not a full timestamp.

use chrono::NaiveTime;

pub trait Clock: Send + Sync {
  fn now_time(&self) -> NaiveTime;
}

/// Local wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now_time(&self) -> NaiveTime {
    chrono::Local::now().time()
  }
}

/// A clock pinned to one time of day, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl Clock for FixedClock {
  fn now_time(&self) -> NaiveTime {
    self.0
  }
}
