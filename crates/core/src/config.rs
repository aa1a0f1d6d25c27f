//! Configuration for the nearbite engine.
//!
//! Defaults match the production policy (3km peak / 5km normal radius,
//! 7-char geohash cache keys, 5 minute cache TTL) and can be overridden
//! from a TOML file. Every field is optional in the file; missing sections
//! fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
  #[error("TOML parse error: {0}")]
  Parse(#[from] toml::de::Error),
  #[error("Invalid config: {0}")]
  Invalid(String),
}

/// Serving radius settings in kilometers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiusConfig {
  /// Radius during peak hours.
  pub peak_km: f64,
  /// Radius outside peak hours.
  pub normal_km: f64,
}

impl Default for RadiusConfig {
  fn default() -> Self {
    Self {
      peak_km: 3.0,
      normal_km: 5.0,
    }
  }
}

/// Nearby-cache settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
  /// Fixed time-to-live for cached nearby snapshots, in seconds.
  pub ttl_secs: u64,
  /// Geohash character precision for cache keys. 7 chars is a ~150m cell.
  pub geohash_precision: usize,
}

impl Default for CacheConfig {
  fn default() -> Self {
    Self {
      ttl_secs: 300,
      geohash_precision: 7,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  pub radius: RadiusConfig,
  pub cache: CacheConfig,
}

impl Config {
  /// Load config from a TOML file, falling back to defaults for anything
  /// the file does not set. Rejects configs that violate engine invariants.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let raw = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&raw)?;
    config.validate()?;
    debug!(path = %path.display(), "Loaded config");
    Ok(config)
  }

  /// Load config from a file if it exists, otherwise use defaults.
  pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
    if path.exists() { Self::load(path) } else { Ok(Self::default()) }
  }

  /// Serving radii must be strictly positive, and the cache needs a
  /// non-zero TTL and at least one geohash character to key on.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.radius.peak_km <= 0.0 || !self.radius.peak_km.is_finite() {
      return Err(ConfigError::Invalid(format!(
        "radius.peak_km must be > 0, got {}",
        self.radius.peak_km
      )));
    }
    if self.radius.normal_km <= 0.0 || !self.radius.normal_km.is_finite() {
      return Err(ConfigError::Invalid(format!(
        "radius.normal_km must be > 0, got {}",
        self.radius.normal_km
      )));
    }
    if self.cache.ttl_secs == 0 {
      return Err(ConfigError::Invalid("cache.ttl_secs must be > 0".to_string()));
    }
    if self.cache.geohash_precision == 0 || self.cache.geohash_precision > 12 {
      return Err(ConfigError::Invalid(format!(
        "cache.geohash_precision must be in 1..=12, got {}",
        self.cache.geohash_precision
      )));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn defaults_are_valid() {
    let config = Config::default();
    config.validate().expect("defaults must validate");
    assert_eq!(config.radius.peak_km, 3.0);
    assert_eq!(config.radius.normal_km, 5.0);
    assert_eq!(config.cache.ttl_secs, 300);
    assert_eq!(config.cache.geohash_precision, 7);
  }

  #[test]
  fn partial_toml_overrides_merge_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nearbite.toml");
    std::fs::write(&path, "[cache]\nttl_secs = 60\n").expect("write config");

    let config = Config::load(&path).expect("load");
    assert_eq!(config.cache.ttl_secs, 60);
    // Unset sections keep their defaults.
    assert_eq!(config.cache.geohash_precision, 7);
    assert_eq!(config.radius, RadiusConfig::default());
  }

  #[test]
  fn non_positive_radius_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nearbite.toml");
    std::fs::write(&path, "[radius]\npeak_km = 0.0\n").expect("write config");

    assert!(matches!(Config::load(&path), Err(ConfigError::Invalid(_))));
  }

  #[test]
  fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config::load_or_default(&dir.path().join("absent.toml")).expect("load_or_default");
    assert_eq!(config, Config::default());
  }
}
