//! Core domain types and geo primitives for nearbite.
//!
//! This crate is dependency-light on purpose: it holds the stored entity
//! shapes, the public records the engine returns, the explicit conversions
//! between the two, the geo math (haversine + geohash) and the config system.
//! Everything stateful (stores, cache, the engine itself) lives upstream.

pub mod config;
pub mod domain;
pub mod geo;

pub use config::{CacheConfig, Config, ConfigError, RadiusConfig};
pub use domain::{Item, ItemEntity, Menu, MenuEntity, Restaurant, RestaurantEntity};
pub use geo::QueryPoint;
