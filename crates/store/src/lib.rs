//! Store seams for the nearbite engine.
//!
//! The engine only ever reads: restaurants, menus and the byte cache are
//! all behind async traits so the production backends can be swapped for
//! in-memory doubles in tests. This crate ships the traits, their error
//! types, an in-memory store (with optional injected latency for
//! concurrency tests) and a moka-backed cache.

mod cache;
mod error;
mod memory;
mod traits;

pub use cache::{MokaCache, UnavailableCache};
pub use error::{CacheError, StoreError};
pub use memory::MemoryStore;
pub use traits::{CacheStore, MenuStore, RestaurantStore};
