use thiserror::Error;

/// Errors from restaurant/menu store queries.
#[derive(Debug, Error)]
pub enum StoreError {
  /// A single query failed; the store itself may still be healthy.
  #[error("Store query failed: {0}")]
  Query(String),
  /// The store backend is unreachable.
  #[error("Store unavailable: {0}")]
  Unavailable(String),
}

/// Errors from the byte cache.
///
/// The engine never fails a request over these: any cache error degrades
/// to a direct store scan for that call.
#[derive(Debug, Error)]
pub enum CacheError {
  #[error("Cache backend unavailable: {0}")]
  Unavailable(String),
  #[error("Cache backend error: {0}")]
  Backend(String),
}
