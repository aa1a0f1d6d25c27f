use store::StoreError;
use thiserror::Error;

/// Hard failures the engine surfaces to callers.
///
/// Deliberately small: invalid coordinates yield empty results, cache
/// trouble (including snapshot encode and decode) degrades to a store
/// scan, a malformed record is skipped, and a failing search sub-source is
/// reported per-source in the outcome. Only a failing full-catalog scan
/// can end up here.
#[derive(Debug, Error)]
pub enum EngineError {
  #[error("Store error: {0}")]
  Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
