//! The nearbite engine: geo-proximity filtering and multi-criteria search.
//!
//! Layout mirrors the pipeline:
//!
//! - [`policy`] - peak-hour serving radius selection
//! - [`proximity`] - the open-hours + great-circle distance predicate
//! - [`nearby`] - cache-aside "restaurants near here" pipeline
//! - [`search`] - four-way search aggregation, sequential and concurrent
//! - [`service`] - the [`Nearbite`] facade callers hold
//!
//! Transport, persistence and serialization at the boundary are someone
//! else's problem; the engine consumes store traits and returns records.

pub mod clock;
pub mod error;
pub mod nearby;
pub mod policy;
pub mod proximity;
pub mod search;
pub mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::EngineError;
pub use search::{SearchOutcome, SearchSource, SourceFailure};
pub use service::Nearbite;
