//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod rate_source;
mod storage;

pub use rate_source::RateSource;
pub use storage::KeyValueStorage;
