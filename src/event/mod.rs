//! Rate-limited wrappers for UI event callbacks

/// Throttle and debounce wrappers over callbacks
pub mod rate_limit;

pub use rate_limit::{Debounce, Throttle};
