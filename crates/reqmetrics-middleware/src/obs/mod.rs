//! In-process request metrics.
//!
//! Plain counters and duration sums per endpoint, guarded by one mutex.
//! Nothing is exported; readers take a snapshot under the same lock.

pub mod metrics;
