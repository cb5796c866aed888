//! reqmetrics: per-endpoint request counters and latency sums for a
//! handler chain.
//!
//! `core` holds the `Handler`/`ResponseWriter` contracts and key
//! derivation; `middleware` holds `MetricsMiddleware`, its table, config
//! and the axum bridge.

pub mod core {
    pub use reqmetrics_core::*;
}

pub mod middleware {
    pub use reqmetrics_middleware::*;
}
