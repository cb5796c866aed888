//! reqmetrics middleware library.
//!
//! Wires the response observer, the per-endpoint metrics table and the
//! metrics middleware together, plus an axum bridge so a handler chain can
//! be mounted in a real HTTP server.

pub mod bridge;
pub mod config;
pub mod middleware;
pub mod obs;
pub mod observer;

pub use config::MetricsConfig;
pub use middleware::MetricsMiddleware;
pub use obs::metrics::{EndpointMetrics, MetricsTable};
pub use observer::StatusRecorder;
