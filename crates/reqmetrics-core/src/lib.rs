//! reqmetrics core: transport-agnostic handler contracts, the shared error
//! type, and endpoint key derivation.
//!
//! Nothing here depends on a runtime or server framework. The middleware
//! crate builds on these traits, and hosts adapt them to their own stack.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod chain;

/// Shared result type.
pub use error::{MetricsError, Result};
pub use chain::{endpoint_key, BufferedResponse, Handler, Request, ResponseWriter};
