//! Handler chain contracts.
//!
//! - `writer`: the response sink capability set and an in-memory sink.
//! - `handler`: the downstream handler trait.
//! - `key`: endpoint identity derivation.

pub mod handler;
pub mod key;
pub mod writer;

pub use handler::{Handler, Request};
pub use key::{endpoint_key, strip_query};
pub use writer::{BufferedResponse, ResponseWriter};
