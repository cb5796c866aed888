//! Helpers shared by middleware integration tests.

#![allow(dead_code)]

use bytes::Bytes;
use http::Method;
use tracing_subscriber::{fmt, EnvFilter};

use reqmetrics_core::Request;

/// Route test logs through the harness; `RUST_LOG=debug` shows them.
pub fn init_tracing() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn request(method: Method, uri: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Bytes::new())
        .unwrap()
}

pub fn get(uri: &str) -> Request {
    request(Method::GET, uri)
}
