//! Response sink capability set.

use std::io;

use bytes::{Bytes, BytesMut};
use http::{HeaderMap, StatusCode};

/// Destination a handler writes its response into.
///
/// Commit rule, as in conventional HTTP servers:
/// - the first `write_header` commits the status;
/// - a `write` before any `write_header` commits `200 OK`;
/// - once committed, further `write_header` calls are ignored.
///
/// Headers must be set before the status is committed to take effect on a
/// streaming sink.
pub trait ResponseWriter: Send {
    fn headers_mut(&mut self) -> &mut HeaderMap;

    fn write_header(&mut self, status: StatusCode);

    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
}

/// In-memory response sink.
#[derive(Debug, Default)]
pub struct BufferedResponse {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: BytesMut,
}

impl BufferedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed status, or `200 OK` if the handler never committed one.
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    pub fn is_committed(&self) -> bool {
        self.status.is_some()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_parts(self) -> (StatusCode, HeaderMap, Bytes) {
        (self.status(), self.headers, self.body.freeze())
    }

    pub fn into_response(self) -> http::Response<Bytes> {
        let (status, headers, body) = self.into_parts();
        let mut resp = http::Response::new(body);
        *resp.status_mut() = status;
        *resp.headers_mut() = headers;
        resp
    }
}

impl ResponseWriter for BufferedResponse {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn write_header(&mut self, status: StatusCode) {
        if self.status.is_none() {
            self.status = Some(status);
        }
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.status.is_none() {
            self.status = Some(StatusCode::OK);
        }
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }
}
