//! Status-capturing response decorator.

use std::io;

use http::{HeaderMap, StatusCode};
use reqmetrics_core::ResponseWriter;

/// Forwards every write to the wrapped sink and remembers the status code.
///
/// Every `write_header` call overwrites the stored code; body writes never
/// touch it.
pub struct StatusRecorder<'a> {
    inner: &'a mut dyn ResponseWriter,
    status: Option<StatusCode>,
}

impl<'a> StatusRecorder<'a> {
    pub fn new(inner: &'a mut dyn ResponseWriter) -> Self {
        Self { inner, status: None }
    }

    /// Last status passed to `write_header`, `200 OK` when there was none.
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }
}

impl ResponseWriter for StatusRecorder<'_> {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        self.inner.headers_mut()
    }

    fn write_header(&mut self, status: StatusCode) {
        self.status = Some(status);
        self.inner.write_header(status);
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }
}
