use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use http::StatusCode;

/// Statuses at or above this are counted as errors.
pub const ERROR_STATUS_THRESHOLD: u16 = 400;

/// Whether a captured status counts as an error response.
pub fn is_error_status(status: StatusCode) -> bool {
    status.as_u16() >= ERROR_STATUS_THRESHOLD
}

/// Aggregate record for one endpoint key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EndpointMetrics {
    pub request_count: u64,
    pub success_count: u64,
    pub error_count: u64,
    pub duration_sum: Duration,
}

impl EndpointMetrics {
    fn first(status: StatusCode, elapsed: Duration) -> Self {
        let mut m = Self::default();
        m.observe(status, elapsed);
        m
    }

    fn observe(&mut self, status: StatusCode, elapsed: Duration) {
        self.request_count += 1;
        if is_error_status(status) {
            self.error_count += 1;
        } else {
            self.success_count += 1;
        }
        self.duration_sum = self.duration_sum.saturating_add(elapsed);
    }

    /// Mean latency, `None` before the first request.
    pub fn mean_duration(&self) -> Option<Duration> {
        let n = u32::try_from(self.request_count).ok().filter(|n| *n > 0)?;
        Some(self.duration_sum / n)
    }
}

/// Endpoint key -> aggregate record.
///
/// Entries are never evicted: one record per distinct `METHOD_path` seen
/// for the lifetime of the table.
#[derive(Debug, Default)]
pub struct MetricsTable {
    endpoints: Mutex<HashMap<String, EndpointMetrics>>,
}

impl MetricsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished request. Lookup, insert and increments happen
    /// under a single lock acquisition.
    pub fn record(&self, key: String, status: StatusCode, elapsed: Duration) {
        let mut endpoints = self.lock();
        match endpoints.get_mut(&key) {
            Some(m) => m.observe(status, elapsed),
            None => {
                endpoints.insert(key, EndpointMetrics::first(status, elapsed));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<EndpointMetrics> {
        self.lock().get(key).copied()
    }

    /// Copy of every record.
    pub fn snapshot(&self) -> HashMap<String, EndpointMetrics> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic cannot leave a record half-updated, so a poisoned lock is
    // still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, EndpointMetrics>> {
        self.endpoints.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
