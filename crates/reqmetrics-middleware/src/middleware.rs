//! Per-endpoint request metrics around a downstream handler.

use std::sync::Arc;
use std::time::Instant;

use reqmetrics_core::error::Result;
use reqmetrics_core::{endpoint_key, Handler, Request, ResponseWriter};

use crate::config::MetricsConfig;
use crate::obs::metrics::MetricsTable;
use crate::observer::StatusRecorder;

/// Wraps `next` and counts every request it serves, keyed by
/// `METHOD_path`.
pub struct MetricsMiddleware<H> {
    next: H,
    cfg: MetricsConfig,
    table: Arc<MetricsTable>,
}

impl<H: Handler> MetricsMiddleware<H> {
    /// Fails only when `cfg` does not validate.
    pub fn new(next: H, cfg: MetricsConfig) -> Result<Self> {
        cfg.validate()?;
        tracing::info!(version = cfg.version, "metrics middleware ready");
        Ok(Self {
            next,
            cfg,
            table: Arc::new(MetricsTable::new()),
        })
    }

    pub fn cfg(&self) -> &MetricsConfig {
        &self.cfg
    }

    /// Shared handle to the table, for readers living outside the chain.
    pub fn table(&self) -> Arc<MetricsTable> {
        Arc::clone(&self.table)
    }
}

impl<H: Handler> Handler for MetricsMiddleware<H> {
    fn serve(&self, req: &Request, res: &mut dyn ResponseWriter) {
        let start = Instant::now();

        let mut recorder = StatusRecorder::new(res);
        self.next.serve(req, &mut recorder);

        let elapsed = start.elapsed();
        let status = recorder.status();
        let key = endpoint_key(req.method().as_str(), req.uri().path());

        tracing::debug!(key = %key, status = status.as_u16(), elapsed = ?elapsed, "request recorded");
        self.table.record(key, status, elapsed);
    }
}
