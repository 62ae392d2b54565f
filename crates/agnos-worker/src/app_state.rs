//! Shared state for the worker process: config plus the metrics registry,
//! reachable from both the HTTP handlers and the scheduler task.

use std::sync::Arc;

use agnos_core::Result;

use crate::config::WorkerConfig;
use crate::obs::metrics::WorkerMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: WorkerConfig,
    metrics: WorkerMetrics,
}

impl AppState {
    pub fn new(cfg: WorkerConfig) -> Result<Self> {
        let metrics = WorkerMetrics::new()?;
        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, metrics }),
        })
    }

    pub fn cfg(&self) -> &WorkerConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &WorkerMetrics {
        &self.inner.metrics
    }
}
