//! Shared application state for the API process.

use std::sync::Arc;

use agnos_core::Result;

use crate::config::ApiConfig;
use crate::obs::metrics::ApiMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ApiConfig,
    metrics: ApiMetrics,
}

impl AppState {
    /// Build application state. Returns Result so main can handle metric
    /// registration errors gracefully (no panic).
    pub fn new(cfg: ApiConfig) -> Result<Self> {
        let metrics = ApiMetrics::new()?;
        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, metrics }),
        })
    }

    pub fn cfg(&self) -> &ApiConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &ApiMetrics {
        &self.inner.metrics
    }
}
