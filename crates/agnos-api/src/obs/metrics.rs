//! Prometheus registry for the API process.
//!
//! One registry per process: default process metrics plus the HTTP request
//! counter/histogram. Rendered on demand by the `/metrics` handler.

use std::fmt::Write;
use std::time::Duration;

use prometheus::process_collector::ProcessCollector;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

use agnos_core::Result;

/// Request-duration buckets in seconds.
const DURATION_BUCKETS: &[f64] = &[0.05, 0.1, 0.3, 0.5, 1.0, 2.0, 5.0];

const REQUEST_LABELS: &[&str] = &["method", "route", "status_code"];

const REQUESTS_NAME: &str = "http_requests_total";
const REQUESTS_HELP: &str = "Total number of HTTP requests";
const DURATION_NAME: &str = "http_request_duration_seconds";
const DURATION_HELP: &str = "Duration of HTTP requests in seconds";

pub struct ApiMetrics {
    registry: Registry,
    http_requests_total: IntCounterVec,
    http_request_duration_seconds: HistogramVec,
}

impl ApiMetrics {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();
        registry.register(Box::new(ProcessCollector::for_self()))?;

        let http_requests_total = IntCounterVec::new(
            Opts::new(REQUESTS_NAME, REQUESTS_HELP),
            REQUEST_LABELS,
        )?;
        registry.register(Box::new(http_requests_total.clone()))?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(DURATION_NAME, DURATION_HELP).buckets(DURATION_BUCKETS.to_vec()),
            REQUEST_LABELS,
        )?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
        })
    }

    /// Record one completed request.
    pub fn observe_request(&self, method: &str, route: &str, status: u16, elapsed: Duration) {
        let status = status.to_string();
        let labels = [method, route, status.as_str()];
        self.http_requests_total.with_label_values(&labels).inc();
        self.http_request_duration_seconds
            .with_label_values(&labels)
            .observe(elapsed.as_secs_f64());
    }

    /// Render the whole registry in Prometheus text exposition format.
    ///
    /// Labeled vec families with no recorded children are dropped by the
    /// encoder, but scrapes must still announce the request metrics before
    /// the first request completes, so the `# HELP`/`# TYPE` headers are
    /// appended for any request family that has no samples yet.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        TextEncoder::new().encode_utf8(&self.registry.gather(), &mut out)?;

        for (name, kind, help) in [
            (REQUESTS_NAME, "counter", REQUESTS_HELP),
            (DURATION_NAME, "histogram", DURATION_HELP),
        ] {
            if !out.contains(&format!("# TYPE {name} ")) {
                let _ = writeln!(out, "# HELP {name} {help}");
                let _ = writeln!(out, "# TYPE {name} {kind}");
            }
        }

        Ok(out)
    }
}
