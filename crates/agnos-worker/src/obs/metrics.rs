//! Prometheus registry for the worker process.
//!
//! Default process metrics plus the job outcome counters and duration
//! histogram (default buckets; job runtime is dominated by the stub delay).

use prometheus::process_collector::ProcessCollector;
use prometheus::{Histogram, HistogramOpts, IntCounter, Registry, TextEncoder};

use agnos_core::Result;

pub struct WorkerMetrics {
    registry: Registry,
    pub jobs_success: IntCounter,
    pub jobs_failure: IntCounter,
    pub job_duration: Histogram,
}

impl WorkerMetrics {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();
        registry.register(Box::new(ProcessCollector::for_self()))?;

        let jobs_success = IntCounter::new(
            "worker_jobs_success_total",
            "Total successful worker job runs",
        )?;
        registry.register(Box::new(jobs_success.clone()))?;

        let jobs_failure = IntCounter::new(
            "worker_jobs_failure_total",
            "Total failed worker job runs",
        )?;
        registry.register(Box::new(jobs_failure.clone()))?;

        let job_duration = Histogram::with_opts(HistogramOpts::new(
            "worker_job_duration_seconds",
            "Duration of worker job execution",
        ))?;
        registry.register(Box::new(job_duration.clone()))?;

        Ok(Self {
            registry,
            jobs_success,
            jobs_failure,
            job_duration,
        })
    }

    /// Render the whole registry in Prometheus text exposition format.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        TextEncoder::new().encode_utf8(&self.registry.gather(), &mut out)?;
        Ok(out)
    }
}
