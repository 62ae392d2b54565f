//! The scheduled stub job and its cron loop.
//!
//! `update_timestamps` is a placeholder for the real batch update: it
//! sleeps ~200ms and reports a simulated record count. Failures are caught
//! here, counted, and logged; the process keeps running either way.

use std::str::FromStr;
use std::time::Duration;

use chrono::Utc;
use cron::Schedule;
use rand::Rng;

use agnos_core::{AgnosError, Result};

use crate::app_state::AppState;
use crate::config;

pub const JOB_NAME: &str = "update_timestamps";

const STUB_DELAY: Duration = Duration::from_millis(200);

/// Parse a standard 5-field cron expression.
///
/// The `cron` crate wants a leading seconds field; operators supply the
/// classic minute-first form, so seconds are pinned to `0` here. Field
/// count is checked up front to keep the error message in the operator's
/// terms instead of the library's.
pub fn parse_schedule(expr: &str) -> Result<Schedule> {
    let fields = expr.split_whitespace().count();
    if fields != 5 {
        return Err(AgnosError::Schedule(format!(
            "CRON_SCHEDULE must have 5 fields (minute hour day-of-month month day-of-week), got {fields}: {expr:?}"
        )));
    }
    Schedule::from_str(&format!("0 {}", expr.trim()))
        .map_err(|e| AgnosError::Schedule(format!("invalid CRON_SCHEDULE {expr:?}: {e}")))
}

/// Stub job body. Returns the number of records "updated".
async fn update_timestamps() -> Result<u64> {
    // Stubbed: replace with the real DB call.
    tokio::time::sleep(STUB_DELAY).await;
    Ok(rand::thread_rng().gen_range(0..100))
}

/// Run the job once, recording outcome metrics and logs.
pub async fn run_once(state: &AppState) {
    let environment = state.cfg().environment.clone();
    let date = Utc::now().format("%Y-%m-%d").to_string();

    tracing::info!(
        service = config::SERVICE,
        environment = %environment,
        job = JOB_NAME,
        date = %date,
        "job started"
    );

    let timer = state.metrics().job_duration.start_timer();
    match update_timestamps().await {
        Ok(records_updated) => {
            state.metrics().jobs_success.inc();
            timer.observe_duration();
            tracing::info!(
                service = config::SERVICE,
                environment = %environment,
                job = JOB_NAME,
                date = %date,
                records_updated,
                "job completed"
            );
        }
        Err(e) => {
            state.metrics().jobs_failure.inc();
            timer.observe_duration();
            tracing::error!(
                service = config::SERVICE,
                environment = %environment,
                job = JOB_NAME,
                date = %date,
                error = %e,
                "job failed"
            );
        }
    }
}

/// Fire once immediately, then on every schedule tick in the configured
/// zone. Runs forever unless the schedule yields no further fire times.
pub async fn run_scheduler(state: AppState, schedule: Schedule) {
    run_once(&state).await;

    loop {
        let Some(next) = schedule.upcoming(state.cfg().timezone).next() else {
            tracing::warn!(
                service = config::SERVICE,
                environment = %state.cfg().environment,
                "schedule has no upcoming fire times; scheduler stopping"
            );
            return;
        };

        let wait = (next.with_timezone(&Utc) - Utc::now())
            .to_std()
            .unwrap_or(Duration::ZERO);
        tokio::time::sleep(wait).await;

        run_once(&state).await;
    }
}
