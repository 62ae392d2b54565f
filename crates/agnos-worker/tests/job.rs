#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use agnos_core::RuntimeEnv;
use agnos_worker::{app_state::AppState, config::WorkerConfig, job};

fn test_state() -> AppState {
    let cfg = WorkerConfig {
        metrics_port: 9091,
        cron_schedule: "* * * * *".to_string(),
        timezone: chrono_tz::Tz::UTC,
        environment: RuntimeEnv::from_label("test"),
    };
    AppState::new(cfg).expect("state must build")
}

// Paused clock: the stub's 200ms delay auto-advances instead of waiting.
#[tokio::test(start_paused = true)]
async fn one_run_increments_success_by_exactly_one() {
    let state = test_state();
    assert_eq!(state.metrics().jobs_success.get(), 0);

    job::run_once(&state).await;

    assert_eq!(state.metrics().jobs_success.get(), 1);
    assert_eq!(state.metrics().jobs_failure.get(), 0);
    assert_eq!(state.metrics().job_duration.get_sample_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn runs_accumulate_in_the_success_counter() {
    let state = test_state();

    job::run_once(&state).await;
    job::run_once(&state).await;
    job::run_once(&state).await;

    assert_eq!(state.metrics().jobs_success.get(), 3);
    assert_eq!(state.metrics().job_duration.get_sample_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn job_run_shows_up_in_rendered_metrics() {
    let state = test_state();
    job::run_once(&state).await;

    let text = state.metrics().render().unwrap();
    assert!(text.contains("worker_jobs_success_total 1"));
    assert!(text.contains("worker_job_duration_seconds_count 1"));
}
