//! agnos worker process.
//!
//! - Scheduled stub job: once at startup, then on `CRON_SCHEDULE`
//!   (5-field cron, evaluated in `TZ`)
//! - HTTP surface: `/health`, `/metrics` on `METRICS_PORT` (default 9091)
//! - SIGINT/SIGTERM: log and exit immediately (no drain)

use std::future::IntoFuture;
use std::net::SocketAddr;

use agnos_core::{obs, Result};
use agnos_worker::{app_state::AppState, config, config::WorkerConfig, job, router};

#[tokio::main]
async fn main() {
    obs::init_logging();

    if let Err(e) = run().await {
        tracing::error!(service = config::SERVICE, error = %e, "fatal");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = WorkerConfig::from_env()?;
    let schedule = job::parse_schedule(&cfg.cron_schedule)?;
    let listen = SocketAddr::from(([0, 0, 0, 0], cfg.metrics_port));
    let environment = cfg.environment.clone();

    tracing::info!(
        service = config::SERVICE,
        environment = %environment,
        schedule = %cfg.cron_schedule,
        timezone = %cfg.timezone,
        "Worker starting"
    );

    let state = AppState::new(cfg)?;
    let app = router::build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(listen).await?;
    tracing::info!(
        service = config::SERVICE,
        environment = %environment,
        port = listen.port(),
        "Worker metrics available"
    );

    // Scheduler and server share the runtime; the task dies with the process.
    tokio::spawn(job::run_scheduler(state, schedule));

    tokio::select! {
        res = axum::serve(listener, app).into_future() => res?,
        sig = shutdown_signal() => {
            tracing::info!(service = config::SERVICE, environment = %environment, signal = sig, "shutting down");
        }
    }

    Ok(())
}

#[cfg(unix)]
async fn shutdown_signal() -> &'static str {
    use tokio::signal::unix::{signal, SignalKind};

    let ctrl_c = tokio::signal::ctrl_c();
    match signal(SignalKind::terminate()) {
        Ok(mut term) => {
            tokio::select! {
                _ = ctrl_c => "SIGINT",
                _ = term.recv() => "SIGTERM",
            }
        }
        Err(_) => {
            let _ = ctrl_c.await;
            "SIGINT"
        }
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() -> &'static str {
    let _ = tokio::signal::ctrl_c().await;
    "SIGINT"
}
