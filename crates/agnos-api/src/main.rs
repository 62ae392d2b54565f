//! agnos API process.
//!
//! - HTTP surface: `/`, `/health`, `/metrics` on `PORT` (default 8000)
//! - Per-request counter/histogram + one JSON access-log line per request
//! - SIGINT/SIGTERM: log and exit immediately (no drain)

use std::future::IntoFuture;
use std::net::SocketAddr;

use agnos_api::{app_state::AppState, config, config::ApiConfig, router};
use agnos_core::{obs, Result};

#[tokio::main]
async fn main() {
    obs::init_logging();

    if let Err(e) = run().await {
        tracing::error!(service = config::SERVICE, error = %e, "fatal");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = ApiConfig::from_env()?;
    let listen = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    let environment = cfg.environment.clone();

    let state = AppState::new(cfg)?;
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen).await?;
    tracing::info!(
        service = config::SERVICE,
        environment = %environment,
        port = listen.port(),
        "API started"
    );

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
