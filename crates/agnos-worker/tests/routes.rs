#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use agnos_core::RuntimeEnv;
use agnos_worker::{app_state::AppState, config::WorkerConfig, router};

fn test_state() -> AppState {
    let cfg = WorkerConfig {
        metrics_port: 9091,
        cron_schedule: "* * * * *".to_string(),
        timezone: chrono_tz::Tz::UTC,
        environment: RuntimeEnv::from_label("test"),
    };
    AppState::new(cfg).expect("state must build")
}

async fn get(app: Router, path: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn health_returns_ok_with_environment_and_timestamp() {
    let app = router::build_router(test_state());
    let (status, body) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);

    let v: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["status"], "ok");
    assert_eq!(v["service"], "worker");
    assert_eq!(v["environment"], "test");
    assert!(v["timestamp"].is_string());
}

#[tokio::test]
async fn metrics_exposes_job_counters() {
    let app = router::build_router(test_state());
    let (status, body) = get(app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("worker_jobs_success_total"));
    assert!(body.contains("worker_jobs_failure_total"));
    assert!(body.contains("worker_job_duration_seconds"));
}

#[tokio::test]
async fn unknown_path_is_404() {
    let app = router::build_router(test_state());
    let (status, _) = get(app, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
