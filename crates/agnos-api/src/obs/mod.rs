//! Request observability: per-request metrics and structured access logs.

pub mod metrics;

use std::time::Instant;

use axum::extract::{MatchedPath, Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::app_state::AppState;
use crate::config;

/// Times every request, then increments the request counter and observes
/// the duration histogram exactly once per completed response.
///
/// The `route` label prefers the matched route template so unmatched paths
/// cannot blow up label cardinality; for 404s it falls back to the raw path.
pub async fn track_requests(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| path.clone());

    let start = Instant::now();
    let resp = next.run(req).await;
    let status = resp.status().as_u16();

    state
        .metrics()
        .observe_request(&method, &route, status, start.elapsed());

    tracing::info!(
        service = config::SERVICE,
        environment = %state.cfg().environment,
        method = %method,
        path = %path,
        status,
        "request"
    );

    resp
}
