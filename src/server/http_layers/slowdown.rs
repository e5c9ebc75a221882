//! Dev-only layer that delays every request, for exercising spinners and
//! timeouts in frontends.

use axum::{body::Body, http::Request, middleware::Next, response::IntoResponse};
use std::time::Duration;

const SLOWDOWN_MILLIS: u64 = 350;

pub async fn slowdown_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    tokio::time::sleep(Duration::from_millis(SLOWDOWN_MILLIS)).await;
    next.run(request).await
}
