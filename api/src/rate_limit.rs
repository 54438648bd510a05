use crate::{AppState, errors::ApiError};
use axum::{
    body::Body,
    extract::State,
    http::{Method, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

/// Throttle state-changing requests. Reads are never limited here.
pub async fn limit_writes(State(state): State<AppState>, req: Request<Body>, next: Next) -> Response {
    let is_write = !matches!(*req.method(), Method::GET | Method::HEAD | Method::OPTIONS);

    if is_write && state.write_limiter.check().is_err() {
        warn!("Write rate limit hit: {} {}", req.method(), req.uri().path());
        return ApiError::RateLimited.into_response();
    }

    next.run(req).await
}
