use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::Instrument;
use uuid::Uuid;

use ajaxlab_auth::{AuthState, TokenValidator};

#[derive(Clone)]
pub struct AuthLayerState {
    pub tokens: Arc<dyn TokenValidator>,
}

/// Resolve the request's `AuthState` from its bearer token and attach it.
///
/// Never rejects: a missing, malformed, forged or expired token leaves the
/// request unauthenticated and it proceeds.
pub async fn auth_middleware(
    State(state): State<AuthLayerState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let auth = AuthState::from_authorization(
        authorization(req.headers()),
        state.tokens.as_ref(),
        Utc::now(),
    );
    if let Some(identity) = auth.identity() {
        tracing::debug!(username = %identity, "request authenticated");
    }
    req.extensions_mut().insert(auth);

    next.run(req).await
}

fn authorization(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
}

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Wrap each request in a span carrying a fresh request id, and log its outcome.
pub async fn trace_requests(req: axum::http::Request<axum::body::Body>, next: Next) -> Response {
    let request_id = Uuid::now_v7();
    let span = tracing::info_span!(
        "request",
        %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    async move {
        let started = Instant::now();
        let mut res = next.run(req).await;
        tracing::info!(
            status = res.status().as_u16(),
            latency_ms = millis(started.elapsed()),
            "request completed"
        );
        if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        res
    }
    .instrument(span)
    .await
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latency_saturates_instead_of_wrapping() {
        assert_eq!(millis(Duration::from_micros(2_500)), 2);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }
}
