//! Request logging middleware configuration

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use std::time::Duration;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::info_span;

/// Wraps every route of `router` in an `http_request` span with status-class events.
pub fn with_request_logging<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            let origin = request
                .headers()
                .get(http::header::ORIGIN)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("-")
                .to_string();

            info_span!(
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
                origin = %origin,
            )
        })
        .on_request(|request: &Request<Body>, _span: &tracing::Span| {
            tracing::debug!(
                "started processing request {} {}",
                request.method(),
                request.uri().path()
            );
        })
        .on_response(|response: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            let status = response.status();
            let latency_ms = latency.as_millis();

            if status.is_client_error() {
                tracing::warn!(
                    status = status.as_u16(),
                    latency_ms = latency_ms,
                    "client error response"
                );
            } else if status.is_server_error() {
                tracing::error!(
                    status = status.as_u16(),
                    latency_ms = latency_ms,
                    "server error response"
                );
            } else {
                tracing::info!(
                    status = status.as_u16(),
                    latency_ms = latency_ms,
                    "request completed"
                );
            }
        })
        .on_failure(
            |error: ServerErrorsFailureClass, latency: Duration, _span: &tracing::Span| {
                tracing::error!(
                    latency_ms = latency.as_millis(),
                    error = ?error,
                    "request failed"
                );
            },
        );

    router.layer(layer)
}
