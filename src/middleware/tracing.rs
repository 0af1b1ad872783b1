// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Assigns x-request-id to every request and opens an http_request span carrying it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

use axum::body::Body;
use http::{HeaderName, Request};
use tower::layer::util::{Identity, Stack};
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

use crate::constants::http_limits::REQUEST_ID_HEADER;

/// Create a tracing span for HTTP requests
pub fn create_request_span(method: &str, path: &str, request_id: &str) -> tracing::Span {
    tracing::info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = %request_id,
        status_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    )
}

/// Span factory for `TraceLayer::make_span_with`
///
/// Reads the id set by [`request_id_layers`], so the set layer must run first.
pub fn make_request_span(request: &Request<Body>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");
    create_request_span(request.method().as_str(), request.uri().path(), request_id)
}

/// Layers that generate a UUID `x-request-id` when the client sent none and echo it on the response
pub fn request_id_layers() -> ServiceBuilder<
    Stack<PropagateRequestIdLayer, Stack<SetRequestIdLayer<MakeRequestUuid>, Identity>>,
> {
    let header = HeaderName::from_static(REQUEST_ID_HEADER);
    ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(header.clone(), MakeRequestUuid))
        .layer(PropagateRequestIdLayer::new(header))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_span_falls_back_to_unknown_request_id() {
        let request = Request::builder()
            .uri("/recommend-workout")
            .body(Body::empty())
            .unwrap();
        let span = make_request_span(&request);
        // Disabled when no subscriber is installed; creation must still succeed
        let _entered = span.enter();
    }
}
