// ABOUTME: Tests for AppError HTTP rendering through axum IntoResponse
// ABOUTME: Checks status mapping and the {"error": {code, message}} envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use axum::body::to_bytes;
use axum::response::IntoResponse;
use repcoach_server::errors::{AppError, ErrorCode, ErrorResponse};

async fn render(error: AppError) -> (u16, ErrorResponse) {
    let response = error.into_response();
    let status = response.status().as_u16();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_invalid_input_renders_400() {
    let (status, body) = render(AppError::invalid_input("history must be an array")).await;
    assert_eq!(status, 400);
    assert_eq!(body.error.code, ErrorCode::InvalidInput);
    assert_eq!(body.error.message, "history must be an array");
}

#[tokio::test]
async fn test_external_failures_render_5xx() {
    let (status, body) = render(AppError::external_service("Groq", "bad gateway")).await;
    assert_eq!(status, 502);
    assert_eq!(body.error.message, "Groq: bad gateway");

    let (status, _) = render(AppError::external_unavailable("Groq", "timeout")).await;
    assert_eq!(status, 503);

    let (status, _) = render(AppError::internal("boom")).await;
    assert_eq!(status, 500);
}

#[test]
fn test_display_includes_description_and_message() {
    let error = AppError::not_found("Workout");
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert!(error.to_string().contains("Workout"));
}

#[test]
fn test_serde_error_converts() {
    let parse_error = serde_json::from_str::<u32>("nope").unwrap_err();
    let error: AppError = parse_error.into();
    assert_eq!(error.code, ErrorCode::SerializationError);
    assert!(std::error::Error::source(&error).is_some());
}
