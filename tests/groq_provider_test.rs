// ABOUTME: Integration tests for the Groq provider against a local OpenAI-compatible mock server
// ABOUTME: Verifies request shape, bearer auth, response parsing, error mapping, and health checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use axum::{
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use repcoach_server::errors::ErrorCode;
use repcoach_server::llm::{ChatMessage, ChatRequest, GroqProvider, LlmProvider};
use serde_json::{json, Value};
use tokio::net::TcpListener;

const TEST_KEY: &str = "gsk_test_key";

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TEST_KEY}"))
}

async fn completions(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": {"message": "Invalid API Key", "type": "invalid_request_error"}})),
        );
    }
    assert_eq!(body["stream"], false);
    assert_eq!(body["messages"][0]["role"], "system");

    let question = body["messages"][1]["content"].as_str().unwrap_or_default();
    (
        StatusCode::OK,
        Json(json!({
            "model": body["model"],
            "choices": [{
                "message": {"role": "assistant", "content": format!("Answer to: {question}")},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 12, "completion_tokens": 5, "total_tokens": 17}
        })),
    )
}

async fn models(headers: HeaderMap) -> StatusCode {
    if authorized(&headers) {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    }
}

async fn spawn_mock() -> String {
    let app = Router::new()
        .route("/v1/chat/completions", post(completions))
        .route("/v1/models", get(models));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/v1/")
}

fn question() -> ChatRequest {
    ChatRequest::new(vec![
        ChatMessage::system("You are a coach."),
        ChatMessage::user("How much protein?"),
    ])
    .with_temperature(0.6)
    .with_max_tokens(200)
}

#[tokio::test]
async fn test_completion_round_trip() {
    let base = spawn_mock().await;
    let provider = GroqProvider::new(TEST_KEY)
        .with_model("llama-3.1-8b-instant")
        .with_base_url(base);

    let response = provider.complete(&question()).await.unwrap();
    assert_eq!(response.content, "Answer to: How much protein?");
    assert_eq!(response.model, "llama-3.1-8b-instant");
    assert_eq!(response.finish_reason.as_deref(), Some("stop"));
    assert_eq!(response.usage.unwrap().total_tokens, 17);
}

#[tokio::test]
async fn test_rejected_key_maps_to_auth_error() {
    let base = spawn_mock().await;
    let provider = GroqProvider::new("wrong").with_base_url(base);

    let err = provider.complete(&question()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::AuthInvalid);
    assert!(err.message.contains("Invalid API Key"));
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_mock().await;
    assert!(GroqProvider::new(TEST_KEY)
        .with_base_url(base.clone())
        .health_check()
        .await
        .unwrap());
    assert!(!GroqProvider::new("wrong")
        .with_base_url(base)
        .health_check()
        .await
        .unwrap());
}

#[tokio::test]
async fn test_unreachable_host_is_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let provider = GroqProvider::new(TEST_KEY).with_base_url(format!("http://{addr}/v1"));
    let err = provider.complete(&question()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
}
