// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Serves the root banner plus liveness and readiness JSON with timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

//! Health check routes for service monitoring

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::constants::service_names;
use crate::resources::ServerResources;

/// Plain-text banner served on `/`
pub const ROOT_BANNER: &str = "RepCoach API running";

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        async fn root_handler() -> &'static str {
            ROOT_BANNER
        }

        async fn health_handler() -> Json<Value> {
            Json(json!({
                "status": "healthy",
                "service": service_names::REPCOACH_SERVER,
                "version": env!("CARGO_PKG_VERSION"),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        async fn ready_handler(State(resources): State<Arc<ServerResources>>) -> Json<Value> {
            Json(json!({
                "status": "ready",
                "service": service_names::REPCOACH_SERVER,
                "ai_fallback": resources.coach.is_ai_configured(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        Router::new()
            .route("/", get(root_handler))
            .route("/health", get(health_handler))
            .route("/ready", get(ready_handler))
            .with_state(resources)
    }
}
