// ABOUTME: HTTP server assembly: router composition, middleware stack, and the serve loop
// ABOUTME: Binds the configured address and shuts down gracefully on Ctrl+C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

//! # HTTP Server
//!
//! [`build_router`] is separate from [`run`] so integration tests can drive
//! the full middleware stack with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::Uri;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::constants::http_limits::MAX_REQUEST_BODY_BYTES;
use crate::errors::AppError;
use crate::middleware::{make_request_span, request_id_layers, setup_cors};
use crate::resources::ServerResources;
use crate::routes::{ChatRoutes, HealthRoutes, PlanRoutes, RecommendationRoutes};

/// Compose every route with the shared middleware stack
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(RecommendationRoutes::routes())
        .merge(PlanRoutes::routes())
        .merge(ChatRoutes::routes(resources))
        .fallback(route_not_found)
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(request_id_layers())
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// Bind the configured address and serve until Ctrl+C
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let bind_address = resources.config.bind_address();
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    info!("RepCoach API listening on http://{}", bind_address);
    log_endpoints(&bind_address);

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("RepCoach API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[allow(clippy::cognitive_complexity)]
fn log_endpoints(bind_address: &str) {
    info!("=== Available API Endpoints ===");
    info!("   Status:            GET  http://{bind_address}/");
    info!("   Health:            GET  http://{bind_address}/health");
    info!("   Readiness:         GET  http://{bind_address}/ready");
    info!("   Recommend Workout: POST http://{bind_address}/recommend-workout");
    info!("   Weekly Plan:       POST http://{bind_address}/weekly-plan");
    info!("   Coach Chat:        POST http://{bind_address}/chat");
}
