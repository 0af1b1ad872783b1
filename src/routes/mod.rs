// ABOUTME: Route module organization for the RepCoach HTTP endpoints
// ABOUTME: Groups health, recommendation, plan, and chat routes with shared request extraction helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

//! Route module for the RepCoach server
//!
//! Each domain module contains route definitions and thin handlers that
//! delegate to the rules engine or the service layer.

use axum::extract::rejection::JsonRejection;
use tracing::debug;

use crate::errors::AppError;

/// Coach chat route
pub mod chat;
/// Health check and system status routes
pub mod health;
/// Weekly plan route
pub mod plans;
/// Next-workout recommendation route
pub mod recommendations;

pub use chat::ChatRoutes;
pub use health::HealthRoutes;
pub use plans::PlanRoutes;
pub use recommendations::RecommendationRoutes;

/// Turn a body extraction failure into the standard error envelope
pub(crate) fn json_rejection(rejection: JsonRejection) -> AppError {
    debug!(status = %rejection.status(), "Rejected request body: {}", rejection.body_text());
    AppError::invalid_input(format!("Invalid JSON body: {}", rejection.body_text()))
}
