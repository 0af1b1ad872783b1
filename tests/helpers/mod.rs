// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the axum request driver and canned training histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;

use std::sync::Arc;

use repcoach_server::config::environment::ServerConfig;
use repcoach_server::resources::ServerResources;
use serde_json::{json, Value};

/// Resources with default configuration and no language-model provider
#[allow(dead_code)]
pub fn test_resources() -> Arc<ServerResources> {
    Arc::new(ServerResources::new(ServerConfig::default()))
}

/// Three consecutive leg sessions, which trips fatigue detection
#[allow(dead_code)]
pub fn leg_day_history() -> Value {
    json!([
        {"name": "Squats"},
        {"name": "Lunges"},
        {"name": "Leg Press"}
    ])
}

/// Varied upper-body history ending on back then chest
#[allow(dead_code)]
pub fn varied_history() -> Value {
    json!([
        {"name": "Squats"},
        {"name": "Barbell Row"},
        {"name": "Bench Press"}
    ])
}
