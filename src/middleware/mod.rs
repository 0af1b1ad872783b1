// ABOUTME: HTTP middleware for cross-origin access and per-request tracing
// ABOUTME: Provides the CORS layer and request-id aware spans used by the router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

pub mod cors;
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing
pub use tracing::{create_request_span, make_request_span, request_id_layers};
