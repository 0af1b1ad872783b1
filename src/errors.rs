// ABOUTME: Re-exports the unified error types from repcoach-core for server code
// ABOUTME: Keeps `crate::errors::AppError` paths stable for routes, services, and the LLM layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

pub use repcoach_core::errors::{
    AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails,
};
