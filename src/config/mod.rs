// ABOUTME: Configuration module for the RepCoach server
// ABOUTME: Environment-driven settings for binding, CORS, logging level, and the chat fallback model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, LlmConfig, LogLevel, ServerConfig};
