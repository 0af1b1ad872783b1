// ABOUTME: Main library entry point for the RepCoach workout recommendation API
// ABOUTME: Wires configuration, logging, the LLM fallback, coach chat, and axum routes together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

#![deny(unsafe_code)]

//! # RepCoach Server
//!
//! A stateless HTTP API that recommends the next workout, builds weekly
//! training splits, and answers coach chat questions from a caller-supplied
//! training history.
//!
//! ## Architecture
//!
//! - **repcoach-core**: error type, data models, muscle map and workout catalog
//! - **repcoach-intelligence**: the rules engine (normalization, fatigue,
//!   leveling, recommendation, weekly plans, intent classification)
//! - **this crate**: configuration, logging, the language-model fallback and
//!   the axum HTTP surface
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use repcoach_server::config::environment::ServerConfig;
//! use repcoach_server::resources::ServerResources;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::new(config));
//!     repcoach_server::server::run(resources).await
//! }
//! ```

/// Environment configuration
pub mod config;

/// Server constants and fixed chat texts
pub mod constants;

/// Error types shared with repcoach-core
pub mod errors;

/// Language-model provider abstraction and the Groq client
pub mod llm;

/// Structured logging setup
pub mod logging;

/// CORS and request tracing middleware
pub mod middleware;

/// Shared state handed to route handlers
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and the serve loop
pub mod server;

/// Domain services between routes and the engine
pub mod services;
