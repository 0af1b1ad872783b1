// ABOUTME: Core types and constants for the RepCoach workout recommendation service
// ABOUTME: Foundation crate with error handling, data models, and the fixed exercise tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

#![deny(unsafe_code)]

//! # RepCoach Core
//!
//! Shared types for the RepCoach service. This crate changes rarely so the
//! engine and server crates compile incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **models**: History, recommendation and weekly plan data structures
//! - **constants**: Muscle map, workout catalog and rule tables

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Workout history, recommendation and plan data models
pub mod models;

/// Fixed lookup tables and rule constants
pub mod constants;
