// ABOUTME: Domain service layer sitting between HTTP routes and the rules engine
// ABOUTME: Houses the coach chat service that routes messages to rules or the language model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

//! Domain services
//!
//! Route handlers stay thin: they extract and validate the request, then call
//! into a service. Services own orchestration that spans the engine and
//! external collaborators.

/// Intent-routed coach chat with a bounded language-model fallback
pub mod coach_chat;
