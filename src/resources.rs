// ABOUTME: Shared resource container handed to every route handler through axum state
// ABOUTME: Holds the immutable server configuration and the coach chat service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

//! # Server Resources
//!
//! Built once at startup and shared as `Arc<ServerResources>`. Nothing in here
//! is mutated after construction; every request is computed from its own body.

use std::sync::Arc;

use crate::config::environment::ServerConfig;
use crate::services::coach_chat::CoachChat;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Coach chat service, with a language-model provider when one is configured
    pub coach: CoachChat,
}

impl ServerResources {
    /// Create resources from configuration, building the LLM provider when a key is set
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let coach = CoachChat::from_config(&config.llm);
        Self {
            config: Arc::new(config),
            coach,
        }
    }

    /// Replace the coach chat service, used to inject mock providers
    #[must_use]
    pub fn with_coach(mut self, coach: CoachChat) -> Self {
        self.coach = coach;
        self
    }
}
