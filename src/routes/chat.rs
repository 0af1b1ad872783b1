// ABOUTME: Coach chat route classifying a message and replying from rules or the language model
// ABOUTME: Always answers 200 with a reply; model failures degrade to fixed text inside the service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

//! Chat routes for the coach assistant

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use repcoach_core::models::HistoryEntry;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::json_rejection;
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::coach_chat::ChatReply;

/// Request body for `POST /chat`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoachChatRequest {
    /// User message; absent means empty
    #[serde(default)]
    pub message: Option<String>,
    /// Recent sessions used by rule-based replies
    #[serde(default)]
    pub history: Option<Vec<HistoryEntry>>,
}

/// Chat routes handler
pub struct ChatRoutes;

impl ChatRoutes {
    /// Create the chat route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/chat", post(Self::handle_chat))
            .with_state(resources)
    }

    async fn handle_chat(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<CoachChatRequest>, JsonRejection>,
    ) -> Result<Json<ChatReply>, AppError> {
        let Json(request) = payload.map_err(json_rejection)?;
        let message = request.message.unwrap_or_default();
        let history = request.history.unwrap_or_default();

        let reply = resources.coach.reply(&message, &history).await;
        info!(intent = %reply.intent, "Chat message answered");

        Ok(Json(reply))
    }
}
