// ABOUTME: Next-workout recommendation route backed by the rules engine
// ABOUTME: Accepts a training history and returns workout, duration, intensity, and reason
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use repcoach_core::models::{HistoryEntry, Recommendation};
use repcoach_intelligence::recommend_workout;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::json_rejection;
use crate::errors::AppError;

/// Request body for `POST /recommend-workout`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendWorkoutRequest {
    /// Recent sessions, oldest first; absent or null means no history
    #[serde(default)]
    pub history: Option<Vec<HistoryEntry>>,
}

/// Recommendation routes
pub struct RecommendationRoutes;

impl RecommendationRoutes {
    /// Create the recommendation route
    pub fn routes() -> Router {
        Router::new().route("/recommend-workout", post(Self::handle_recommend))
    }

    async fn handle_recommend(
        payload: Result<Json<RecommendWorkoutRequest>, JsonRejection>,
    ) -> Result<Json<Recommendation>, AppError> {
        let Json(request) = payload.map_err(json_rejection)?;
        let history = request.history.unwrap_or_default();

        let recommendation = recommend_workout(&history, &mut rand::thread_rng());
        info!(
            workout = %recommendation.workout,
            duration = recommendation.duration,
            history_len = history.len(),
            "Workout recommended"
        );

        Ok(Json(recommendation))
    }
}
