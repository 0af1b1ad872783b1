// ABOUTME: Weekly plan route building a seven-day split from history and preferences
// ABOUTME: Preferences are optional; without them level-derived days and build_muscle apply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use repcoach_core::models::{HistoryEntry, Preferences, WeeklyPlan};
use repcoach_intelligence::generate_weekly_plan;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::json_rejection;
use crate::errors::AppError;

/// Request body for `POST /weekly-plan`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklyPlanRequest {
    /// Recent sessions; absent or null means no history
    #[serde(default)]
    pub history: Option<Vec<HistoryEntry>>,
    /// Goal and days per week; overrides level-derived defaults when present
    #[serde(default)]
    pub preferences: Option<Preferences>,
}

/// Weekly plan routes
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create the weekly plan route
    pub fn routes() -> Router {
        Router::new().route("/weekly-plan", post(Self::handle_weekly_plan))
    }

    async fn handle_weekly_plan(
        payload: Result<Json<WeeklyPlanRequest>, JsonRejection>,
    ) -> Result<Json<WeeklyPlan>, AppError> {
        let Json(request) = payload.map_err(json_rejection)?;
        let history = request.history.unwrap_or_default();

        let plan = generate_weekly_plan(
            &history,
            request.preferences.as_ref(),
            &mut rand::thread_rng(),
        );
        info!(
            level = %plan.level,
            split = %plan.split,
            active_days = plan.schedule.active_days(),
            "Weekly plan generated"
        );

        Ok(Json(plan))
    }
}
