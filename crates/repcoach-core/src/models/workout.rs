// ABOUTME: Muscle groups, catalog workouts, training levels, and the single-workout recommendation
// ABOUTME: Enumerations serialize in lowercase so HTTP payloads match the client contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body-region training category used as the engine's working unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MuscleGroup {
    /// Chest
    Chest,
    /// Back
    Back,
    /// Legs
    Legs,
    /// Shoulders
    Shoulders,
    /// Arms
    Arms,
    /// Core
    Core,
    /// Cardio
    Cardio,
}

impl MuscleGroup {
    /// Every muscle group, in catalog order
    pub const ALL: [Self; 7] = [
        Self::Chest,
        Self::Back,
        Self::Legs,
        Self::Shoulders,
        Self::Arms,
        Self::Core,
        Self::Cardio,
    ];

    /// Label used in normalized history and schedules
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Chest => "Chest",
            Self::Back => "Back",
            Self::Legs => "Legs",
            Self::Shoulders => "Shoulders",
            Self::Arms => "Arms",
            Self::Core => "Core",
            Self::Cardio => "Cardio",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of session a catalog workout represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    /// Resistance training
    Strength,
    /// Conditioning
    Cardio,
    /// Low-intensity recovery work; never recommended outside the fatigue path
    Recovery,
}

/// Entry of the fixed workout catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogWorkout {
    /// Display name, also compared against normalized history names
    pub name: &'static str,
    /// Session kind
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
}

impl CatalogWorkout {
    /// Whether this workout may be recommended in the regular (non-fatigued) path
    #[must_use]
    pub fn is_recommendable(&self) -> bool {
        self.workout_type != WorkoutType::Recovery
    }
}

/// Coarse training-experience tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Fewer than three dated sessions in the trailing week
    #[default]
    Beginner,
    /// Three or more dated sessions in the trailing week
    Intermediate,
    /// Recognized by duration and day-count tables; not produced by the leveler
    Advanced,
}

impl Level {
    /// Lowercase name used in JSON and chat replies
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intensity attached to a recommendation: the user's level, or `low` for recovery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Recovery intensity
    Low,
    /// Beginner intensity
    Beginner,
    /// Intermediate intensity
    Intermediate,
    /// Advanced intensity
    Advanced,
}

impl From<Level> for Intensity {
    fn from(level: Level) -> Self {
        match level {
            Level::Beginner => Self::Beginner,
            Level::Intermediate => Self::Intermediate,
            Level::Advanced => Self::Advanced,
        }
    }
}

/// Single next-workout recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Catalog workout name
    pub workout: String,
    /// Session length in minutes
    pub duration: u32,
    /// Level-derived intensity, or `low` for active recovery
    pub intensity: Intensity,
    /// Human-readable justification
    pub reason: String,
}
