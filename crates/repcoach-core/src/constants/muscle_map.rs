// ABOUTME: Static exercise-name to muscle-group lookup table
// ABOUTME: Read-only and shared by every request; lookups go through a lazily built index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::models::MuscleGroup;

/// Exercise name to muscle group, in library order
///
/// The order matters: weekly plan sampling walks this table to build the
/// candidate list for a muscle group.
pub const MUSCLE_MAP: &[(&str, MuscleGroup)] = &[
    // Chest
    ("Push-ups", MuscleGroup::Chest),
    ("Bench Press", MuscleGroup::Chest),
    ("Incline Bench Press", MuscleGroup::Chest),
    ("Dumbbell Fly", MuscleGroup::Chest),
    ("Chest Dips", MuscleGroup::Chest),
    ("Cable Crossover", MuscleGroup::Chest),
    // Back
    ("Pull-ups", MuscleGroup::Back),
    ("Deadlifts", MuscleGroup::Back),
    ("Barbell Row", MuscleGroup::Back),
    ("Lat Pulldown", MuscleGroup::Back),
    ("Seated Cable Row", MuscleGroup::Back),
    ("Chin-ups", MuscleGroup::Back),
    // Legs
    ("Squats", MuscleGroup::Legs),
    ("Lunges", MuscleGroup::Legs),
    ("Leg Press", MuscleGroup::Legs),
    ("Romanian Deadlift", MuscleGroup::Legs),
    ("Leg Curl", MuscleGroup::Legs),
    ("Leg Extension", MuscleGroup::Legs),
    ("Calf Raises", MuscleGroup::Legs),
    ("Bulgarian Split Squat", MuscleGroup::Legs),
    // Shoulders
    ("Overhead Press", MuscleGroup::Shoulders),
    ("Lateral Raises", MuscleGroup::Shoulders),
    ("Front Raises", MuscleGroup::Shoulders),
    ("Arnold Press", MuscleGroup::Shoulders),
    ("Face Pulls", MuscleGroup::Shoulders),
    // Arms
    ("Bicep Curls", MuscleGroup::Arms),
    ("Hammer Curls", MuscleGroup::Arms),
    ("Tricep Dips", MuscleGroup::Arms),
    ("Tricep Pushdown", MuscleGroup::Arms),
    ("Skull Crushers", MuscleGroup::Arms),
    // Core
    ("Plank", MuscleGroup::Core),
    ("Crunches", MuscleGroup::Core),
    ("Russian Twists", MuscleGroup::Core),
    ("Hanging Leg Raises", MuscleGroup::Core),
    ("Mountain Climbers", MuscleGroup::Core),
    // Cardio
    ("Cycling", MuscleGroup::Cardio),
    ("Running", MuscleGroup::Cardio),
    ("Jump Rope", MuscleGroup::Cardio),
    ("Rowing", MuscleGroup::Cardio),
    ("Burpees", MuscleGroup::Cardio),
];

static MUSCLE_INDEX: OnceLock<HashMap<&'static str, MuscleGroup>> = OnceLock::new();

fn index() -> &'static HashMap<&'static str, MuscleGroup> {
    MUSCLE_INDEX.get_or_init(|| MUSCLE_MAP.iter().copied().collect())
}

/// Muscle group trained by an exercise, exact (case-sensitive) name match
#[must_use]
pub fn muscle_group_for(exercise: &str) -> Option<MuscleGroup> {
    index().get(exercise).copied()
}

/// Exercise names belonging to a muscle group, in table order
#[must_use]
pub fn exercises_for(group: MuscleGroup) -> Vec<&'static str> {
    MUSCLE_MAP
        .iter()
        .filter(|(_, mapped)| *mapped == group)
        .map(|(name, _)| *name)
        .collect()
}
