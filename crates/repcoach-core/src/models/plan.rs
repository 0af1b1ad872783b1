// ABOUTME: Weekly plan data model: goals, preferences, day focus, and exercise prescriptions
// ABOUTME: The schedule always holds all seven days and serializes them Monday first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::Level;
use crate::constants::plan_defaults::DEFAULT_DAYS_PER_WEEK;

/// Primary training goal selected by the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Higher reps, short rest
    LoseWeight,
    /// Low reps, long rest
    Strength,
    /// Very high reps, short rest
    Endurance,
    /// Hypertrophy; also absorbs unrecognized goal strings
    #[default]
    #[serde(other)]
    BuildMuscle,
}

/// Caller-supplied plan preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Training goal, defaults to `build_muscle`
    #[serde(default)]
    pub goal: Goal,
    /// Requested number of training days, defaults to 3
    #[serde(default = "default_days_per_week")]
    pub days_per_week: u32,
}

const fn default_days_per_week() -> u32 {
    DEFAULT_DAYS_PER_WEEK
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            goal: Goal::default(),
            days_per_week: DEFAULT_DAYS_PER_WEEK,
        }
    }
}

/// Day of the training week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayOfWeek {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl DayOfWeek {
    /// Monday through Sunday
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Full day name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Muscle focus assigned to a day by a split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayFocus {
    /// Whole-body session
    FullBody,
    /// Upper body day of an upper/lower split
    UpperBody,
    /// Lower body day of an upper/lower split
    LowerBody,
    /// Chest, shoulders and triceps
    Push,
    /// Back and biceps
    Pull,
    /// Leg day of a push/pull/legs rotation
    Legs,
    /// Upper day of the hybrid five-day split
    Upper,
    /// Lower day of the hybrid five-day split
    Lower,
    /// No training
    Rest,
}

impl DayFocus {
    /// Label written to `DaySchedule::muscle`
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FullBody => "Full Body",
            Self::UpperBody => "Upper Body",
            Self::LowerBody => "Lower Body",
            Self::Push => "Push",
            Self::Pull => "Pull",
            Self::Legs => "Legs",
            Self::Upper => "Upper",
            Self::Lower => "Lower",
            Self::Rest => "Rest",
        }
    }

    /// Whether this day has exercises
    #[must_use]
    pub const fn is_rest(&self) -> bool {
        matches!(self, Self::Rest)
    }
}

/// One prescribed exercise on a training day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExercisePrescription {
    /// Request-scoped identifier, not guaranteed unique
    pub id: u32,
    /// Exercise name from the muscle map
    pub name: String,
    /// Working sets
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
    /// Rest between sets in seconds
    pub rest: u32,
}

/// Focus and exercises for a single day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Focus label, `Rest` on rest days
    pub muscle: String,
    /// Ordered exercises; empty on rest days
    pub exercises: Vec<ExercisePrescription>,
}

impl DaySchedule {
    /// Rest day with no exercises
    #[must_use]
    pub fn rest() -> Self {
        Self {
            muscle: DayFocus::Rest.label().to_owned(),
            exercises: Vec::new(),
        }
    }

    /// Whether this is a rest day
    #[must_use]
    pub fn is_rest(&self) -> bool {
        self.muscle == DayFocus::Rest.label()
    }
}

/// Seven-day schedule keyed by day of week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySchedule {
    days: [DaySchedule; 7],
}

impl WeeklySchedule {
    /// Build a schedule where every day is a rest day
    #[must_use]
    pub fn all_rest() -> Self {
        Self {
            days: std::array::from_fn(|_| DaySchedule::rest()),
        }
    }

    /// Replace the schedule for a day
    pub fn set(&mut self, day: DayOfWeek, schedule: DaySchedule) {
        self.days[day.index()] = schedule;
    }

    /// Schedule for a day
    #[must_use]
    pub const fn get(&self, day: DayOfWeek) -> &DaySchedule {
        &self.days[day.index()]
    }

    /// Days in Monday..Sunday order
    pub fn iter(&self) -> impl Iterator<Item = (DayOfWeek, &DaySchedule)> {
        DayOfWeek::ALL.into_iter().zip(self.days.iter())
    }

    /// Number of non-rest days
    #[must_use]
    pub fn active_days(&self) -> usize {
        self.days.iter().filter(|day| !day.is_rest()).count()
    }
}

impl Serialize for WeeklySchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (day, schedule) in self.iter() {
            map.serialize_entry(day.as_str(), schedule)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for WeeklySchedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut raw = HashMap::<DayOfWeek, DaySchedule>::deserialize(deserializer)?;
        let mut schedule = Self::all_rest();
        for day in DayOfWeek::ALL {
            let entry = raw
                .remove(&day)
                .ok_or_else(|| de::Error::custom(format!("schedule is missing {day}")))?;
            schedule.set(day, entry);
        }
        Ok(schedule)
    }
}

/// Generated weekly training plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    /// Level inferred from history
    pub level: Level,
    /// Split label such as `4-Day Split`
    pub split: String,
    /// Seven-day schedule
    pub schedule: WeeklySchedule,
}
