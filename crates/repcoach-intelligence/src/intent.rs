// ABOUTME: Keyword-scoring intent classifier for free-text coach chat messages
// ABOUTME: Highest keyword hit count wins, ties go to the higher priority intent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a chat message is asking for
///
/// Variants are declared in priority order; on equal scores the earlier
/// variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    /// Explanation of the current recommendation
    Why,
    /// Full weekly schedule
    Weekly,
    /// Next workout
    Workout,
    /// Overtraining check
    Fatigue,
    /// Nutrition questions, answered by the language model
    Diet,
    /// Nothing matched
    AiFallback,
}

impl Intent {
    /// Scored intents in priority order
    pub const SCORED: [Self; 5] = [
        Self::Why,
        Self::Weekly,
        Self::Workout,
        Self::Fatigue,
        Self::Diet,
    ];

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Why => "WHY",
            Self::Weekly => "WEEKLY",
            Self::Workout => "WORKOUT",
            Self::Fatigue => "FATIGUE",
            Self::Diet => "DIET",
            Self::AiFallback => "AI_FALLBACK",
        }
    }

    /// Lowercase keywords that score for this intent
    #[must_use]
    pub const fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Why => &["why", "reason", "explain"],
            Self::Weekly => &["week", "weekly", "7 days", "schedule"],
            Self::Workout => &["tomorrow", "next", "recommend", "should i"],
            Self::Fatigue => &["tired", "fatigue", "sore", "overtrain", "rest"],
            Self::Diet => &["diet", "food", "eat", "nutrition", "calorie", "fat loss"],
            Self::AiFallback => &[],
        }
    }

    /// Whether replies for this intent come from the language model
    #[must_use]
    pub const fn needs_llm(&self) -> bool {
        matches!(self, Self::Diet | Self::AiFallback)
    }

    fn score(self, message: &str) -> usize {
        self.keywords()
            .iter()
            .filter(|keyword| message.contains(*keyword))
            .count()
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a chat message by case-insensitive keyword substring hits
#[must_use]
pub fn classify_intent(message: &str) -> Intent {
    let message = message.to_lowercase();

    let mut best = Intent::AiFallback;
    let mut best_score = 0;
    for intent in Intent::SCORED {
        let score = intent.score(&message);
        if score > best_score {
            best = intent;
            best_score = score;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_why_beats_recommend_on_tie() {
        assert_eq!(classify_intent("why did you recommend this"), Intent::Why);
    }

    #[test]
    fn test_no_keywords_falls_back() {
        assert_eq!(classify_intent("asdf"), Intent::AiFallback);
        assert_eq!(classify_intent(""), Intent::AiFallback);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify_intent("WHAT SHOULD I DO TOMORROW"), Intent::Workout);
    }

    #[test]
    fn test_higher_score_wins() {
        // "weekly" also contains "week": two hits beat one "rest"
        assert_eq!(classify_intent("weekly plan with rest"), Intent::Weekly);
        assert_eq!(classify_intent("I'm so tired and sore"), Intent::Fatigue);
    }

    #[test]
    fn test_diet_routes_to_llm() {
        let intent = classify_intent("what food should I eat for fat loss");
        assert_eq!(intent, Intent::Diet);
        assert!(intent.needs_llm());
    }

    #[test]
    fn test_serializes_screaming() {
        assert_eq!(
            serde_json::to_string(&Intent::AiFallback).ok().as_deref(),
            Some("\"AI_FALLBACK\"")
        );
    }
}
