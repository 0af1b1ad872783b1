// ABOUTME: System prompt for coach chat language-model replies, loaded at compile time
// ABOUTME: Kept in markdown next to this module so it can be edited without touching code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

/// RepCoach fitness coach system prompt
pub const COACH_SYSTEM_PROMPT: &str = include_str!("coach_system.md");

/// System prompt sent ahead of every fallback question
#[must_use]
pub fn coach_system_prompt() -> &'static str {
    COACH_SYSTEM_PROMPT.trim()
}
