// ABOUTME: Server-level constants: service identity, environment defaults, and fixed chat texts
// ABOUTME: Rule-engine tables live in repcoach-core; this module only covers the HTTP service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

//! Constants for the RepCoach server

/// Service names used in logs and health responses
pub mod service_names {
    /// Main HTTP service
    pub const REPCOACH_SERVER: &str = "repcoach-server";
    /// Groq language-model provider, as named in errors and logs
    pub const GROQ: &str = "Groq";
}

/// Defaults applied when environment variables are absent
pub mod env_defaults {
    /// Bind address
    pub const HOST: &str = "127.0.0.1";
    /// HTTP listen port
    pub const HTTP_PORT: u16 = 5000;
    /// Allowed CORS origins, `*` meaning any
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
    /// Groq chat model
    pub const GROQ_MODEL: &str = "llama-3.3-70b-versatile";
    /// Upper bound on a single fallback completion, in seconds
    pub const LLM_TIMEOUT_SECS: u64 = 15;
    /// Sampling temperature for fallback completions
    pub const LLM_TEMPERATURE: f32 = 0.6;
    /// Token cap for fallback completions
    pub const LLM_MAX_TOKENS: u32 = 200;
}

/// HTTP limits
pub mod http_limits {
    /// Largest accepted request body
    pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;
    /// Header carrying the per-request correlation id
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
}

/// Fixed coach chat replies
pub mod chat_messages {
    /// Returned for language-model intents when no provider is configured
    pub const AI_UNCONFIGURED_REPLY: &str =
        "🤖 I’m your AI fitness coach.\n\nAsk me about workouts, diet, or recovery!";

    /// Returned when the language model fails, times out, or answers with nothing
    pub const AI_DEGRADED_REPLY: &str = "⚠️ AI is temporarily unavailable.\n\n\
         Here’s a tip instead:\n\
         • Rotate muscle groups\n\
         • Focus on recovery\n\
         • Stay consistent 💪";

    /// Fatigue intent reply when the last sessions hit the same muscle group
    pub const OVERTRAINING_REPLY: &str = "😴 You might be overtraining.\n\n\
         I recommend **Active Recovery or rest** today to prevent injury.";

    /// Fatigue intent reply when training is varied
    pub const WELL_BALANCED_REPLY: &str =
        "👍 You’re doing well!\n\nKeep rotating muscle groups and stay consistent.";
}
