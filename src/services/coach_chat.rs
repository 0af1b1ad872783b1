// ABOUTME: Coach chat service answering free-text questions from workout history
// ABOUTME: Rule intents are answered by the engine; diet and unknown intents go to a bounded LLM call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

//! # Coach Chat
//!
//! Every message is classified into an [`Intent`]. Workout, why, fatigue and
//! weekly questions are answered by the rules engine from the caller's
//! history. Diet questions and unrecognized messages are forwarded to the
//! configured [`LlmProvider`].
//!
//! The language-model path never fails the request: a missing provider yields
//! a fixed introduction, and errors, timeouts or empty completions yield a
//! fixed tip.

use std::sync::Arc;
use std::time::Duration;

use repcoach_core::models::{HistoryEntry, WeeklyPlan};
use repcoach_intelligence::{
    check_fatigue, classify_intent, generate_weekly_plan, normalize_history, recommend_workout,
    Intent, RandomSource,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn, Span};

use crate::config::environment::LlmConfig;
use crate::constants::chat_messages::{
    AI_DEGRADED_REPLY, AI_UNCONFIGURED_REPLY, OVERTRAINING_REPLY, WELL_BALANCED_REPLY,
};
use crate::llm::{coach_system_prompt, ChatMessage, ChatRequest, GroqProvider, LlmProvider};

/// Reply returned to the chat endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Markdown-flavoured reply text
    pub reply: String,
    /// Intent the message was classified as
    pub intent: Intent,
}

/// Intent-routed chat with an optional language-model fallback
#[derive(Clone)]
pub struct CoachChat {
    provider: Option<Arc<dyn LlmProvider>>,
    temperature: f32,
    max_tokens: u32,
    timeout: Duration,
}

impl CoachChat {
    /// Create a chat service around an explicit provider
    #[must_use]
    pub fn new(provider: Option<Arc<dyn LlmProvider>>, config: &LlmConfig) -> Self {
        if let Some(provider) = &provider {
            info!(
                provider = provider.name(),
                model = provider.default_model(),
                timeout_secs = config.timeout_secs,
                "AI fallback enabled"
            );
        } else {
            info!("AI fallback disabled, diet and open questions get a fixed reply");
        }

        Self {
            provider,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            timeout: config.timeout(),
        }
    }

    /// Create a chat service, building a Groq provider when an API key is configured
    #[must_use]
    pub fn from_config(config: &LlmConfig) -> Self {
        let provider = GroqProvider::from_config(config)
            .map(|groq| Arc::new(groq) as Arc<dyn LlmProvider>);
        Self::new(provider, config)
    }

    /// Whether a language-model provider is attached
    #[must_use]
    pub fn is_ai_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Answer a chat message using the caller's workout history
    #[instrument(skip_all, fields(intent = tracing::field::Empty, history_len = history.len()))]
    pub async fn reply(&self, message: &str, history: &[HistoryEntry]) -> ChatReply {
        let intent = classify_intent(message);
        Span::current().record("intent", intent.as_str());

        let reply = match rule_reply(intent, history) {
            Some(text) => text,
            None => self.ai_reply(message).await,
        };

        ChatReply { reply, intent }
    }

    /// Ask the language model, degrading to fixed text on any failure
    pub async fn ai_reply(&self, message: &str) -> String {
        let Some(provider) = &self.provider else {
            return AI_UNCONFIGURED_REPLY.to_owned();
        };

        let request = self.build_request(provider.as_ref(), message);
        match tokio::time::timeout(self.timeout, provider.complete(&request)).await {
            Ok(Ok(response)) => {
                let content = response.content.trim();
                if content.is_empty() {
                    warn!(provider = provider.name(), "AI fallback returned an empty reply");
                    AI_DEGRADED_REPLY.to_owned()
                } else {
                    debug!(provider = provider.name(), chars = content.len(), "AI fallback replied");
                    content.to_owned()
                }
            }
            Ok(Err(e)) => {
                warn!(provider = provider.name(), error = %e, "AI fallback failed");
                AI_DEGRADED_REPLY.to_owned()
            }
            Err(_) => {
                warn!(
                    provider = provider.name(),
                    timeout_secs = self.timeout.as_secs(),
                    "AI fallback timed out"
                );
                AI_DEGRADED_REPLY.to_owned()
            }
        }
    }

    fn build_request(&self, provider: &dyn LlmProvider, message: &str) -> ChatRequest {
        let messages = if provider.capabilities().supports_system_messages() {
            vec![
                ChatMessage::system(coach_system_prompt()),
                ChatMessage::user(message),
            ]
        } else {
            vec![ChatMessage::user(format!(
                "{}\n\n{message}",
                coach_system_prompt()
            ))]
        };

        ChatRequest::new(messages)
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens)
    }
}

// Kept synchronous so the thread-local RNG never lives across an await point
fn rule_reply(intent: Intent, history: &[HistoryEntry]) -> Option<String> {
    let mut rng = rand::thread_rng();
    compose_reply(intent, history, &mut rng)
}

/// Reply text for intents the rules engine can answer, `None` for language-model intents
pub fn compose_reply<R: RandomSource + ?Sized>(
    intent: Intent,
    history: &[HistoryEntry],
    rng: &mut R,
) -> Option<String> {
    match intent {
        Intent::Why => {
            let rec = recommend_workout(history, rng);
            Some(format!(
                "Good question 👍\n\nYou’re seeing **{}** because:\n🧠 {}",
                rec.workout, rec.reason
            ))
        }
        Intent::Weekly => Some(render_weekly_plan(&generate_weekly_plan(history, None, rng))),
        Intent::Workout => {
            let rec = recommend_workout(history, rng);
            Some(format!(
                "Based on your recent training 💪\n\n👉 I recommend **{}** for **{} minutes**.\n\n🧠 {}",
                rec.workout, rec.duration, rec.reason
            ))
        }
        Intent::Fatigue => {
            let text = if check_fatigue(&normalize_history(history)) {
                OVERTRAINING_REPLY
            } else {
                WELL_BALANCED_REPLY
            };
            Some(text.to_owned())
        }
        Intent::Diet | Intent::AiFallback => None,
    }
}

/// Render a plan as one line per day
#[must_use]
pub fn render_weekly_plan(plan: &WeeklyPlan) -> String {
    let days: String = plan
        .schedule
        .iter()
        .map(|(day, schedule)| {
            if schedule.is_rest() {
                format!("{day} – Rest\n")
            } else {
                let names: Vec<&str> = schedule
                    .exercises
                    .iter()
                    .map(|exercise| exercise.name.as_str())
                    .collect();
                format!("{day} – {}: {}\n", schedule.muscle, names.join(", "))
            }
        })
        .collect();

    format!(
        "💪 **Here’s your {} for this week:**\n\n{days}\n📌 I’ll adjust this automatically if you feel fatigued.",
        plan.split
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn legs_history() -> Vec<HistoryEntry> {
        ["Squats", "Lunges", "Leg Press"]
            .into_iter()
            .map(HistoryEntry::named)
            .collect()
    }

    #[test]
    fn test_llm_intents_have_no_rule_reply() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(compose_reply(Intent::Diet, &[], &mut rng).is_none());
        assert!(compose_reply(Intent::AiFallback, &[], &mut rng).is_none());
    }

    #[test]
    fn test_fatigue_reply_uses_normalized_history() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let reply = compose_reply(Intent::Fatigue, &legs_history(), &mut rng).unwrap();
        assert_eq!(reply, OVERTRAINING_REPLY);

        let reply = compose_reply(Intent::Fatigue, &[], &mut rng).unwrap();
        assert_eq!(reply, WELL_BALANCED_REPLY);
    }

    #[test]
    fn test_workout_reply_mentions_recovery_when_fatigued() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let reply = compose_reply(Intent::Workout, &legs_history(), &mut rng).unwrap();
        assert!(reply.contains("**Active Recovery**"));
        assert!(reply.contains("**20 minutes**"));
    }

    #[test]
    fn test_weekly_reply_lists_every_day() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let reply = compose_reply(Intent::Weekly, &[], &mut rng).unwrap();
        assert!(reply.contains("3-Day Split"));
        for day in [
            "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
        ] {
            assert!(reply.contains(day), "missing {day}");
        }
        assert!(reply.contains("Sunday – Rest"));
    }

    #[test]
    fn test_rendered_plan_has_one_line_per_day() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let plan = generate_weekly_plan(&[], None, &mut rng);
        let text = render_weekly_plan(&plan);

        assert!(text.starts_with("💪 **Here’s your 3-Day Split for this week:**\n\nMonday – "));
        assert!(text.ends_with("Sunday – Rest\n\n📌 I’ll adjust this automatically if you feel fatigued."));
        assert_eq!(text.lines().filter(|line| line.contains(" – ")).count(), 7);
    }
}
