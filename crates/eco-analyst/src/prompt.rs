//! Instructions sent to the generation backend.

use crate::{ChatMessage, ChatRequest};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Decoding temperature for every analysis call.
pub const TEMPERATURE: f32 = 0.0;

pub const SYSTEM_PROMPT: &str = "You are an Expert Sustainability Engineer.
Output a Markdown table comparing the materials on: Global Warming Potential (GWP), Water Usage, Recyclability.
End with a 1-sentence recommendation.";

#[must_use]
pub fn user_prompt(subject_a: &str, subject_b: &str, evidence: &str) -> String {
    format!("Compare {subject_a} vs {subject_b} using this data: {evidence}")
}

#[must_use]
pub fn build_request(model: &str, subject_a: &str, subject_b: &str, evidence: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        temperature: TEMPERATURE,
        messages: vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(user_prompt(subject_a, subject_b, evidence)),
        ],
    }
}
