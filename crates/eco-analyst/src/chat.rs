//! Text-generation boundary.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::AnalystError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// One chat-completion call. Serializes as an OpenAI-compatible request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub temperature: f32,
    pub messages: Vec<ChatMessage>,
}

/// An external text-generation service.
pub trait ChatModel {
    /// Run one completion with `api_key`, returning the generated text.
    fn complete(
        &self,
        request: &ChatRequest,
        api_key: &str,
    ) -> impl Future<Output = Result<String, AnalystError>> + Send;
}
