//! OpenAI chat-completions client.

use std::time::Duration;

use eco_config::OpenAiConfig;
use serde::Deserialize;

use crate::{AnalystError, ChatModel, ChatRequest, http::check_response};

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// First choice's text, or [`AnalystError::EmptyCompletion`].
fn first_content(response: CompletionResponse) -> Result<String, AnalystError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .ok_or(AnalystError::EmptyCompletion)
}

/// HTTP client for an OpenAI-compatible chat completions endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiChat {
    http: reqwest::Client,
    endpoint: String,
}

impl OpenAiChat {
    /// Build a client from the `[openai]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`AnalystError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn from_config(config: &OpenAiConfig) -> Result<Self, AnalystError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("ecolens/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ChatModel for OpenAiChat {
    async fn complete(&self, request: &ChatRequest, api_key: &str) -> Result<String, AnalystError> {
        tracing::debug!(model = %request.model, endpoint = %self.endpoint, "requesting completion");

        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let body = resp.text().await?;
        let data: CompletionResponse =
            serde_json::from_str(&body).map_err(|e| AnalystError::Parse(e.to_string()))?;
        first_content(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": "| Metric | A | B |" },
                "finish_reason": "stop"
            }
        ],
        "usage": { "prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15 }
    }"#;

    #[test]
    fn parse_completion_response() {
        let data: CompletionResponse = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(first_content(data).unwrap(), "| Metric | A | B |");
    }

    #[test]
    fn no_choices_is_empty_completion() {
        let data: CompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            first_content(data),
            Err(AnalystError::EmptyCompletion)
        ));
    }

    #[test]
    fn null_content_is_empty_completion() {
        let data: CompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#)
                .unwrap();
        assert!(matches!(
            first_content(data),
            Err(AnalystError::EmptyCompletion)
        ));
    }

    #[test]
    fn client_uses_configured_endpoint() {
        let chat = OpenAiChat::from_config(&OpenAiConfig {
            endpoint: "http://localhost:1234/v1/chat/completions".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(chat.endpoint(), "http://localhost:1234/v1/chat/completions");
    }
}
