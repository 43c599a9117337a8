//! HTTP response checks for chat-completions endpoints.

use serde::Deserialize;

use crate::error::AnalystError;

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Map 429 to [`AnalystError::RateLimited`] and other non-2xx statuses to
/// [`AnalystError::Api`], preferring the provider's `error.message` field over
/// the raw body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, AnalystError> {
    let status = resp.status();
    if status == 429 {
        let retry_after_secs = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(60);
        return Err(AnalystError::RateLimited { retry_after_secs });
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(AnalystError::Api {
            status: status.as_u16(),
            message: error_message(&body),
        });
    }
    Ok(resp)
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map_or_else(|_| body.to_string(), |envelope| envelope.error.message)
}
