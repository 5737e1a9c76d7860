use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chat::Message;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{status} - {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Unexpected response: {0}")]
    ResponseShape(String),
}

/// Anything that can turn a message snapshot into the next assistant
/// reply.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, messages: &[Message], model: &str)
    -> Result<String, CompletionError>;
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

/// Client for an OpenAI compatible chat completions endpoint
/// (Mistral's by default).
#[derive(Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl CompletionClient {
    pub fn new(api_hostname: &str, api_key: &str) -> Self {
        let url = format!("{}/v1/chat/completions", api_hostname.trim_end_matches('/'));
        Self {
            http: reqwest::Client::new(),
            url,
            api_key: api_key.to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatCompletion for CompletionClient {
    async fn complete(
        &self,
        messages: &[Message],
        model: &str,
    ) -> Result<String, CompletionError> {
        tracing::debug!(model, messages = messages.len(), "Requesting chat completion");

        let payload = CompletionRequest { model, messages };
        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(CompletionError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CompletionResponse = serde_json::from_str(&body)
            .map_err(|e| CompletionError::ResponseShape(e.to_string()))?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                CompletionError::ResponseShape("missing choices[0].message.content".to_string())
            })
    }
}
