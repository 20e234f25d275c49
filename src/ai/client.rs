//! LLM (`OpenAI`) API client module
//!
//! Sends one chat completion request per prompt and returns the text of the
//! first choice.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::debug;

use super::Completion;
use super::prompt_builder::build_chat_messages;
use crate::core::config::AppConfig;
use crate::errors::SummarizerError;

/// LLM API client for generating chunk summaries
pub struct LlmClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl LlmClient {
    /// # Errors
    ///
    /// Returns `HttpError` if the underlying HTTP client cannot be built.
    pub fn new(
        api_key: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, SummarizerError> {
        let http = Client::builder().timeout(timeout).build().map_err(|e| {
            SummarizerError::HttpError(format!("Failed to build OpenAI HTTP client: {e}"))
        })?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// # Errors
    ///
    /// Returns `ConfigError` if the API key is missing, or `HttpError` if the
    /// HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, SummarizerError> {
        Self::new(
            config.api_key()?.to_string(),
            config.openai.base_url.clone(),
            Duration::from_secs(config.openai.request_timeout_secs),
        )
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl Completion for LlmClient {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, SummarizerError> {
        #[cfg(feature = "debug-logs")]
        debug!("Using prompt:\n{}", prompt);

        let request_body = build_request_body(model, &build_chat_messages(prompt));

        let mut headers = reqwest::header::HeaderMap::new();
        let auth_value = format!("Bearer {}", self.api_key)
            .parse()
            .map_err(|e| SummarizerError::HttpError(format!("Invalid Authorization header: {e}")))?;
        headers.insert("Authorization", auth_value);

        let response = self
            .http
            .post(self.endpoint())
            .headers(headers)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SummarizerError::HttpError(format!("OpenAI API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(SummarizerError::OpenAIError(format!(
                "OpenAI API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            SummarizerError::OpenAIError(format!("Failed to parse OpenAI response: {e}"))
        })?;

        let usage = response_json.get("usage").unwrap_or(&Value::Null);
        debug!("OpenAI usage: {}", usage);

        extract_completion_text(&response_json)
            .ok_or_else(|| SummarizerError::OpenAIError("No text in response".to_string()))
    }
}

pub(crate) fn build_request_body(model: &str, messages: &[ChatCompletionMessage]) -> Value {
    let messages: Vec<Value> = messages
        .iter()
        .map(|m| {
            let role_str = match m.role {
                MessageRole::system => "system",
                MessageRole::user => "user",
                MessageRole::assistant => "assistant",
                MessageRole::function => "function",
                MessageRole::tool => "tool",
            };

            let content = match &m.content {
                Content::Text(text) => json!(text),
                // Only text prompts are ever built here.
                Content::ImageUrl(_) => json!(""),
            };

            json!({
                "role": role_str,
                "content": content
            })
        })
        .collect();

    json!({
        "model": model,
        "messages": messages
    })
}

pub(crate) fn extract_completion_text(response_json: &Value) -> Option<String> {
    response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(std::string::ToString::to_string)
}
