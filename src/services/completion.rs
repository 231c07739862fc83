// src/services/completion.rs
//! Client for an OpenAI-compatible `chat/completions` provider.

use std::fmt;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::CompletionConfig;

#[derive(Debug, Clone, Serialize)]
pub struct CompletionMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<CompletionMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub stream: bool,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Text of the first choice, if the provider returned any.
    pub fn first_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|text| !text.trim().is_empty())
    }
}

/// Outcome of a remote call that did not fail unexpectedly.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Success(String),
    /// Provider unreachable, timed out, refused the request or returned no
    /// text. The caller answers locally instead.
    Unavailable,
}

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("malformed completion response: {0}")]
    Malformed(#[source] reqwest::Error),
}

#[derive(Clone)]
pub struct CompletionClient {
    http: Client,
    endpoint: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish()
    }
}

impl CompletionClient {
    pub fn new(config: &CompletionConfig, api_key: impl Into<String>) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key: api_key.into(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    /// Single attempt, no retry.
    pub async fn complete(&self, system: &str, user: &str) -> Result<Completion, CompletionError> {
        let request = CompletionRequest {
            model: &self.model,
            messages: vec![
                CompletionMessage { role: "system", content: system.to_string() },
                CompletionMessage { role: "user", content: user.to_string() },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            stream: false,
        };

        let response = match self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, timeout = err.is_timeout(), "completion provider unreachable");
                return Ok(Completion::Unavailable);
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "completion provider returned an error status");
            return Ok(Completion::Unavailable);
        }

        let body: CompletionResponse = match response.json().await {
            Ok(body) => body,
            Err(err) if err.is_decode() => return Err(CompletionError::Malformed(err)),
            Err(err) => {
                tracing::warn!(error = %err, timeout = err.is_timeout(), "completion body could not be read");
                return Ok(Completion::Unavailable);
            }
        };

        Ok(match body.first_text() {
            Some(text) => Completion::Success(text),
            None => {
                tracing::warn!("completion provider returned no text");
                Completion::Unavailable
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_text_reads_first_choice() {
        let body: CompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"Hello!"}},{"message":{"content":"second"}}]}"#,
        )
        .unwrap();
        assert_eq!(body.first_text().as_deref(), Some("Hello!"));
    }

    #[test]
    fn first_text_is_none_without_content() {
        let empty: CompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(empty.first_text().is_none());

        let blank: CompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"  "}}]}"#).unwrap();
        assert!(blank.first_text().is_none());

        let missing: CompletionResponse = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert!(missing.first_text().is_none());
    }
}
