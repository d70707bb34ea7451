//! # Completion Client Module
//!
//! Connection to the external text-generation service. The `CompletionClient`
//! trait is the seam the chat flow depends on; `OpenAiClient` implements it
//! against an OpenAI-compatible chat-completions endpoint with a request
//! timeout and a capped, jittered retry so a flaky service cannot stall the
//! dispatch path indefinitely.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use rand::Rng;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::BuddyError;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_MAX_TOKENS: u32 = 256;

/// Configuration for the completion service
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Timeout for a single completion request in seconds
    pub request_timeout_secs: u64,
    /// Maximum number of retry attempts after the first failure
    pub max_retries: u32,
    /// Base delay between retries in milliseconds
    pub base_retry_delay_ms: u64,
}

impl CompletionConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            request_timeout_secs: 30,
            max_retries: 2,
            base_retry_delay_ms: 500,
        }
    }

    /// Build the configuration from environment variables.
    ///
    /// `OPENAI_API_KEY` is required; `OPENAI_MODEL` and `OPENAI_API_URL`
    /// override the defaults.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY must be set")?;
        let mut config = Self::new(api_key);
        if let Ok(model) = env::var("OPENAI_MODEL") {
            config.model = model;
        }
        if let Ok(api_url) = env::var("OPENAI_API_URL") {
            config.api_url = api_url;
        }
        Ok(config)
    }
}

/// Seam between the chat flow and the external generation service
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Generate a reply for the given prompt text
    async fn complete(&self, prompt: &str) -> Result<String, BuddyError>;
}

/// Request body for the chat-completions endpoint
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Production client for an OpenAI-compatible completion API
pub struct OpenAiClient {
    client: Client,
    config: CompletionConfig,
}

impl OpenAiClient {
    pub fn new(config: CompletionConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, config })
    }

    async fn request_once(&self, prompt: &str) -> Result<String, BuddyError> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| BuddyError::CompletionUnavailable(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BuddyError::CompletionUnavailable(format!(
                "service returned status {status}"
            )));
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| BuddyError::CompletionUnavailable(format!("invalid response: {e}")))?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                BuddyError::CompletionUnavailable("response contained no choices".to_string())
            })
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, BuddyError> {
        let mut attempt: u32 = 0;
        loop {
            match self.request_once(prompt).await {
                Ok(reply) => {
                    debug!(model = %self.config.model, "Completion succeeded");
                    return Ok(reply);
                }
                Err(e) if attempt < self.config.max_retries => {
                    attempt += 1;
                    let backoff = self.config.base_retry_delay_ms * u64::from(attempt);
                    let jitter =
                        rand::thread_rng().gen_range(0..=self.config.base_retry_delay_ms / 2);
                    warn!(
                        attempt,
                        delay_ms = backoff + jitter,
                        error = %e,
                        "Completion request failed, retrying"
                    );
                    tokio::time::sleep(Duration::from_millis(backoff + jitter)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
