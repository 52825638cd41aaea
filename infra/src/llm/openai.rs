//! OpenAI chat completions client
//!
//! Sends the recipe prompt as a single user message and returns the first
//! choice's content. No retries: a failed call surfaces immediately as an
//! external service error.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use recipe_core::errors::DomainError;
use recipe_core::services::RecipeGenerator;
use recipe_shared::LlmConfig;

use crate::InfrastructureError;

/// One message of a chat conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Request body of `POST /v1/chat/completions`
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

/// Subset of the response body that is read
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if any
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|choice| choice.message.content.trim())
            .filter(|content| !content.is_empty())
    }
}

/// Recipe generator calling a chat completions endpoint
pub struct OpenAiRecipeGenerator {
    client: reqwest::Client,
    config: LlmConfig,
}

impl OpenAiRecipeGenerator {
    /// Create a new generator with the configured request timeout
    pub fn new(config: LlmConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { client, config })
    }

    pub(crate) fn build_request(&self, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }
}

fn upstream(message: impl Into<String>) -> DomainError {
    DomainError::ExternalService {
        message: message.into(),
    }
}

#[async_trait]
impl RecipeGenerator for OpenAiRecipeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        if !self.config.is_configured() {
            warn!("Recipe generation requested but no API key is configured");
            return Err(upstream("Recipe generator is not configured"));
        }

        debug!(model = %self.config.model, "Requesting recipe completion");

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&self.build_request(prompt))
            .send()
            .await
            .map_err(|e| {
                error!("Recipe generator request failed: {}", e);
                upstream(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, "Recipe generator returned an error: {}", body);
            return Err(upstream(format!("Provider returned {}", status)));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!("Invalid recipe generator response: {}", e);
            upstream(format!("Invalid response: {}", e))
        })?;

        completion
            .first_content()
            .map(str::to_string)
            .ok_or_else(|| upstream("Provider returned no completion"))
    }
}
