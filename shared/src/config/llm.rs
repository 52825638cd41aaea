//! Generative-text provider configuration

use serde::{Deserialize, Serialize};

use super::{parsed_var, ConfigError};

/// Configuration of the OpenAI-compatible chat completions endpoint used
/// for recipe suggestions
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LlmConfig {
    /// Chat completions endpoint
    pub api_url: String,

    /// Bearer key sent to the provider; suggestions are disabled when empty
    #[serde(default)]
    pub api_key: String,

    /// Model name
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Upper bound on generated tokens
    pub max_tokens: u32,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_url: String::from("https://api.openai.com/v1/chat/completions"),
            api_key: String::new(),
            model: String::from("gpt-3.5-turbo"),
            temperature: 0.7,
            max_tokens: 600,
            timeout_seconds: 60,
        }
    }
}

impl LlmConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            api_url: std::env::var("LLM_API_URL").unwrap_or(defaults.api_url),
            api_key: std::env::var("LLM_API_KEY").unwrap_or_default(),
            model: std::env::var("LLM_MODEL").unwrap_or(defaults.model),
            temperature: parsed_var("LLM_TEMPERATURE", defaults.temperature)?,
            max_tokens: parsed_var("LLM_MAX_TOKENS", defaults.max_tokens)?,
            timeout_seconds: parsed_var("LLM_TIMEOUT_SECONDS", defaults.timeout_seconds)?,
        })
    }

    /// Whether an API key was provided
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_config_default_is_unconfigured() {
        let config = LlmConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.model, "gpt-3.5-turbo");
    }
}
