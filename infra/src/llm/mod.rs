//! Recipe generator backed by an OpenAI-compatible chat completions API

mod openai;

pub use openai::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, OpenAiRecipeGenerator};
