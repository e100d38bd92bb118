//! OpenAI API data models
//!
//! This module defines the request and response structures for the OpenAI
//! Chat Completions API, limited to the vision subset the proxy sends.

use serde::{Deserialize, Serialize};

/// Image reference; `url` holds a `data:` URI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIImageUrl {
    pub url: String,
}

/// Request content part
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OpenAIContentPart {
    ImageUrl { image_url: OpenAIImageUrl },
    Text { text: String },
}

/// OpenAI request message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIMessage {
    pub role: String,
    pub content: Vec<OpenAIContentPart>,
}

/// OpenAI chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIChatCompletionRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<OpenAIMessage>,
}

/// Assistant message in a completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// OpenAI choice
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIChoice {
    pub message: OpenAIResponseMessage,
}

/// OpenAI chat completion response
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<OpenAIChoice>,
}
