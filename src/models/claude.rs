//! Claude API data models
//!
//! This module defines the request and response structures for the Anthropic
//! Messages API, limited to the vision subset the proxy sends.

use serde::{Deserialize, Serialize};

/// Image source carried inline as base64
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaudeImageSource {
    #[serde(rename = "type")]
    pub source_type: String,
    pub media_type: String,
    pub data: String,
}

/// Request content block
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClaudeContentBlock {
    Image { source: ClaudeImageSource },
    Text { text: String },
}

/// Message with role and content blocks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaudeMessage {
    pub role: String,
    pub content: Vec<ClaudeContentBlock>,
}

/// Claude Messages API request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaudeMessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<ClaudeMessage>,
}

/// Response content block; only `text` blocks carry text
#[derive(Debug, Clone, Deserialize)]
pub struct ClaudeResponseBlock {
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// Claude Messages API response
#[derive(Debug, Clone, Deserialize)]
pub struct ClaudeMessagesResponse {
    #[serde(default)]
    pub content: Vec<ClaudeResponseBlock>,
}
