//! Provider abstraction layer for vision-capable completion APIs
//!
//! This module defines a common trait for the providers (Claude, OpenAI) and
//! the closed set of provider kinds a request may select.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error types for provider operations
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected response body: {0}")]
    InvalidResponse(String),
}

/// Base64-encoded image handed to a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    pub media_type: String,
    pub data: String,
}

impl ImageInput {
    /// Render the image as a `data:` URI
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data)
    }
}

/// Trait for vision-capable LLM providers
#[async_trait]
pub trait Provider: Send + Sync {
    /// Send the image and prompt, returning the assistant's raw text
    async fn analyze_image(&self, image: &ImageInput, prompt: &str)
    -> Result<String, ProviderError>;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}

/// Supported provider kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProviderKind {
    #[default]
    Claude,
    OpenAI,
}

impl ProviderKind {
    /// Parse a provider name; surrounding whitespace and case are ignored
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "claude" => Some(ProviderKind::Claude),
            "openai" => Some(ProviderKind::OpenAI),
            _ => None,
        }
    }

    /// Display name used in error messages and logs
    pub fn display_name(self) -> &'static str {
        match self {
            ProviderKind::Claude => "Claude",
            ProviderKind::OpenAI => "OpenAI",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_providers() {
        assert_eq!(ProviderKind::from_str("claude"), Some(ProviderKind::Claude));
        assert_eq!(ProviderKind::from_str(" OpenAI "), Some(ProviderKind::OpenAI));
    }

    #[test]
    fn test_parse_unknown_provider() {
        assert_eq!(ProviderKind::from_str("gemini"), None);
        assert_eq!(ProviderKind::from_str("claud"), None);
    }

    #[test]
    fn test_data_uri() {
        let image = ImageInput {
            media_type: "image/png".to_string(),
            data: "aGVsbG8=".to_string(),
        };
        assert_eq!(image.data_uri(), "data:image/png;base64,aGVsbG8=");
    }

    #[test]
    fn test_api_error_message_carries_status_and_body() {
        let err = ProviderError::Api {
            status: 429,
            body: "rate limited".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("429"));
        assert!(message.contains("rate limited"));
    }
}
