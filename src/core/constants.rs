//! Constants for provider endpoints and wire content types
//!
//! This module defines string constants used when shaping outbound provider
//! requests and reading their responses.

/// Output token cap applied to every provider call
pub const MAX_OUTPUT_TOKENS: u32 = 1024;

/// Anthropic Messages API settings
pub mod claude {
    /// Default API base URL
    pub const BASE_URL: &str = "https://api.anthropic.com";

    /// Messages endpoint path
    pub const MESSAGES_PATH: &str = "/v1/messages";

    /// Required `anthropic-version` header value
    pub const API_VERSION: &str = "2023-06-01";

    /// Default vision model
    pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
}

/// OpenAI Chat Completions API settings
pub mod openai {
    /// Default API base URL
    pub const BASE_URL: &str = "https://api.openai.com";

    /// Chat completions endpoint path
    pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

    /// Default vision model
    pub const DEFAULT_MODEL: &str = "gpt-4o";
}

/// Message role constants
pub mod role {
    /// User role identifier
    pub const USER: &str = "user";
}

/// Content type constants
pub mod content {
    /// Text content type
    pub const TEXT: &str = "text";

    /// Base64 image source type
    pub const BASE64: &str = "base64";
}
