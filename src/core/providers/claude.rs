//! Claude provider implementation

use crate::conversion::request_converter::build_claude_request;
use crate::conversion::response_converter::claude_response_text;
use crate::core::client::HttpClient;
use crate::core::constants::claude;
use crate::core::provider::{ImageInput, Provider, ProviderError, ProviderKind};
use crate::models::claude::ClaudeMessagesResponse;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Anthropic Messages API provider
pub struct ClaudeProvider {
    http: HttpClient,
    api_key: String,
    base_url: String,
    model: String,
}

impl ClaudeProvider {
    /// Create a new Claude provider
    ///
    /// # Arguments
    ///
    /// * `api_key` - Anthropic API key
    /// * `base_url` - API base URL (without the `/v1/messages` path)
    /// * `model` - Vision model name
    /// * `timeout` - Request timeout in seconds
    pub fn new(api_key: String, base_url: String, model: String, timeout: u64) -> Self {
        Self {
            http: HttpClient::new(timeout),
            api_key,
            base_url,
            model,
        }
    }
}

#[async_trait]
impl Provider for ClaudeProvider {
    async fn analyze_image(
        &self,
        image: &ImageInput,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        let url = format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            claude::MESSAGES_PATH
        );
        let request = build_claude_request(&self.model, image, prompt);

        debug!("Sending Claude request: model={}, url={}", self.model, url);

        let builder = self
            .http
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", claude::API_VERSION)
            .header("content-type", "application/json")
            .json(&request);

        let response: ClaudeMessagesResponse =
            self.http.send_json(builder).await.inspect_err(|e| {
                warn!("Claude call failed: {}", e);
            })?;

        claude_response_text(response)
    }

    fn provider_name(&self) -> &str {
        ProviderKind::Claude.display_name()
    }
}
