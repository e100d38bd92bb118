//! OpenAI provider implementation

use crate::conversion::request_converter::build_openai_request;
use crate::conversion::response_converter::openai_response_text;
use crate::core::client::HttpClient;
use crate::core::constants::openai;
use crate::core::provider::{ImageInput, Provider, ProviderError, ProviderKind};
use crate::models::openai::OpenAIChatCompletionResponse;
use async_trait::async_trait;
use tracing::{debug, warn};

/// OpenAI Chat Completions provider
pub struct OpenAIProvider {
    http: HttpClient,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider
    ///
    /// # Arguments
    ///
    /// * `api_key` - OpenAI API key
    /// * `base_url` - API base URL (without the `/v1/chat/completions` path)
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
impl Provider for OpenAIProvider {
    async fn analyze_image(
        &self,
        image: &ImageInput,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        let url = format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            openai::CHAT_COMPLETIONS_PATH
        );
        let request = build_openai_request(&self.model, image, prompt);

        debug!("Sending OpenAI request: model={}, url={}", self.model, url);

        let builder = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&request);

        let response: OpenAIChatCompletionResponse =
            self.http.send_json(builder).await.inspect_err(|e| {
                warn!("OpenAI call failed: {}", e);
            })?;

        openai_response_text(response)
    }

    fn provider_name(&self) -> &str {
        ProviderKind::OpenAI.display_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_image() -> ImageInput {
        ImageInput {
            media_type: "image/webp".to_string(),
            data: "UklGRg==".to_string(),
        }
    }

    fn provider(base_url: String) -> OpenAIProvider {
        OpenAIProvider::new(
            "test-key".to_string(),
            base_url,
            "gpt-test".to_string(),
            5,
        )
    }

    #[tokio::test]
    async fn test_analyze_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-test",
                "max_tokens": 1024,
                "messages": [{
                    "role": "user",
                    "content": [
                        {"type": "image_url", "image_url": {"url": "data:image/webp;base64,UklGRg=="}},
                        {"type": "text", "text": "Count the cars"}
                    ]
                }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "chatcmpl-1",
                "object": "chat.completion",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "Sure: {\"cars\": 3}"},
                    "finish_reason": "stop"
                }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let text = provider(mock_server.uri())
            .analyze_image(&sample_image(), "Count the cars")
            .await
            .unwrap();

        assert_eq!(text, "Sure: {\"cars\": 3}");
    }

    #[tokio::test]
    async fn test_analyze_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal error"))
            .mount(&mock_server)
            .await;

        let err = provider(mock_server.uri())
            .analyze_image(&sample_image(), "Count the cars")
            .await
            .unwrap_err();

        match err {
            ProviderError::Api { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "Internal error");
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_analyze_null_content_is_invalid_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"index": 0, "message": {"role": "assistant", "content": null}}]
            })))
            .mount(&mock_server)
            .await;

        let err = provider(mock_server.uri())
            .analyze_image(&sample_image(), "Count the cars")
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::InvalidResponse(_)));
    }
}
