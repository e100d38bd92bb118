//! Outbound HTTP client with a per-call deadline
//!
//! This module wraps `reqwest` so that every provider call, including reading
//! the response body, completes within the configured timeout. Non-success
//! statuses become `ProviderError::Api` carrying the status and body text.

use crate::core::provider::ProviderError;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::warn;

/// Shared HTTP client used by the provider adapters
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Create a client whose calls are bounded by `timeout_secs`
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            client: Client::new(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Start a POST request to `url`
    pub fn post(&self, url: &str) -> RequestBuilder {
        self.client.post(url)
    }

    /// Send a request and decode a JSON success body
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Timeout` when the deadline expires,
    /// `ProviderError::Api` for non-success statuses, `ProviderError::Transport`
    /// for connection failures and `ProviderError::InvalidResponse` when the
    /// success body does not decode.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ProviderError> {
        let timeout_secs = self.timeout.as_secs();

        match tokio::time::timeout(self.timeout, Self::execute(request)).await {
            Ok(result) => result,
            Err(_) => {
                warn!("Provider call exceeded {}s deadline", timeout_secs);
                Err(ProviderError::Timeout(timeout_secs))
            }
        }
    }

    async fn execute<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ProviderError> {
        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("failed to parse response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_non_success_status_carries_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/call"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(5);
        let url = format!("{}/call", mock_server.uri());
        let result = client.send_json::<Value>(client.post(&url)).await;

        match result {
            Err(ProviderError::Api { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "overloaded");
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_deadline_expiry_is_timeout() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(1);
        let url = format!("{}/slow", mock_server.uri());
        let result = client.send_json::<Value>(client.post(&url)).await;

        assert!(matches!(result, Err(ProviderError::Timeout(1))));
    }

    #[tokio::test]
    async fn test_undecodable_success_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/call"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(5);
        let url = format!("{}/call", mock_server.uri());
        let result = client.send_json::<Value>(client.post(&url)).await;

        assert!(matches!(result, Err(ProviderError::InvalidResponse(_))));
    }
}
