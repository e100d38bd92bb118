//! Analyze dispatcher
//!
//! Validates an analyze request, routes it to the selected provider and
//! extracts the JSON object from the provider's text. The flow is linear:
//! any failure ends it, with no retry and no fallback to the other provider.

use crate::conversion::response_converter::extract_json_object;
use crate::core::config::Config;
use crate::core::error::AnalyzeError;
use crate::core::provider::{ImageInput, Provider, ProviderKind};
use crate::core::providers::{ClaudeProvider, OpenAIProvider};
use crate::models::analyze::AnalyzeRequest;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Message returned when a required field is missing or empty
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: base64Data, mimeType, prompt";

/// Request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub provider: ProviderKind,
    pub image: ImageInput,
    pub prompt: String,
}

/// Validate an inbound request
///
/// Required fields are checked before the provider. An absent or empty
/// provider selects Claude. By default only the exact value `claude` selects
/// Claude and every other value selects OpenAI. With `strict_provider`, names
/// are matched ignoring case and surrounding whitespace, and anything other
/// than `claude`/`openai` is rejected.
pub fn validate_request(
    request: AnalyzeRequest,
    strict_provider: bool,
) -> Result<ValidatedRequest, AnalyzeError> {
    let (Some(data), Some(media_type), Some(prompt)) = (
        present(request.base64_data),
        present(request.mime_type),
        present(request.prompt),
    ) else {
        return Err(AnalyzeError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
    };

    let provider = match request.provider.as_deref() {
        None | Some("") => ProviderKind::default(),
        Some(name) if strict_provider => ProviderKind::from_str(name).ok_or_else(|| {
            AnalyzeError::Validation(format!(
                "Unsupported provider '{}': expected 'claude' or 'openai'",
                name
            ))
        })?,
        Some("claude") => ProviderKind::Claude,
        Some(_) => ProviderKind::OpenAI,
    };

    Ok(ValidatedRequest {
        provider,
        image: ImageInput { media_type, data },
        prompt,
    })
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

/// Routes analyze requests to the configured providers
///
/// A `None` provider slot means its credential is not configured.
pub struct AnalyzeDispatcher {
    claude: Option<Arc<dyn Provider>>,
    openai: Option<Arc<dyn Provider>>,
    strict_provider: bool,
}

impl AnalyzeDispatcher {
    pub fn new(
        claude: Option<Arc<dyn Provider>>,
        openai: Option<Arc<dyn Provider>>,
        strict_provider: bool,
    ) -> Self {
        Self {
            claude,
            openai,
            strict_provider,
        }
    }

    /// Build the dispatcher from resolved configuration
    pub fn from_config(config: &Config) -> Self {
        let claude = config.claude_api_key.as_ref().map(|key| {
            Arc::new(ClaudeProvider::new(
                key.clone(),
                config.claude_base_url.clone(),
                config.claude_model.clone(),
                config.request_timeout,
            )) as Arc<dyn Provider>
        });

        let openai = config.openai_api_key.as_ref().map(|key| {
            Arc::new(OpenAIProvider::new(
                key.clone(),
                config.openai_base_url.clone(),
                config.openai_model.clone(),
                config.request_timeout,
            )) as Arc<dyn Provider>
        });

        Self::new(claude, openai, config.strict_provider)
    }

    /// Whether a credential is configured for `kind`
    pub fn is_configured(&self, kind: ProviderKind) -> bool {
        self.provider_for(kind).is_some()
    }

    fn provider_for(&self, kind: ProviderKind) -> Option<&Arc<dyn Provider>> {
        match kind {
            ProviderKind::Claude => self.claude.as_ref(),
            ProviderKind::OpenAI => self.openai.as_ref(),
        }
    }

    /// Validate, dispatch and extract
    pub async fn analyze(&self, request: AnalyzeRequest) -> Result<Value, AnalyzeError> {
        let request = validate_request(request, self.strict_provider)?;
        self.dispatch(&request).await
    }

    /// Call the selected provider and extract the JSON object from its reply
    ///
    /// # Errors
    ///
    /// `Configuration` when the provider has no credential (no call is made),
    /// `Provider` when the call fails, `Format` when the reply holds no JSON
    /// object.
    pub async fn dispatch(&self, request: &ValidatedRequest) -> Result<Value, AnalyzeError> {
        let kind = request.provider;
        let provider = self
            .provider_for(kind)
            .ok_or(AnalyzeError::Configuration(kind))?;

        info!(
            "Dispatching to {}: media_type={}, image_bytes~{}, prompt_chars={}",
            provider.provider_name(),
            request.image.media_type,
            base64::decoded_len_estimate(request.image.data.len()),
            request.prompt.chars().count()
        );

        let text = provider
            .analyze_image(&request.image, &request.prompt)
            .await
            .map_err(|source| AnalyzeError::Provider {
                provider: kind,
                source,
            })?;

        debug!("{} returned {} chars", provider.provider_name(), text.len());

        extract_json_object(&text).map_err(|source| AnalyzeError::Format {
            provider: kind,
            source,
        })
    }
}
