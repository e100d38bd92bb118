//! Analyze error taxonomy
//!
//! Every failure in the analyze flow ends in one of these variants. The
//! display text is the message returned to the caller.

use crate::conversion::response_converter::FormatError;
use crate::core::provider::{ProviderError, ProviderKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Missing or unusable request input
    #[error("{0}")]
    Validation(String),

    /// Credential for the selected provider is not configured
    #[error("{0} API key not configured on server")]
    Configuration(ProviderKind),

    #[error("{provider} {source}")]
    Provider {
        provider: ProviderKind,
        source: ProviderError,
    },

    #[error("Invalid response format from {provider}: {source}")]
    Format {
        provider: ProviderKind,
        source: FormatError,
    },
}

impl AnalyzeError {
    /// Whether the caller is at fault (as opposed to the server or a provider)
    pub fn is_client_error(&self) -> bool {
        matches!(self, AnalyzeError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_message() {
        assert_eq!(
            AnalyzeError::Configuration(ProviderKind::Claude).to_string(),
            "Claude API key not configured on server"
        );
        assert_eq!(
            AnalyzeError::Configuration(ProviderKind::OpenAI).to_string(),
            "OpenAI API key not configured on server"
        );
    }

    #[test]
    fn test_provider_message() {
        let err = AnalyzeError::Provider {
            provider: ProviderKind::Claude,
            source: ProviderError::Api {
                status: 429,
                body: "rate limited".to_string(),
            },
        };
        assert_eq!(err.to_string(), "Claude API error 429: rate limited");
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_format_message() {
        let err = AnalyzeError::Format {
            provider: ProviderKind::OpenAI,
            source: FormatError::NoJsonObject,
        };
        assert!(
            err.to_string()
                .starts_with("Invalid response format from OpenAI")
        );
    }
}
