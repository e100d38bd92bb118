//! Provider response to analyze result conversion
//!
//! This module pulls the assistant text out of each provider's response body
//! and recovers the JSON object embedded in that text.

use crate::core::constants::content;
use crate::core::provider::ProviderError;
use crate::models::claude::ClaudeMessagesResponse;
use crate::models::openai::OpenAIChatCompletionResponse;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Error types for JSON extraction
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("no JSON object found in response text")]
    NoJsonObject,

    #[error("embedded JSON is invalid: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Return the first text segment of a Claude response
pub fn claude_response_text(response: ClaudeMessagesResponse) -> Result<String, ProviderError> {
    response
        .content
        .into_iter()
        .find(|block| block.content_type == content::TEXT)
        .and_then(|block| block.text)
        .ok_or_else(|| ProviderError::InvalidResponse("no text content in response".to_string()))
}

/// Return the message content of the first OpenAI completion choice
pub fn openai_response_text(
    response: OpenAIChatCompletionResponse,
) -> Result<String, ProviderError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::InvalidResponse("no choices in response".to_string()))?;

    choice
        .message
        .content
        .ok_or_else(|| ProviderError::InvalidResponse("no message content in choice".to_string()))
}

/// Extract the JSON object embedded in free-form text
///
/// The candidate runs from the first `{` to the last `}`. Commentary outside
/// that span is discarded. If the candidate does not parse, shorter candidates
/// from the same opening brace are tried, each ending at an earlier `}`. The
/// parsed value is returned unchanged.
///
/// # Errors
///
/// Returns `FormatError::NoJsonObject` when there is no `{` followed by a `}`,
/// and `FormatError::InvalidJson` with the full candidate's parse error when
/// no candidate parses.
pub fn extract_json_object(text: &str) -> Result<Value, FormatError> {
    let start = text.find('{').ok_or(FormatError::NoJsonObject)?;
    let end = text
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or(FormatError::NoJsonObject)?;

    let greedy_error = match serde_json::from_str::<Value>(&text[start..=end]) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    let mut search_end = end;
    while let Some(offset) = text[start..search_end].rfind('}') {
        let close = start + offset;
        if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(&text[start..=close]) {
            debug!(
                "Recovered JSON object from shorter candidate ({} of {} bytes)",
                close - start + 1,
                end - start + 1
            );
            return Ok(value);
        }
        search_end = close;
    }

    Err(FormatError::InvalidJson(greedy_error))
}
