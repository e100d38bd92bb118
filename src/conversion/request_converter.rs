//! Analyze request to provider request conversion
//!
//! This module shapes a validated image + prompt pair into the wire format of
//! each provider. Both formats put the image first and the prompt second.

use crate::core::constants::{MAX_OUTPUT_TOKENS, content, role};
use crate::core::provider::ImageInput;
use crate::models::claude::{
    ClaudeContentBlock, ClaudeImageSource, ClaudeMessage, ClaudeMessagesRequest,
};
use crate::models::openai::{
    OpenAIChatCompletionRequest, OpenAIContentPart, OpenAIImageUrl, OpenAIMessage,
};

/// Build a Claude Messages API request
///
/// The single user message carries an inline base64 image block followed by
/// a text block with the prompt.
pub fn build_claude_request(model: &str, image: &ImageInput, prompt: &str) -> ClaudeMessagesRequest {
    ClaudeMessagesRequest {
        model: model.to_string(),
        max_tokens: MAX_OUTPUT_TOKENS,
        messages: vec![ClaudeMessage {
            role: role::USER.to_string(),
            content: vec![
                ClaudeContentBlock::Image {
                    source: ClaudeImageSource {
                        source_type: content::BASE64.to_string(),
                        media_type: image.media_type.clone(),
                        data: image.data.clone(),
                    },
                },
                ClaudeContentBlock::Text {
                    text: prompt.to_string(),
                },
            ],
        }],
    }
}

/// Build an OpenAI chat completion request
///
/// The image travels as a `data:` URI inside an `image_url` part.
pub fn build_openai_request(
    model: &str,
    image: &ImageInput,
    prompt: &str,
) -> OpenAIChatCompletionRequest {
    OpenAIChatCompletionRequest {
        model: model.to_string(),
        max_tokens: MAX_OUTPUT_TOKENS,
        messages: vec![OpenAIMessage {
            role: role::USER.to_string(),
            content: vec![
                OpenAIContentPart::ImageUrl {
                    image_url: OpenAIImageUrl {
                        url: image.data_uri(),
                    },
                },
                OpenAIContentPart::Text {
                    text: prompt.to_string(),
                },
            ],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_image() -> ImageInput {
        ImageInput {
            media_type: "image/jpeg".to_string(),
            data: "/9j/4AAQ".to_string(),
        }
    }

    #[test]
    fn test_claude_request_shape() {
        let request = build_claude_request("claude-test", &sample_image(), "What is this?");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "model": "claude-test",
                "max_tokens": 1024,
                "messages": [{
                    "role": "user",
                    "content": [
                        {
                            "type": "image",
                            "source": {
                                "type": "base64",
                                "media_type": "image/jpeg",
                                "data": "/9j/4AAQ"
                            }
                        },
                        { "type": "text", "text": "What is this?" }
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_openai_request_shape() {
        let request = build_openai_request("gpt-test", &sample_image(), "What is this?");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "model": "gpt-test",
                "max_tokens": 1024,
                "messages": [{
                    "role": "user",
                    "content": [
                        {
                            "type": "image_url",
                            "image_url": { "url": "data:image/jpeg;base64,/9j/4AAQ" }
                        },
                        { "type": "text", "text": "What is this?" }
                    ]
                }]
            })
        );
    }
}
