//! Inbound analyze request model

use serde::Deserialize;

/// Body of `POST /api/analyze`
///
/// Every field is optional at the wire level so that a missing field is
/// reported by validation rather than as a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub base64_data: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_fields() {
        let request: AnalyzeRequest = serde_json::from_str(
            r#"{"provider":"openai","base64Data":"aGk=","mimeType":"image/png","prompt":"describe"}"#,
        )
        .unwrap();
        assert_eq!(request.provider.as_deref(), Some("openai"));
        assert_eq!(request.base64_data.as_deref(), Some("aGk="));
        assert_eq!(request.mime_type.as_deref(), Some("image/png"));
        assert_eq!(request.prompt.as_deref(), Some("describe"));
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let request: AnalyzeRequest = serde_json::from_str(r#"{"prompt":"hi"}"#).unwrap();
        assert!(request.provider.is_none());
        assert!(request.base64_data.is_none());
        assert!(request.mime_type.is_none());
    }
}
