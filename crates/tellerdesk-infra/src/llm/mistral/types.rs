//! Mistral chat-completions API types.
//!
//! Wire structs for HTTP communication with `POST /v1/chat/completions`.
//! These are Mistral-specific; the provider-agnostic shapes live in
//! tellerdesk-types.

use serde::{Deserialize, Serialize};

/// Request body for the chat completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct MistralChatRequest {
    pub model: String,
    pub messages: Vec<MistralMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// A single role-tagged message on the wire.
///
/// The system prompt travels as a leading `system` message; Mistral has no
/// separate system field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MistralMessage {
    pub role: String,
    pub content: String,
}

/// Response body from the chat completions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MistralChatResponse {
    pub id: String,
    pub model: String,
    pub choices: Vec<MistralChoice>,
    #[serde(default)]
    pub usage: MistralUsage,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct MistralChoice {
    pub index: u32,
    pub message: MistralMessage,
    pub finish_reason: Option<String>,
}

/// Token usage reported by Mistral.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MistralUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let req = MistralChatRequest {
            model: "mistral-large-latest".to_string(),
            messages: vec![MistralMessage {
                role: "user".to_string(),
                content: "Hello".to_string(),
            }],
            temperature: Some(0.7),
            max_tokens: Some(1024),
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "mistral-large-latest");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["max_tokens"], 1024);
    }

    #[test]
    fn test_request_omits_none_fields() {
        let req = MistralChatRequest {
            model: "mistral-large-latest".to_string(),
            messages: vec![],
            temperature: None,
            max_tokens: None,
        };

        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("temperature").is_none());
        assert!(json.get("max_tokens").is_none());
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "id": "cmpl-123",
            "object": "chat.completion",
            "model": "mistral-large-latest",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Hello!"},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 14, "completion_tokens": 3, "total_tokens": 17}
        }"#;

        let resp: MistralChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.id, "cmpl-123");
        assert_eq!(resp.choices.len(), 1);
        assert_eq!(resp.choices[0].message.content, "Hello!");
        assert_eq!(resp.choices[0].finish_reason.as_deref(), Some("stop"));
        assert_eq!(resp.usage.prompt_tokens, 14);
    }

    #[test]
    fn test_response_without_usage() {
        let json = r#"{
            "id": "cmpl-456",
            "model": "mistral-large-latest",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Hi"},
                "finish_reason": null
            }]
        }"#;

        let resp: MistralChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.usage.prompt_tokens, 0);
        assert!(resp.choices[0].finish_reason.is_none());
    }
}
