//! Request and response types for the Groq chat completions API.
//!
//! Groq exposes an OpenAI-compatible surface, so the wire shapes here
//! follow the `/chat/completions` contract.

use serde::{Deserialize, Serialize};

// =============================================================================
// Chat Completion
// =============================================================================

/// Chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    /// Model to use (e.g., "llama-3.1-8b-instant")
    pub model: String,

    /// Conversation messages
    pub messages: Vec<ChatMessage>,

    /// Sampling temperature (0.0 to 2.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum tokens in the completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// Create a new request for the given model with no messages.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Append a message to the conversation.
    pub fn message(mut self, message: ChatMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// Set the sampling temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Cap the completion length.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", "assistant"
    pub role: String,

    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Chat completion reply.
#[derive(Debug, Clone)]
pub struct ChatReply {
    /// Assistant message content
    pub content: String,

    /// Token usage statistics, when the API reports them
    pub usage: Option<Usage>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,

    /// Tokens in the completion
    pub completion_tokens: u32,

    /// Total tokens billed
    pub total_tokens: u32,
}

/// Raw reply as returned by the API, for internal parsing.
#[derive(Debug, Deserialize)]
pub(crate) struct RawReply {
    pub choices: Vec<RawChoice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawChoice {
    pub message: RawMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawMessage {
    pub content: String,
}

// =============================================================================
// Structured Output
// =============================================================================

/// Structured output request carrying a JSON schema response format.
///
/// Temperature is pinned to 0.0 so identical inputs yield the most
/// deterministic output the provider can give.
#[derive(Debug, Serialize)]
pub struct StructuredRequest {
    /// Model to use
    pub model: String,

    /// Conversation messages
    pub messages: Vec<ChatMessage>,

    /// Sampling temperature (always 0.0 for structured extraction)
    pub temperature: f32,

    /// Response format with JSON schema
    pub response_format: ResponseFormat,
}

impl StructuredRequest {
    /// Build a structured request from a system prompt, a user prompt,
    /// and a strict-mode JSON schema.
    pub fn new(
        model: impl Into<String>,
        system: impl Into<String>,
        user: impl Into<String>,
        schema: serde_json::Value,
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            temperature: 0.0,
            response_format: ResponseFormat::json_schema(schema),
        }
    }
}

/// `response_format` field of a structured request.
#[derive(Debug, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: String,
    pub json_schema: JsonSchemaSpec,
}

impl ResponseFormat {
    fn json_schema(schema: serde_json::Value) -> Self {
        Self {
            format_type: "json_schema".to_string(),
            json_schema: JsonSchemaSpec {
                name: "structured_response".to_string(),
                strict: true,
                schema,
            },
        }
    }
}

/// Named strict schema inside a `response_format`.
#[derive(Debug, Serialize)]
pub struct JsonSchemaSpec {
    pub name: String,
    pub strict: bool,
    pub schema: serde_json::Value,
}

// =============================================================================
// Utilities
// =============================================================================

/// Strip markdown code fences from a model reply.
///
/// Some models wrap JSON payloads in ```json fences even when asked for a
/// bare object.
pub fn strip_code_fences(reply: &str) -> &str {
    reply
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        assert_eq!(ChatMessage::system("be terse").role, "system");
        assert_eq!(ChatMessage::user("hi").role, "user");
        assert_eq!(ChatMessage::assistant("hello").role, "assistant");
    }

    #[test]
    fn test_completion_request_builder() {
        let req = CompletionRequest::new("llama-3.1-8b-instant")
            .message(ChatMessage::user("Hello"))
            .temperature(0.0)
            .max_tokens(256);

        assert_eq!(req.model, "llama-3.1-8b-instant");
        assert_eq!(req.messages.len(), 1);
        assert_eq!(req.temperature, Some(0.0));
        assert_eq!(req.max_tokens, Some(256));
    }

    #[test]
    fn test_structured_request_is_deterministic() {
        let req = StructuredRequest::new(
            "llama-3.1-8b-instant",
            "extract",
            "some text",
            serde_json::json!({"type": "object"}),
        );

        assert_eq!(req.temperature, 0.0);
        assert_eq!(req.response_format.format_type, "json_schema");
        assert!(req.response_format.json_schema.strict);
    }

    #[test]
    fn test_structured_request_serializes_response_format() {
        let req = StructuredRequest::new(
            "llama-3.1-8b-instant",
            "sys",
            "user",
            serde_json::json!({"type": "object"}),
        );
        let value = serde_json::to_value(&req).unwrap();

        assert_eq!(value["response_format"]["type"], "json_schema");
        assert_eq!(
            value["response_format"]["json_schema"]["name"],
            "structured_response"
        );
        assert_eq!(value["temperature"], 0.0);
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("{}"), "{}");
        assert_eq!(strip_code_fences("  {} "), "{}");
    }
}
