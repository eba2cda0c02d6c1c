//! Pure Groq REST API client.
//!
//! A minimal client for Groq's OpenAI-compatible chat completions API
//! with no domain-specific logic. Supports plain chat completions and
//! schema-constrained structured outputs.
//!
//! # Example
//!
//! ```rust,ignore
//! use groq_client::{GroqClient, CompletionRequest, ChatMessage};
//!
//! let client = GroqClient::from_env()?;
//!
//! let reply = client
//!     .chat_completion(
//!         CompletionRequest::new("llama-3.1-8b-instant")
//!             .message(ChatMessage::user("Hello!")),
//!     )
//!     .await?;
//! ```
//!
//! # Type-safe structured output
//!
//! ```rust,ignore
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct Review {
//!     author: Option<String>,
//!     country: Option<String>,
//! }
//!
//! // Schema generated from the type, reply deserialized back into it.
//! let review: Review = client
//!     .extract("llama-3.1-8b-instant", system_prompt, user_prompt)
//!     .await?;
//! ```

pub mod error;
pub mod schema;
pub mod types;

pub use error::{GroqError, Result};
pub use schema::StructuredOutput;
pub use types::{
    strip_code_fences, ChatMessage, ChatReply, CompletionRequest, JsonSchemaSpec, ResponseFormat,
    StructuredRequest, Usage,
};

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};

/// Default API endpoint (Groq's OpenAI-compatible surface).
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Pure Groq API client.
#[derive(Clone)]
pub struct GroqClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl GroqClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from the `GROQ_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GROQ_API_KEY")
            .map_err(|_| GroqError::Config("GROQ_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies or compatible providers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Plain chat completion.
    pub async fn chat_completion(&self, request: CompletionRequest) -> Result<ChatReply> {
        let start = std::time::Instant::now();
        let model = request.model.clone();

        let raw = self.post_chat(&request).await?;
        let content = first_choice(raw.choices)?;

        debug!(
            model = %model,
            duration_ms = start.elapsed().as_millis(),
            "Groq chat completion"
        );

        Ok(ChatReply {
            content,
            usage: raw.usage,
        })
    }

    /// Structured output constrained by a JSON schema.
    ///
    /// Uses the `json_schema` response format in strict mode and returns
    /// the raw JSON payload string from the model.
    pub async fn structured_completion(&self, request: StructuredRequest) -> Result<String> {
        let raw = self.post_chat(&request).await?;
        first_choice(raw.choices)
    }

    /// Type-safe structured extraction.
    ///
    /// Generates a strict schema from `T` via [`StructuredOutput`], sends
    /// one structured completion, and deserializes the reply.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// #[derive(Deserialize, JsonSchema)]
    /// struct Review {
    ///     author: Option<String>,
    /// }
    ///
    /// let review: Review = client
    ///     .extract("llama-3.1-8b-instant", system_prompt, user_prompt)
    ///     .await?;
    /// ```
    pub async fn extract<T: StructuredOutput>(
        &self,
        model: &str,
        system_prompt: impl Into<String>,
        user_prompt: impl Into<String>,
    ) -> Result<T> {
        let schema = T::strict_schema();

        debug!(
            shape = %T::shape_name(),
            schema = %serde_json::to_string(&schema).unwrap_or_default(),
            "generated strict schema for extraction"
        );

        let request = StructuredRequest::new(model, system_prompt, user_prompt, schema);
        let payload = self.structured_completion(request).await?;

        serde_json::from_str(strip_code_fences(&payload))
            .map_err(|e| GroqError::Parse(format!("failed to deserialize reply: {e}")))
    }

    /// POST a request body to `/chat/completions` and parse the raw reply.
    async fn post_chat<B: Serialize + ?Sized>(&self, body: &B) -> Result<types::RawReply> {
        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Groq request failed");
                GroqError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %message, "Groq API error");
            return Err(GroqError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| GroqError::Parse(e.to_string()))
    }
}

/// Pull the first choice's content out of a raw reply.
fn first_choice(choices: Vec<types::RawChoice>) -> Result<String> {
    choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or_else(|| GroqError::Parse("reply carried no choices".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_defaults() {
        let client = GroqClient::new("gsk-test");
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_custom_base_url() {
        let client = GroqClient::new("gsk-test").with_base_url("http://localhost:9999/v1");
        assert_eq!(client.base_url(), "http://localhost:9999/v1");
    }

    #[test]
    fn test_first_choice_empty() {
        let err = first_choice(vec![]).unwrap_err();
        assert!(matches!(err, GroqError::Parse(_)));
    }
}
