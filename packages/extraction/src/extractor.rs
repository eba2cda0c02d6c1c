//! The extraction invoker.
//!
//! Stateless request/response: each call builds one prompt, issues one
//! backend call, and decodes the reply into the requested shape. There
//! is no retry, no caching, and no state carried between calls.

use groq_client::{strip_code_fences, GroqClient, StructuredOutput};
use tracing::debug;

use crate::config::Config;
use crate::error::{ExtractError, Result};
use crate::prompt::SYSTEM_PROMPT;
use crate::traits::StructuredCompletion;
use crate::types::{People, Person};

/// Turns free-form text into validated records via a completion backend.
pub struct Extractor<B> {
    backend: B,
    model: String,
}

impl Extractor<GroqClient> {
    /// Build a Groq-backed extractor from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut client = GroqClient::new(config.api_key.expose());
        if let Some(url) = &config.base_url {
            client = client.with_base_url(url);
        }
        Self::new(client, &config.model)
    }
}

impl<B: StructuredCompletion> Extractor<B> {
    /// Build an extractor over any completion backend.
    pub fn new(backend: B, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
        }
    }

    /// Extract a value of shape `T` from free-form text.
    ///
    /// Issues exactly one backend call with the fixed system instruction,
    /// the caller's raw text, and a strict schema generated from `T`.
    pub async fn extract<T: StructuredOutput>(&self, text: &str) -> Result<T> {
        let schema = T::strict_schema();

        debug!(
            shape = %T::shape_name(),
            model = %self.model,
            text_len = text.len(),
            "requesting structured extraction"
        );

        let payload = self
            .backend
            .structured(&self.model, SYSTEM_PROMPT, text, schema)
            .await?;

        serde_json::from_str(strip_code_fences(&payload)).map_err(|e| {
            ExtractError::SchemaMismatch(format!(
                "reply does not fit shape {}: {e}",
                T::shape_name()
            ))
        })
    }

    /// Extract a single person record.
    ///
    /// Attributes the model cannot identify come back as
    /// [`crate::FieldValue::Unknown`].
    pub async fn extract_person(&self, text: &str) -> Result<Person> {
        self.extract(text).await
    }

    /// Extract every person mentioned in the text, in order of first
    /// mention. Text describing nobody yields an empty vector.
    pub async fn extract_people(&self, text: &str) -> Result<Vec<Person>> {
        let batch: People = self.extract(text).await?;
        Ok(batch.people)
    }
}
