//! Backend abstraction for schema-constrained completions.

use async_trait::async_trait;

use crate::error::Result;

/// A service that can answer a prompt with JSON conforming to a schema.
///
/// This is the seam between the extractor and the remote provider: the
/// real implementation lives on [`groq_client::GroqClient`], and tests
/// use [`crate::testing::MockCompletion`]. One call maps to exactly one
/// request; implementations must not retry or cache.
#[async_trait]
pub trait StructuredCompletion: Send + Sync {
    /// Request a completion constrained to `schema` and return the raw
    /// JSON payload string.
    async fn structured(
        &self,
        model: &str,
        system: &str,
        user: &str,
        schema: serde_json::Value,
    ) -> Result<String>;
}
