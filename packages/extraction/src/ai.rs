//! Groq-backed implementation of the completion seam.

use async_trait::async_trait;
use groq_client::{GroqClient, GroqError, StructuredRequest};

use crate::error::ExtractError;
use crate::error::Result;
use crate::traits::StructuredCompletion;

#[async_trait]
impl StructuredCompletion for GroqClient {
    async fn structured(
        &self,
        model: &str,
        system: &str,
        user: &str,
        schema: serde_json::Value,
    ) -> Result<String> {
        let request = StructuredRequest::new(model, system, user, schema);
        self.structured_completion(request)
            .await
            .map_err(ExtractError::from)
    }
}

impl From<GroqError> for ExtractError {
    fn from(err: GroqError) -> Self {
        match err {
            GroqError::Config(message) => ExtractError::Config(message),
            GroqError::Parse(message) => ExtractError::SchemaMismatch(message),
            transport @ (GroqError::Network(_) | GroqError::Api { .. }) => {
                ExtractError::Service(Box::new(transport))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_mapping() {
        assert!(matches!(
            ExtractError::from(GroqError::Config("no key".into())),
            ExtractError::Config(_)
        ));
        assert!(matches!(
            ExtractError::from(GroqError::Parse("bad json".into())),
            ExtractError::SchemaMismatch(_)
        ));
        assert!(matches!(
            ExtractError::from(GroqError::Network("refused".into())),
            ExtractError::Service(_)
        ));
        assert!(matches!(
            ExtractError::from(GroqError::Api {
                status: 429,
                message: "rate limited".into()
            }),
            ExtractError::Service(_)
        ));
    }
}
