//! Testing utilities.
//!
//! [`MockCompletion`] stands in for the remote completion service so
//! extraction logic can be tested without a network. It records every
//! call, which lets tests assert on call counts and on the exact prompt
//! and schema that would have gone over the wire.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{ExtractError, Result};
use crate::traits::StructuredCompletion;

/// A canned-response completion backend.
///
/// Replies are keyed by the user text; an optional default reply covers
/// everything else. Without any configured reply it returns `{}`, which
/// decodes to an all-`Unknown` record or an empty collection.
#[derive(Clone, Default)]
pub struct MockCompletion {
    replies: Arc<RwLock<HashMap<String, String>>>,
    default_reply: Arc<RwLock<Option<String>>>,
    failure: Arc<RwLock<Option<String>>>,
    calls: Arc<RwLock<Vec<RecordedCall>>>,
}

/// One recorded backend call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model: String,
    pub system: String,
    pub user: String,
    pub schema: serde_json::Value,
}

impl MockCompletion {
    /// Create a mock with no canned replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canned JSON reply for an exact user text.
    pub fn with_reply(self, user_text: impl Into<String>, json: impl Into<String>) -> Self {
        self.replies
            .write()
            .unwrap()
            .insert(user_text.into(), json.into());
        self
    }

    /// Set the reply used when no keyed reply matches.
    pub fn with_default_reply(self, json: impl Into<String>) -> Self {
        *self.default_reply.write().unwrap() = Some(json.into());
        self
    }

    /// Make every call fail with a service error.
    pub fn failing(self, message: impl Into<String>) -> Self {
        *self.failure.write().unwrap() = Some(message.into());
        self
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// All recorded calls.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl StructuredCompletion for MockCompletion {
    async fn structured(
        &self,
        model: &str,
        system: &str,
        user: &str,
        schema: serde_json::Value,
    ) -> Result<String> {
        self.calls.write().unwrap().push(RecordedCall {
            model: model.to_string(),
            system: system.to_string(),
            user: user.to_string(),
            schema,
        });

        if let Some(message) = self.failure.read().unwrap().clone() {
            return Err(ExtractError::Service(message.into()));
        }

        if let Some(reply) = self.replies.read().unwrap().get(user) {
            return Ok(reply.clone());
        }
        if let Some(reply) = self.default_reply.read().unwrap().clone() {
            return Ok(reply);
        }
        Ok("{}".to_string())
    }
}
