//! Configuration loaded from the environment.
//!
//! The API key is the single required secret. It is wrapped in a
//! redacting [`SecretString`] (via the `secrecy` crate) so it never
//! shows up in logs or debug output.

use std::env;
use std::fmt;

use secrecy::{ExposeSecret, SecretBox};

use crate::error::{ExtractError, Result};

/// Model the original pipeline runs against.
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// A secret string that won't be logged or displayed.
pub struct SecretString(SecretBox<str>);

impl SecretString {
    /// Wrap a secret value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretBox::new(Box::from(value.into().as_str())))
    }

    /// Expose the secret. Only call this at the point of use, e.g. when
    /// building the Authorization header.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self::new(self.expose())
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Extraction configuration.
#[derive(Clone)]
pub struct Config {
    /// API key for the completion service (secret)
    pub api_key: SecretString,

    /// Model identifier
    pub model: String,

    /// API base URL override, if any
    pub base_url: Option<String>,
}

impl Config {
    /// Build a config with an explicit key and the default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key),
            model: DEFAULT_MODEL.to_string(),
            base_url: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `GROQ_API_KEY` (required, must be non-empty), `GROQ_MODEL`
    /// and `GROQ_BASE_URL` (optional). A `.env` file in the working
    /// directory is honored for development.
    ///
    /// A missing or blank key is fatal and fails here, before any client
    /// exists — there is no default credential to fall back to.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let api_key = env::var("GROQ_API_KEY")
            .map_err(|_| ExtractError::Config("GROQ_API_KEY must be set".into()))?;
        if api_key.trim().is_empty() {
            return Err(ExtractError::Config("GROQ_API_KEY is empty".into()));
        }

        let mut config = Self::new(api_key);
        if let Ok(model) = env::var("GROQ_MODEL") {
            config.model = model;
        }
        config.base_url = env::var("GROQ_BASE_URL").ok();
        Ok(config)
    }

    /// Override the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}
