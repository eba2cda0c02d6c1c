//! Key-data extraction over a hosted completion API.
//!
//! Sends unstructured text to a hosted model and decodes the reply into
//! validated record shapes: one [`Person`], or every person the text
//! mentions. The model does the reading; this crate contributes the
//! prompt, the schemas, and the validation of what comes back.
//!
//! The pipeline is a single stateless hop: load [`Config`], build an
//! [`Extractor`], call it. Sampling is pinned to temperature zero so
//! identical inputs get the most reproducible output the provider can
//! give. Attributes the model cannot find in the text decode to
//! [`FieldValue::Unknown`], never to an invented value.
//!
//! # Usage
//!
//! ```rust,ignore
//! use extraction::{Config, Extractor};
//!
//! let config = Config::from_env()?;
//! let extractor = Extractor::from_config(&config);
//!
//! let person = extractor
//!     .extract_person("Great product! - Riyadh, Bangladesh")
//!     .await?;
//! assert!(person.name.is_known());
//! assert!(person.lastname.is_unknown());
//! ```
//!
//! # Modules
//!
//! - [`config`] - environment-backed configuration with a redacted key
//! - [`types`] - record shapes ([`Person`], [`People`], [`FieldValue`])
//! - [`prompt`] - the fixed system instruction
//! - [`extractor`] - the invoker, generic over a completion backend
//! - [`testing`] - canned-response mock backend for tests

mod ai;
pub mod config;
pub mod error;
pub mod extractor;
pub mod prompt;
pub mod testing;
pub mod traits;
pub mod types;

pub use config::{Config, SecretString, DEFAULT_MODEL};
pub use error::{ExtractError, Result};
pub use extractor::Extractor;
pub use traits::StructuredCompletion;
pub use types::{FieldValue, People, Person};

// Re-export the client crate so callers don't need a direct dependency
pub use groq_client;
