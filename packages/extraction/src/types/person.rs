//! The record shapes the extractor can request.
//!
//! Doc comments on the fields become schema `description`s, which the
//! model reads; keep them phrased as instructions about the attribute.
//! Field names are lowercase snake_case on the wire (`email`, not
//! `Email`) and that convention is normative for this crate.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::field::FieldValue;

/// Information about a person mentioned in a piece of text.
///
/// Every field is optional from the model's point of view: an attribute
/// it cannot identify comes back as [`FieldValue::Unknown`], never as an
/// invented value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Person {
    /// The name of the person
    #[serde(default)]
    pub name: FieldValue,

    /// The last name of the person, if known
    #[serde(default)]
    pub lastname: FieldValue,

    /// The country of the person, if known
    #[serde(default)]
    pub country: FieldValue,

    /// The email address of the person, if known
    #[serde(default)]
    pub email: FieldValue,
}

/// People mentioned in a piece of text.
///
/// Used when the source may describe any number of entities. Order
/// follows first mention in the text; no deduplication is performed, and
/// text describing nobody yields an empty list rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct People {
    /// Every person mentioned in the text, in order of first mention
    #[serde(default)]
    pub people: Vec<Person>,
}
