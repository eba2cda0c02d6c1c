//! Per-field value type distinguishing "found" from "not found".

use std::fmt;

use schemars::{gen::SchemaGenerator, schema::Schema, JsonSchema};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field value extracted from text.
///
/// `Unknown` means the model could not identify the attribute in the
/// source text. It is deliberately distinct from an empty string, so a
/// legitimately empty value can never be confused with an absent one.
///
/// On the wire `Known` is a JSON string and `Unknown` is JSON `null`.
/// Models occasionally emit the sentinel as text instead of a real null,
/// so `"unknown"`, `"null"` and blank strings also decode to `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    /// Value identified in the source text
    Known(String),

    /// Not identifiable in the source text
    #[default]
    Unknown,
}

impl FieldValue {
    /// Construct a known value.
    pub fn known(value: impl Into<String>) -> Self {
        Self::Known(value.into())
    }

    /// True when the value was identified in the source text.
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// True when the value was not identifiable.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// The known value, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Known(value) => Some(value),
            Self::Unknown => None,
        }
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(v) => Self::Known(v),
            None => Self::Unknown,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(value) => f.write_str(value),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Known(value) => serializer.serialize_str(value),
            Self::Unknown => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw {
            None => Self::Unknown,
            Some(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty()
                    || trimmed.eq_ignore_ascii_case("unknown")
                    || trimmed.eq_ignore_ascii_case("null")
                {
                    Self::Unknown
                } else {
                    Self::Known(value)
                }
            }
        })
    }
}

impl JsonSchema for FieldValue {
    fn schema_name() -> String {
        "FieldValue".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        // Nullable string on the wire
        <Option<String>>::json_schema(gen)
    }

    fn is_referenceable() -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_decodes_to_unknown() {
        let value: FieldValue = serde_json::from_str("null").unwrap();
        assert!(value.is_unknown());
    }

    #[test]
    fn test_string_decodes_to_known() {
        let value: FieldValue = serde_json::from_str("\"Riyadh\"").unwrap();
        assert_eq!(value, FieldValue::known("Riyadh"));
        assert_eq!(value.as_str(), Some("Riyadh"));
    }

    #[test]
    fn test_sentinel_strings_decode_to_unknown() {
        for raw in ["\"unknown\"", "\"Unknown\"", "\"null\"", "\"\"", "\"  \""] {
            let value: FieldValue = serde_json::from_str(raw).unwrap();
            assert!(value.is_unknown(), "{raw} should decode to Unknown");
        }
    }

    #[test]
    fn test_unknown_encodes_as_null() {
        let encoded = serde_json::to_string(&FieldValue::Unknown).unwrap();
        assert_eq!(encoded, "null");
    }

    #[test]
    fn test_known_encodes_as_string() {
        let encoded = serde_json::to_string(&FieldValue::known("Canada")).unwrap();
        assert_eq!(encoded, "\"Canada\"");
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::known("Bob").to_string(), "Bob");
        assert_eq!(FieldValue::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(
            FieldValue::from(Some("x".to_string())),
            FieldValue::known("x")
        );
        assert_eq!(FieldValue::from(None), FieldValue::Unknown);
    }
}
