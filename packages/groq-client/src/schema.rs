//! Schema generation for structured outputs.
//!
//! Builds a strict-mode JSON schema from any Rust type via `schemars`.
//! The provider's strict validation has a few rules the raw `schemars`
//! output does not satisfy:
//!
//! 1. every object schema must carry `additionalProperties: false`
//! 2. every property must be listed in `required` (optional fields are
//!    expressed as nullable types instead)
//! 3. `$ref` references must be inlined; the validator does not follow them
//!
//! [`StructuredOutput::strict_schema`] rewrites the generated schema to
//! satisfy all three.

use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;

/// Types that can be requested as structured output from the model.
///
/// Blanket-implemented for anything that is `JsonSchema + DeserializeOwned`.
pub trait StructuredOutput: JsonSchema + DeserializeOwned {
    /// Generate a strict-mode schema for this type.
    fn strict_schema() -> serde_json::Value {
        let mut value = serde_json::to_value(schema_for!(Self)).unwrap_or_default();

        let definitions = match &value {
            serde_json::Value::Object(map) => map.get("definitions").cloned(),
            _ => None,
        };

        rewrite_for_strict_mode(&mut value, definitions.as_ref());

        if let serde_json::Value::Object(map) = &mut value {
            map.remove("definitions");
            map.remove("$schema");
        }

        value
    }

    /// Schema name for this type, as reported by `schemars`.
    fn shape_name() -> String {
        <Self as JsonSchema>::schema_name()
    }
}

impl<T: JsonSchema + DeserializeOwned> StructuredOutput for T {}

/// One recursive pass that inlines `$ref`s and applies the strict-mode
/// object rules.
fn rewrite_for_strict_mode(
    value: &mut serde_json::Value,
    definitions: Option<&serde_json::Value>,
) {
    match value {
        serde_json::Value::Object(map) => {
            // Inline "#/definitions/Name" references before anything else,
            // then restart on the inlined subtree (it may hold nested refs).
            if let Some(serde_json::Value::String(reference)) = map.get("$ref") {
                if let Some(name) = reference.strip_prefix("#/definitions/") {
                    if let Some(def) = definitions.and_then(|d| d.get(name)) {
                        *value = def.clone();
                        rewrite_for_strict_mode(value, definitions);
                        return;
                    }
                }
            }

            if map.get("type") == Some(&serde_json::Value::String("object".into())) {
                map.insert(
                    "additionalProperties".to_string(),
                    serde_json::Value::Bool(false),
                );
                if let Some(serde_json::Value::Object(props)) = map.get("properties") {
                    let required: Vec<serde_json::Value> = props
                        .keys()
                        .map(|k| serde_json::Value::String(k.clone()))
                        .collect();
                    map.insert("required".to_string(), serde_json::Value::Array(required));
                }
            }

            for (_, child) in map.iter_mut() {
                rewrite_for_strict_mode(child, definitions);
            }
        }
        serde_json::Value::Array(items) => {
            for item in items.iter_mut() {
                rewrite_for_strict_mode(item, definitions);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemars::JsonSchema;
    use serde::Deserialize;

    #[derive(Deserialize, JsonSchema)]
    struct Review {
        author: Option<String>,
        rating: Option<String>,
        country: String,
    }

    #[derive(Deserialize, JsonSchema)]
    struct ReviewBatch {
        reviews: Vec<Review>,
    }

    fn required_names(schema: &serde_json::Value) -> Vec<String> {
        schema["required"]
            .as_array()
            .expect("required array")
            .iter()
            .filter_map(|v| v.as_str())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_every_property_is_required() {
        let schema = Review::strict_schema();
        let required = required_names(&schema);

        // Strict mode lists Option<T> fields in required too
        assert!(required.contains(&"author".to_string()));
        assert!(required.contains(&"rating".to_string()));
        assert!(required.contains(&"country".to_string()));
    }

    #[test]
    fn test_additional_properties_rejected() {
        let schema = Review::strict_schema();
        assert_eq!(schema["additionalProperties"], serde_json::json!(false));
    }

    #[test]
    fn test_meta_keys_removed() {
        let schema = Review::strict_schema();
        let map = schema.as_object().unwrap();
        assert!(!map.contains_key("$schema"));
        assert!(!map.contains_key("definitions"));
    }

    #[test]
    fn test_nested_refs_inlined() {
        let schema = ReviewBatch::strict_schema();
        let serialized = serde_json::to_string(&schema).unwrap();
        assert!(
            !serialized.contains("$ref"),
            "nested schemas must be inlined: {serialized}"
        );

        // The inlined Review schema gets the same strict-mode treatment
        let items = &schema["properties"]["reviews"]["items"];
        assert_eq!(items["type"], "object");
        assert_eq!(items["additionalProperties"], serde_json::json!(false));
        assert!(required_names(items).contains(&"author".to_string()));
    }

    #[test]
    fn test_shape_name() {
        assert_eq!(Review::shape_name(), "Review");
    }
}
