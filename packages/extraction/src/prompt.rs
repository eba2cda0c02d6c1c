//! The fixed extraction instruction.

/// System instruction sent with every extraction request.
///
/// The wording does the heavy lifting: the model must only extract what
/// the text states and must return `null` for any attribute it cannot
/// identify, which decodes to [`crate::FieldValue::Unknown`].
pub const SYSTEM_PROMPT: &str = "You are an expert extraction algorithm. \
Only extract relevant information from the text. \
If you do not know the value of an attribute asked to extract, \
return null for the attribute's value.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_forbids_invention() {
        assert!(SYSTEM_PROMPT.contains("Only extract relevant information"));
    }

    #[test]
    fn test_prompt_mandates_null_for_unidentified() {
        assert!(SYSTEM_PROMPT.contains("return null"));
    }
}
