//! Data model for HSN code validation.

use serde::{Deserialize, Serialize};

/// One row of the reference master dataset: a code and its description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub code: String,
    pub description: String,
}

/// Verdict for a single candidate code.
///
/// `description` is present iff the code is valid, `reason` iff it is not.
/// Absent fields are omitted from the JSON form entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// The submitted code, after trimming surrounding whitespace.
    pub code: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ValidationResult {
    pub fn valid(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            valid: true,
            description: Some(description.into()),
            reason: None,
        }
    }

    pub fn invalid(code: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            valid: false,
            description: None,
            reason: Some(reason.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_result_serializes_without_reason() {
        let result = ValidationResult::valid("1010", "Live animals");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["code"], "1010");
        assert_eq!(json["valid"], true);
        assert_eq!(json["description"], "Live animals");
        assert!(json.get("reason").is_none());
    }

    #[test]
    fn test_invalid_result_serializes_without_description() {
        let result = ValidationResult::invalid("10A0", "HSN code must be numeric");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["code"], "10A0");
        assert_eq!(json["valid"], false);
        assert_eq!(json["reason"], "HSN code must be numeric");
        assert!(json.get("description").is_none());
    }
}
