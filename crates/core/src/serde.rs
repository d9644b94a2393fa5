//! Serde helper functions for lenient request deserialization.
//!
//! Request bodies are never rejected for carrying the wrong JSON type in a
//! field. Values the store could hold are coerced; anything else becomes
//! `None` and is stored as NULL.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an optional text field.
///
/// Strings pass through, numbers are written out as text, booleans become
/// `"1"`/`"0"` (SQLite has no boolean type). Null, arrays and objects
/// become `None`.
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if b { "1" } else { "0" }.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// Deserialize an optional row id.
///
/// Accepts integers and strings holding an integer (e.g. `"10"`).
/// Anything else becomes `None`.
pub fn deserialize_lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test struct that uses the deserializer functions
    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_lenient_string")]
        text: Option<String>,
        #[serde(default, deserialize_with = "deserialize_lenient_id")]
        id: Option<i64>,
    }

    fn parse(json: &str) -> TestStruct {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_string_passes_through() {
        assert_eq!(parse(r#"{"text": "Alice"}"#).text.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_number_becomes_text() {
        assert_eq!(parse(r#"{"text": 123}"#).text.as_deref(), Some("123"));
        assert_eq!(parse(r#"{"text": 1.5}"#).text.as_deref(), Some("1.5"));
    }

    #[test]
    fn test_bool_becomes_integer_text() {
        assert_eq!(parse(r#"{"text": true}"#).text.as_deref(), Some("1"));
        assert_eq!(parse(r#"{"text": false}"#).text.as_deref(), Some("0"));
    }

    #[test]
    fn test_structured_values_become_none() {
        assert_eq!(parse(r#"{"text": [1, 2]}"#).text, None);
        assert_eq!(parse(r#"{"text": {"a": 1}}"#).text, None);
        assert_eq!(parse(r#"{"text": null}"#).text, None);
    }

    #[test]
    fn test_missing_fields_are_none() {
        assert_eq!(parse("{}"), TestStruct { text: None, id: None });
    }

    #[test]
    fn test_id_from_number_and_numeric_string() {
        assert_eq!(parse(r#"{"id": 10}"#).id, Some(10));
        assert_eq!(parse(r#"{"id": "10"}"#).id, Some(10));
    }

    #[test]
    fn test_id_from_other_values_is_none() {
        assert_eq!(parse(r#"{"id": "abc"}"#).id, None);
        assert_eq!(parse(r#"{"id": 1.5}"#).id, None);
        assert_eq!(parse(r#"{"id": true}"#).id, None);
        assert_eq!(parse(r#"{"id": null}"#).id, None);
    }
}
