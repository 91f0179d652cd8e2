//! Custom serde helpers for query-string deserialization.
//!
//! Query parameters arrive as strings; these helpers parse them leniently
//! so that malformed values fall back to defaults instead of rejecting
//! the request.

use serde::{Deserialize, Deserializer};

/// Deserializes an optional float from its string form.
///
/// Empty or unparseable strings become `None`.
pub fn deserialize_optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.as_deref()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Params {
        #[serde(default, deserialize_with = "deserialize_optional_f64")]
        amount: Option<f64>,
    }

    #[test]
    fn test_parses_valid_float() {
        let params: Params = serde_json::from_str(r#"{"amount":"100.5"}"#).unwrap();
        assert_eq!(params.amount, Some(100.5));
    }

    #[test]
    fn test_garbage_becomes_none() {
        let params: Params = serde_json::from_str(r#"{"amount":"abc"}"#).unwrap();
        assert_eq!(params.amount, None);

        let params: Params = serde_json::from_str(r#"{"amount":""}"#).unwrap();
        assert_eq!(params.amount, None);
    }

    #[test]
    fn test_missing_is_none() {
        let params: Params = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(params.amount, None);
    }
}
