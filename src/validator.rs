//! Request-body validation.
//!
//! Bodies decode in two phases: first into raw JSON (catching syntax and
//! content-type problems), then into the target DTO (catching missing or
//! mistyped fields), and finally through the DTO's `validator` rules.
//! Decode failures are 400s, rule failures 422s, all in the envelope.

use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use goldenhorse_core::AppError;

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<serde_json::Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let message = match rejection {
                    JsonRejection::MissingJsonContentType(_) => {
                        "Missing 'Content-Type: application/json' header"
                    }
                    _ => "Request body is not valid JSON",
                };
                AppError::bad_request(anyhow!(message))
            })?;

        let value: T = serde_json::from_value(raw)
            .map_err(|e| AppError::bad_request(anyhow!(decode_message(&e))))?;

        value
            .validate()
            .map_err(|errors| AppError::unprocessable(anyhow!(rule_messages(&errors).join(", "))))?;

        Ok(ValidatedJson(value))
    }
}

/// Client-facing message for a body that is valid JSON but does not fit
/// the DTO. Missing fields are named so the caller knows what to add.
fn decode_message(err: &serde_json::Error) -> String {
    let detail = err.to_string();

    if let Some(field) = detail
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
    {
        return format!("{field} is required");
    }

    if detail.starts_with("invalid type") || detail.starts_with("invalid value") {
        return "Invalid field type in request".to_string();
    }

    "Invalid request body".to_string()
}

/// Flattens `validator`'s per-field errors into a sorted message list,
/// one entry per broken rule.
fn rule_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, Validate)]
    struct Dto {
        #[validate(length(min = 1, message = "name must not be empty"))]
        name: String,
        #[validate(range(min = 0.0, message = "amount must not be negative"))]
        amount: f64,
        note: Option<String>,
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let err = serde_json::from_value::<Dto>(json!({ "amount": 1.0 })).unwrap_err();
        assert_eq!(decode_message(&err), "name is required");
    }

    #[test]
    fn test_mistyped_field_is_a_type_error() {
        let err =
            serde_json::from_value::<Dto>(json!({ "name": "x", "amount": "lots" })).unwrap_err();
        assert_eq!(decode_message(&err), "Invalid field type in request");
    }

    #[test]
    fn test_rule_messages_list_every_broken_rule() {
        let dto = Dto {
            name: String::new(),
            amount: -1.0,
            note: None,
        };
        let errors = dto.validate().unwrap_err();

        assert_eq!(
            rule_messages(&errors),
            vec!["amount must not be negative", "name must not be empty"]
        );
    }
}
