//! API Error Taxonomy
//!
//! Request failures fall into three buckets: authorization failures (handled
//! by the session coordinator), validation failures (field-keyed payloads
//! rendered inline next to form fields), and everything else (logged and
//! toasted). Nothing here is fatal.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

/// Field name -> list of messages, as returned by DRF serializers
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Key DRF uses for errors not tied to a single field
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),
    /// 401 that survived the one refresh-and-retry attempt
    #[error("not authorized")]
    Unauthorized,
    /// 400 with a field-keyed error payload
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("request failed with status {0}")]
    Status(u16),
}

impl ApiError {
    /// Field errors for inline rendering, if this is a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ApiError::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Normalize a DRF 400 body into field-keyed message lists.
///
/// DRF emits `{"title": ["This field is required."]}` for serializer errors
/// and `{"detail": "..."}` for generic ones; values may be strings or string
/// arrays. Anything non-object collapses to a single `non_field_errors`
/// entry.
pub fn field_errors_from_value(value: Value) -> FieldErrors {
    let mut errors = FieldErrors::new();
    match value {
        Value::Object(map) => {
            for (field, messages) in map {
                let list = match messages {
                    Value::Array(items) => items
                        .into_iter()
                        .filter_map(|item| match item {
                            Value::String(s) => Some(s),
                            other => Some(other.to_string()),
                        })
                        .collect(),
                    Value::String(s) => vec![s],
                    other => vec![other.to_string()],
                };
                errors.insert(field, list);
            }
        }
        Value::String(s) => {
            errors.insert(NON_FIELD_ERRORS.to_string(), vec![s]);
        }
        other => {
            errors.insert(NON_FIELD_ERRORS.to_string(), vec![other.to_string()]);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_keyed_lists_pass_through() {
        let errors = field_errors_from_value(json!({
            "title": ["This field is required."],
            "category": ["Invalid pk \"9\" - object does not exist."],
        }));
        assert_eq!(errors["title"], vec!["This field is required."]);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_bare_string_values_become_single_message() {
        let errors = field_errors_from_value(json!({"detail": "Not found."}));
        assert_eq!(errors["detail"], vec!["Not found."]);
    }

    #[test]
    fn test_non_object_payload_maps_to_non_field_errors() {
        let errors = field_errors_from_value(json!("something broke"));
        assert_eq!(errors[NON_FIELD_ERRORS], vec!["something broke"]);
    }

    #[test]
    fn test_validation_exposes_field_errors() {
        let err = ApiError::Validation(field_errors_from_value(json!({"title": ["Required"]})));
        assert!(err.field_errors().is_some());
        assert!(!err.is_unauthorized());
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(ApiError::Status(500).field_errors().is_none());
    }
}
