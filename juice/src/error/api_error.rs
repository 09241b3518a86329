//! The Juice API error envelope.
//!
//! Every non-2xx response carries a body of the form
//! `{"message": "...", "errors": ...}`. The `errors` member is not stable
//! across endpoints: sometimes it is an object with known field names
//! (`message`, `amount`, `domain`, `phone_number`, `user-id`), sometimes a
//! free-form map, and sometimes it is missing. Decoding tries the known
//! shape first and keeps anything else as raw JSON, and both render through
//! the same rule.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A decoded Juice API error.
///
/// The [`Display`](std::fmt::Display) form is a single normalized line:
/// the top-level message, then each structured detail, lowercased with
/// trailing punctuation removed.
///
/// ## Examples
///
/// ```rust
/// use juice::ApiError;
///
/// let body = r#"{"message":"Unprocessable entity","errors":{"domain":["This field must be a valid URL."]}}"#;
/// let err: ApiError = serde_json::from_str(body).unwrap();
/// assert_eq!(err.to_string(), "unprocessable entity this field must be a valid url");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Error)]
#[error("{}", self.render())]
pub struct ApiError {
    /// HTTP status code of the response. Not part of the body.
    #[serde(skip)]
    pub status: u16,

    /// Top-level message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Structured or free-form error details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ErrorDetails>,
}

/// The `errors` member of the envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetails {
    /// The known fixed-field shape.
    Fields(FieldErrors),
    /// Any other shape, kept verbatim.
    Other(Value),
}

/// Per-field error messages with the field names the API is known to use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldErrors {
    /// Free-text message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<FieldMessages>,

    /// Problems with an amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<FieldMessages>,

    /// Problems with the integrator domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<FieldMessages>,

    /// Problems with a phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<FieldMessages>,

    /// Problems with a user id.
    #[serde(rename = "user-id", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<FieldMessages>,
}

/// One message or a list of messages for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldMessages {
    /// A single message.
    One(String),
    /// Several messages.
    Many(Vec<String>),
}

impl ApiError {
    /// Attaches the HTTP status the envelope was received with.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Renders the normalized, lowercase message.
    ///
    /// Rendering is idempotent: feeding the output back in as a bare
    /// message yields the same string.
    pub fn render(&self) -> String {
        let head = clean(self.message.as_deref().unwrap_or_default());
        let details: Vec<String> = self
            .errors
            .as_ref()
            .map(ErrorDetails::segments)
            .unwrap_or_default()
            .iter()
            .map(|s| clean(s))
            .filter(|s| !s.is_empty())
            .collect();

        let mut out = head;
        if !details.is_empty() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&details.join("; "));
        }
        out.to_lowercase()
    }
}

impl ErrorDetails {
    /// Returns the detail segments in rendering order.
    fn segments(&self) -> Vec<String> {
        match self {
            Self::Fields(fields) => fields.segments(),
            Self::Other(value) => value_segments(value),
        }
    }
}

impl FieldErrors {
    fn segments(&self) -> Vec<String> {
        [
            &self.amount,
            &self.domain,
            &self.message,
            &self.phone_number,
            &self.user_id,
        ]
        .into_iter()
        .flatten()
        .map(FieldMessages::joined)
        .collect()
    }
}

impl FieldMessages {
    fn joined(&self) -> String {
        match self {
            Self::One(message) => message.clone(),
            Self::Many(messages) => messages
                .iter()
                .map(|m| clean(m))
                .filter(|m| !m.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Flattens an arbitrary JSON value into message segments.
///
/// Object values are taken in document order; keys are dropped.
fn value_segments(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::String(s) => vec![s.clone()],
        Value::Bool(b) => vec![b.to_string()],
        Value::Number(n) => vec![n.to_string()],
        Value::Array(items) => {
            let joined = items
                .iter()
                .flat_map(value_segments)
                .map(|s| clean(&s))
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            vec![joined]
        }
        Value::Object(map) => map.values().flat_map(value_segments).collect(),
    }
}

fn clean(s: &str) -> String {
    s.trim_matches(|c: char| c == ';' || c == '.' || c.is_whitespace())
        .to_string()
}
