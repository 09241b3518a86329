//! Request validation errors.

use thiserror::Error;

/// A request was rejected before it was sent.
///
/// The caller must fix the input; no network call was made.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// One or more payload fields failed their constraints.
    #[error("Invalid request payload: {0}")]
    Invalid(#[from] validator::ValidationErrors),

    /// The payload could not be serialized.
    #[error("Failed to encode request payload: {0}")]
    Encode(#[from] serde_json::Error),

    /// Query parameters did not serialize to a flat object.
    #[error("Query parameters must serialize to an object")]
    QueryShape,

    /// An identifier that forms part of the request path was empty.
    #[error("Missing path identifier: {name}")]
    EmptyIdentifier {
        /// Name of the identifier argument.
        name: &'static str,
    },
}

impl ValidationError {
    /// Returns the names of the payload fields that failed validation.
    pub fn invalid_fields(&self) -> Vec<&str> {
        match self {
            Self::Invalid(errors) => {
                let mut fields: Vec<&str> = errors.errors().keys().map(|k| k.as_ref()).collect();
                fields.sort_unstable();
                fields
            }
            _ => Vec::new(),
        }
    }
}
