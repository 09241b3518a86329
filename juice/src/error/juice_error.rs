//! Top-level Juice error type.

use super::{ApiError, ClientError, ConfigError, DecodeError, ValidationError};
use thiserror::Error;

/// Top-level error type for all client operations.
///
/// Every endpoint method either fully succeeds with a decoded value or fails
/// with exactly one of these variants. Nothing is retried.
///
/// ## Examples
///
/// ```rust,ignore
/// use juice::JuiceError;
///
/// fn handle_error(err: JuiceError) {
///     match err {
///         JuiceError::Client(e) => eprintln!("Network error: {e}"),
///         JuiceError::Validation(e) => eprintln!("Fix the request: {e}"),
///         JuiceError::Api(e) => eprintln!("Juice rejected the call ({}): {e}", e.status),
///         JuiceError::Decode(e) => eprintln!("Unexpected response: {e}"),
///         JuiceError::Config(e) => eprintln!("Configuration error: {e}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum JuiceError {
    /// Transport failures (network, timeout, connection).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The request payload was rejected before any network call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The API answered with a non-2xx status and an error envelope.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A success or error body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Client configuration errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl JuiceError {
    /// Returns the API error envelope if the server rejected the call.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the HTTP status code when one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status),
            Self::Decode(DecodeError::ErrorBody { status, .. }) => Some(*status),
            Self::Client(e) => e.status_code(),
            _ => None,
        }
    }
}
