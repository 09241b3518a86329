//! Response decoding errors.

use thiserror::Error;

/// A response body could not be decoded.
///
/// Distinct from [`ApiError`](super::ApiError): this means the body itself
/// was malformed, whether it was a success payload or an error envelope.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A 2xx body did not match the expected response type.
    #[error("Failed to decode response body: {0}")]
    Payload(#[source] serde_json::Error),

    /// A non-2xx body was not a valid error envelope.
    #[error("Failed to decode error body (HTTP {status}): {source}")]
    ErrorBody {
        /// The HTTP status code of the response.
        status: u16,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    /// Returns `true` if the failing body came with a non-2xx status.
    pub fn is_error_body(&self) -> bool {
        matches!(self, Self::ErrorBody { .. })
    }
}
