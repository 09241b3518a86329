//! Client configuration errors.

use thiserror::Error;

/// Errors in client configuration.
///
/// These occur while building a [`Client`](crate::Client) and indicate
/// missing or malformed settings rather than a failed call.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No API credential was provided, or it was empty.
    #[error("juice: no credentials provided")]
    MissingCredential,

    /// The base URL could not be parsed.
    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The base URL parsed but cannot carry request paths.
    #[error("Base URL cannot be a base: {url}")]
    CannotBeABase {
        /// The rejected URL.
        url: String,
    },

    /// The credential contains characters not allowed in an HTTP header.
    #[error("Credential is not a valid header value")]
    InvalidCredential,

    /// The default HTTP transport could not be constructed.
    #[error("Failed to build HTTP transport: {0}")]
    Transport(#[source] reqwest::Error),
}
