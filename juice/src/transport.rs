//! Pluggable HTTP transport.
//!
//! The client never talks to the network directly; it hands a fully built
//! [`reqwest::Request`] to a [`Transport`]. The default transport is a
//! `reqwest::Client`, which pools connections internally. Tests and callers
//! can substitute their own implementation.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::error::ConfigError;

/// Executes one HTTP request and returns its response.
///
/// ## Native Async Traits
///
/// This trait uses native async functions in traits; implementations can
/// simply write `async fn send`.
///
/// ## Implementation Requirements
///
/// Implementations must be `Send + Sync` so a single client can serve
/// concurrent calls. A transport must not interpret the status code: non-2xx
/// responses are returned as `Ok` and decoded by the client.
///
/// ## Examples
///
/// ```rust,ignore
/// use juice::Transport;
///
/// struct Logged(reqwest::Client);
///
/// impl Transport for Logged {
///     async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response, reqwest::Error> {
///         tracing::info!(url = %request.url(), "sending");
///         self.0.execute(request).await
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Sends the request.
    ///
    /// ## Errors
    ///
    /// Returns the transport's error for network, connect and timeout
    /// failures.
    fn send(
        &self,
        request: reqwest::Request,
    ) -> impl Future<Output = Result<reqwest::Response, reqwest::Error>> + Send;
}

impl Transport for reqwest::Client {
    async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response, reqwest::Error> {
        self.execute(request).await
    }
}

impl<T: Transport> Transport for Arc<T> {
    async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response, reqwest::Error> {
        self.as_ref().send(request).await
    }
}

/// Builds the default `reqwest` transport with the given request timeout.
///
/// ## Errors
///
/// Returns [`ConfigError::Transport`] if the TLS backend cannot be
/// initialized.
pub fn default_transport(timeout: Duration) -> Result<reqwest::Client, ConfigError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(ConfigError::Transport)
}
