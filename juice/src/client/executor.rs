//! Request execution with tracing instrumentation.
//!
//! Every endpoint call goes through [`Client::get`], [`Client::post`] or
//! [`Client::patch`]. Each of those validates the parameters, encodes them
//! as a query string or JSON body, sends the request through the configured
//! [`Transport`] and decodes the response. A non-2xx response is decoded as
//! an [`ApiError`] and never as the success type.

use std::fmt;
use std::time::Duration;

use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{Span, instrument};
use url::Url;
use validator::Validate;

use crate::config::{ClientConfig, Credential};
use crate::error::{ApiError, ClientError, ConfigError, DecodeError, JuiceError, ValidationError};
use crate::method::RestMethod;
use crate::transport::{Transport, default_transport};

/// Builder for configuring a [`Client`].
///
/// ## Examples
///
/// ```rust,ignore
/// use std::time::Duration;
/// use juice::Client;
///
/// let client = Client::builder()
///     .credential("sk_test_123")?
///     .base_url("https://api.spendjuice.com")?
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Creates a builder with the sandbox base URL, no credential and
    /// debug logging off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder seeded from `JUICE_PRIVATE_KEY`, `JUICE_BASE_URL`
    /// and `ENV`.
    ///
    /// ## Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            config: ClientConfig::from_env()?,
        })
    }

    /// Sets the API key. The `Bearer ` prefix is added when missing.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] for an empty key.
    pub fn credential(mut self, key: impl AsRef<str>) -> Result<Self, ConfigError> {
        self.config.credential = Some(Credential::new(key)?);
        Ok(self)
    }

    /// Overrides the base URL. A trailing slash is removed.
    ///
    /// ## Errors
    ///
    /// Returns an error if the URL does not parse or cannot carry a path.
    pub fn base_url(mut self, base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
        self.config.set_base_url(base_url.as_ref())?;
        Ok(self)
    }

    /// Inserts a version segment between the base URL and every endpoint
    /// path. The health probe is not versioned.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config.api_version = Some(version.into());
        self
    }

    /// Enables or disables logging of each call and its parameters.
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Sets the timeout of the default transport.
    ///
    /// Ignored by [`build_with_transport`](Self::build_with_transport); a
    /// custom transport owns its own timeouts.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Builds a client backed by a pooled `reqwest::Client`.
    ///
    /// ## Errors
    ///
    /// - [`ConfigError::MissingCredential`] if no credential was set.
    /// - [`ConfigError::Transport`] if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<Client, ConfigError> {
        let transport = default_transport(self.config.timeout)?;
        self.build_with_transport(transport)
    }

    /// Builds a client that sends every request through `transport`.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] if no credential was set.
    pub fn build_with_transport<T: Transport>(self, transport: T) -> Result<Client<T>, ConfigError> {
        let credential = self
            .config
            .credential
            .clone()
            .ok_or(ConfigError::MissingCredential)?;

        Ok(Client {
            config: self.config,
            credential,
            transport,
        })
    }
}

/// Async client for the Juice API.
///
/// Configuration is fixed at build time, so a client can be cloned and
/// shared across tasks freely. The default transport pools connections.
///
/// ## Examples
///
/// ```rust,ignore
/// use juice::Client;
/// use juice::types::PageParams;
///
/// let client = Client::new("sk_test_123")?;
/// let users = client.list_users(&PageParams::new(10, 1)).await?;
/// println!("{} users", users.total);
/// ```
#[derive(Debug, Clone)]
pub struct Client<T = reqwest::Client> {
    config: ClientConfig,
    credential: Credential,
    transport: T,
}

impl Client {
    /// Creates a new builder for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Creates a sandbox client with the given API key.
    ///
    /// ## Errors
    ///
    /// Returns an error if the key is empty or the HTTP client cannot be
    /// constructed.
    pub fn new(key: impl AsRef<str>) -> Result<Self, ConfigError> {
        ClientBuilder::new().credential(key)?.build()
    }

    /// Creates a client configured from the process environment.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] if `JUICE_PRIVATE_KEY` is
    /// unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        ClientBuilder::from_env()?.build()
    }
}

impl<T: Transport> Client<T> {
    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends a GET request; `params` travel in the query string.
    ///
    /// ## Errors
    ///
    /// See [`JuiceError`] for the failure categories.
    pub async fn get<P, R>(&self, path: &str, params: Option<&P>) -> Result<R, JuiceError>
    where
        P: Serialize + Validate + fmt::Debug,
        R: DeserializeOwned,
    {
        self.call(RestMethod::Get, path, params).await
    }

    /// Sends a POST request; `params` travel as a JSON body.
    ///
    /// ## Errors
    ///
    /// See [`JuiceError`] for the failure categories.
    pub async fn post<P, R>(&self, path: &str, params: Option<&P>) -> Result<R, JuiceError>
    where
        P: Serialize + Validate + fmt::Debug,
        R: DeserializeOwned,
    {
        self.call(RestMethod::Post, path, params).await
    }

    /// Sends a PATCH request; `params` travel as a JSON body.
    ///
    /// ## Errors
    ///
    /// See [`JuiceError`] for the failure categories.
    pub async fn patch<P, R>(&self, path: &str, params: Option<&P>) -> Result<R, JuiceError>
    where
        P: Serialize + Validate + fmt::Debug,
        R: DeserializeOwned,
    {
        self.call(RestMethod::Patch, path, params).await
    }

    /// Calls `GET {base}/health/live` and returns the raw body.
    ///
    /// The probe is sent without credentials and the status code is not
    /// inspected; only transport failures are errors.
    #[instrument(
        name = "juice_health",
        skip(self),
        fields(
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
        )
    )]
    pub async fn health(&self) -> Result<String, JuiceError> {
        let url = self.config.health_url().map_err(ClientError::from)?;
        Span::current().record("http.url", url.as_str());

        let request = reqwest::Request::new(reqwest::Method::GET, url);
        let response = self
            .transport
            .send(request)
            .await
            .map_err(ClientError::Request)?;
        Span::current().record("http.status_code", response.status().as_u16());

        let body = response.text().await.map_err(ClientError::Request)?;
        Ok(body)
    }

    #[instrument(
        name = "juice_request",
        skip(self, params),
        fields(
            http.method = %method,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    async fn call<P, R>(
        &self,
        method: RestMethod,
        path: &str,
        params: Option<&P>,
    ) -> Result<R, JuiceError>
    where
        P: Serialize + Validate + fmt::Debug,
        R: DeserializeOwned,
    {
        if let Some(params) = params {
            params.validate().map_err(ValidationError::from)?;
        }

        let mut url = self.config.resolve_url(path).map_err(ClientError::from)?;
        let mut body = None;
        if let Some(params) = params {
            if method.has_body() {
                body = Some(serde_json::to_vec(params).map_err(ValidationError::from)?);
            } else {
                append_query(&mut url, params)?;
            }
        }

        Span::current().record("http.url", url.as_str());
        if self.config.debug {
            tracing::debug!(http.method = %method, http.url = %url, "juice: call");
            tracing::debug!(params = ?params, "juice: request params");
        }

        let mut request = reqwest::Request::new(method.to_reqwest(), url);
        if let Some(body) = body {
            *request.body_mut() = Some(body.into());
        }

        let (status, body) = self.execute(request).await?;
        decode_response(status, &body)
    }

    /// Attaches the fixed headers, sends the request and buffers the body.
    async fn execute(
        &self,
        mut request: reqwest::Request,
    ) -> Result<(StatusCode, Bytes), ClientError> {
        let headers = request.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, self.credential.header_value());

        let response = self.transport.send(request).await?;

        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());
        let otel_status = if status.is_success() {
            "OK"
        } else if status.is_server_error() {
            "ERROR"
        } else {
            "UNSET"
        };
        Span::current().record("otel.status_code", otel_status);

        let body = response.bytes().await?;
        Ok((status, body))
    }
}

/// Decodes a buffered response body.
///
/// Non-2xx bodies are decoded as the error envelope only.
fn decode_response<R: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<R, JuiceError> {
    if !status.is_success() {
        let status = status.as_u16();
        let error: ApiError = serde_json::from_slice(body)
            .map_err(|source| DecodeError::ErrorBody { status, source })?;
        return Err(error.with_status(status).into());
    }

    serde_json::from_slice(body).map_err(|e| DecodeError::Payload(e).into())
}

/// Appends `params` to the URL query in field declaration order.
///
/// `null` fields are skipped. Nested arrays or objects are rejected.
fn append_query<P: Serialize>(url: &mut Url, params: &P) -> Result<(), ValidationError> {
    let Value::Object(fields) = serde_json::to_value(params)? else {
        return Err(ValidationError::QueryShape);
    };

    let mut pairs = Vec::with_capacity(fields.len());
    for (key, value) in fields {
        let value = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Array(_) | Value::Object(_) => return Err(ValidationError::QueryShape),
        };
        pairs.push((key, value));
    }

    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }
    Ok(())
}
