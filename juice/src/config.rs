//! Client configuration.
//!
//! A [`ClientConfig`] is assembled once, either from defaults, from the
//! process environment or through [`ClientBuilder`](crate::ClientBuilder),
//! and is read-only once a [`Client`](crate::Client) has been built. To
//! change the credential, base URL or debug flag, build a new client.

use std::fmt;
use std::time::Duration;

use reqwest::header::HeaderValue;
use url::Url;

use crate::error::ConfigError;

/// Sandbox endpoint used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://sandbox.spendjuice.com";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "JUICE_PRIVATE_KEY";

/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "JUICE_BASE_URL";

/// Deployment-mode variable; debug logging is off only when it is `production`.
pub const ENV_DEPLOYMENT: &str = "ENV";

const BEARER_PREFIX: &str = "Bearer ";

/// An API credential, always stored in `Bearer <token>` form.
///
/// ## Examples
///
/// ```rust
/// use juice::Credential;
///
/// let credential = Credential::new("abc123").unwrap();
/// assert_eq!(credential.as_str(), "Bearer abc123");
///
/// let unchanged = Credential::new("Bearer abc123").unwrap();
/// assert_eq!(unchanged.as_str(), "Bearer abc123");
///
/// assert!(Credential::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    value: String,
    header: HeaderValue,
}

impl Credential {
    /// Creates a credential, adding the `Bearer ` prefix when it is missing.
    ///
    /// ## Errors
    ///
    /// - [`ConfigError::MissingCredential`] if the key (or the token after
    ///   the prefix) is empty.
    /// - [`ConfigError::InvalidCredential`] if the key cannot be sent as an
    ///   HTTP header value.
    pub fn new(key: impl AsRef<str>) -> Result<Self, ConfigError> {
        let key = key.as_ref();
        let value = match key.strip_prefix(BEARER_PREFIX) {
            Some(token) if token.trim().is_empty() => return Err(ConfigError::MissingCredential),
            Some(_) => key.to_string(),
            None if key.trim().is_empty() => return Err(ConfigError::MissingCredential),
            None => format!("{BEARER_PREFIX}{key}"),
        };

        let mut header =
            HeaderValue::from_str(&value).map_err(|_| ConfigError::InvalidCredential)?;
        header.set_sensitive(true);

        Ok(Self { value, header })
    }

    /// Returns the full `Bearer <token>` string.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the credential as a sensitive header value.
    pub fn header_value(&self) -> HeaderValue {
        self.header.clone()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(Bearer ***)")
    }
}

/// Settings shared by every request a client makes.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub(crate) base_url: String,
    pub(crate) api_version: Option<String>,
    pub(crate) credential: Option<Credential>,
    pub(crate) debug: bool,
    pub(crate) timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: None,
            credential: None,
            debug: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Reads configuration from the process environment.
    ///
    /// - `JUICE_PRIVATE_KEY` supplies the credential (optional here; a
    ///   client cannot be built without one).
    /// - `JUICE_BASE_URL` overrides the sandbox base URL.
    /// - `ENV` enables debug logging unless it equals `production`.
    ///
    /// ## Errors
    ///
    /// Returns an error if a variable is set but holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
            config.set_base_url(&base_url)?;
        }

        config.credential = match std::env::var(ENV_API_KEY) {
            Ok(key) if !key.is_empty() => Some(Credential::new(key)?),
            _ => None,
        };

        config.debug = std::env::var(ENV_DEPLOYMENT)
            .map(|mode| mode != "production")
            .unwrap_or(true);

        Ok(config)
    }

    /// Returns the base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the API version path segment, if one is set.
    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }

    /// Returns the credential, if one is set.
    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// Returns `true` if request logging is enabled.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Returns the request timeout used by the default transport.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn set_base_url(&mut self, base_url: &str) -> Result<(), ConfigError> {
        let parsed = Url::parse(base_url)?;
        if parsed.cannot_be_a_base() {
            return Err(ConfigError::CannotBeABase {
                url: base_url.to_string(),
            });
        }
        self.base_url = parsed.as_str().trim_end_matches('/').to_string();
        Ok(())
    }

    /// Resolves a request path against the base URL and API version.
    ///
    /// Exactly one `/` separates each part, whatever slashes the inputs
    /// carry.
    pub fn resolve_url(&self, path: &str) -> Result<Url, url::ParseError> {
        let mut joined = self.base_url.clone();
        let version = self.api_version.as_deref().map(|v| v.trim_matches('/'));
        if let Some(version) = version.filter(|v| !v.is_empty()) {
            joined.push('/');
            joined.push_str(version);
        }
        joined.push('/');
        joined.push_str(path.trim_start_matches('/'));
        Url::parse(&joined)
    }

    /// The liveness probe URL. Not versioned.
    pub fn health_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&format!("{}/health/live", self.base_url))
    }
}
