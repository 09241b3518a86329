//! HTTP verbs used by the Juice API.

use strum::Display;

/// HTTP methods the Juice API exposes.
///
/// ## Examples
///
/// ```rust
/// use juice::RestMethod;
///
/// let method = RestMethod::Get;
/// assert!(!method.has_body());
/// assert_eq!(method.to_string(), "GET");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource. Parameters travel in the query string.
    Get,
    /// HTTP POST - Create a resource.
    Post,
    /// HTTP PATCH - Partially update a resource.
    Patch,
}

impl RestMethod {
    /// Returns `true` if parameters for this method travel as a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Patch)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Patch => reqwest::Method::PATCH,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}
