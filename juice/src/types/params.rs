//! Query parameter types for paginated endpoints.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Pagination parameters, sent as `?limit=..&page=..`.
///
/// ## Examples
///
/// ```rust
/// use juice::types::PageParams;
///
/// let params = PageParams::default();
/// assert_eq!((params.limit, params.page), (10, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PageParams {
    #[validate(range(min = 1))]
    pub limit: u32,

    /// One-based page number.
    #[validate(range(min = 1))]
    pub page: u32,
}

impl PageParams {
    pub fn new(limit: u32, page: u32) -> Self {
        Self { limit, page }
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self { limit: 10, page: 1 }
    }
}

/// Filter and pagination for `GET /cards`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ListCardsParams {
    #[validate(length(min = 1))]
    pub juice_user_id: String,

    #[validate(range(min = 1))]
    pub limit: u32,

    #[validate(range(min = 1))]
    pub page: u32,
}

impl ListCardsParams {
    pub fn new(juice_user_id: impl Into<String>, limit: u32, page: u32) -> Self {
        Self {
            juice_user_id: juice_user_id.into(),
            limit,
            page,
        }
    }
}

/// Marker for requests that carry no parameters.
///
/// Serializes to an empty object so it never produces a body or query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NoParams {}

pub const NO_PARAMS: Option<&NoParams> = None;

impl Validate for NoParams {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}
