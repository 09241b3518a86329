//! Card user types.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A user's postal address.
///
/// Used both in [`RegisterUserData`] and in [`User`] responses. `line2` and
/// `state` come back as `null` for some users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UserAddress {
    #[validate(length(min = 1))]
    pub city: String,

    #[validate(length(min = 1))]
    pub country: String,

    #[validate(length(min = 1))]
    pub line1: String,

    pub line2: Option<String>,

    pub state: Option<String>,

    #[validate(length(min = 1))]
    pub zip_code: String,
}

/// Request body for `POST /card-integrators/{account_id}/register-user`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RegisterUserData {
    #[validate(nested)]
    pub address: UserAddress,

    #[validate(length(min = 1))]
    pub email: String,

    #[validate(length(min = 1))]
    pub first_name: String,

    #[validate(length(min = 1))]
    pub id_number: String,

    /// Identity document type, e.g. `BVN`.
    #[validate(length(min = 1))]
    pub id_type: String,

    #[validate(length(min = 1))]
    pub last_name: String,

    #[validate(length(min = 1))]
    pub phone_number: String,

    /// Photo URL or encoded image. Omitted from the body when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_photo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub address: UserAddress,
    pub archived: bool,
    pub card_integrator_id: String,
    pub email: String,
    pub first_name: String,
    pub id: String,
    pub id_number: String,
    pub id_type: String,
    pub last_name: String,
    pub phone_number: String,
    pub verified: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserResponse {
    pub data: User,
}

/// One page of card users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsersResponse {
    pub page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub data: Vec<User>,
}
