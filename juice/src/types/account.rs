//! Card integrator account types.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /card-integrators/register-integrator`.
///
/// ## Example
///
/// ```json
/// {
///   "float_currencies": ["USD"],
///   "business_address": "Lekki Ikate",
///   "business_name": "Algo Math",
///   "chain": "ETH",
///   "contact_number": "+2349099435568",
///   "country": "NG",
///   "domain": "https://boro.com",
///   "email": "boro@gmail.com",
///   "first_name": "Olusola",
///   "last_name": "Alao",
///   "password": "@Password",
///   "registration_number": "RC-546787",
///   "webhook_url": "https://webhook.site/7bdf91c4"
/// }
/// ```
///
/// The `Debug` output masks `password`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RegisterAccountData {
    /// Currencies the integrator float is held in.
    #[validate(length(min = 1, message = "At least one float currency is required"))]
    pub float_currencies: Vec<String>,

    #[validate(length(min = 1))]
    pub business_address: String,

    #[validate(length(min = 1))]
    pub business_name: String,

    /// Blockchain used for the USDC funding address (e.g. `ETH`).
    #[validate(length(min = 1))]
    pub chain: String,

    #[validate(length(min = 1))]
    pub contact_number: String,

    /// ISO 3166 alpha-2 country code.
    #[validate(length(min = 1))]
    pub country: String,

    #[validate(length(min = 1))]
    pub domain: String,

    #[validate(length(min = 1))]
    pub email: String,

    #[validate(length(min = 1))]
    pub first_name: String,

    #[validate(length(min = 1))]
    pub last_name: String,

    #[validate(length(min = 1))]
    pub password: String,

    #[validate(length(min = 1))]
    pub registration_number: String,

    /// Where Juice delivers card events.
    #[validate(length(min = 1))]
    pub webhook_url: String,
}

impl fmt::Debug for RegisterAccountData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterAccountData")
            .field("float_currencies", &self.float_currencies)
            .field("business_address", &self.business_address)
            .field("business_name", &self.business_name)
            .field("chain", &self.chain)
            .field("contact_number", &self.contact_number)
            .field("country", &self.country)
            .field("domain", &self.domain)
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("password", &"***")
            .field("registration_number", &self.registration_number)
            .field("webhook_url", &self.webhook_url)
            .finish()
    }
}

/// Request body for `PATCH /card-integrators/update`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpdateAccountData {
    #[validate(length(min = 1))]
    pub webhook_url: String,

    #[validate(length(min = 1))]
    pub business_address: String,

    #[validate(length(min = 1))]
    pub domain: String,
}

/// A card integrator account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub business_address: String,
    pub business_name: String,
    pub chain: String,
    pub contact_number: String,
    pub country: String,
    pub domain: String,
    pub email: String,
    pub first_name: String,
    pub float_currencies: Vec<String>,
    pub id: String,
    pub last_name: String,
    pub registration_number: String,
    pub usdc_address: UsdcAddress,
}

/// The USDC address that funds an integrator float.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsdcAddress {
    pub address: String,
    pub chain: String,
    pub currency: String,
}

/// Envelope returned by the account endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountResponse {
    pub data: Account,
}
