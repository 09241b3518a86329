//! Virtual card types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /cards/create-virtual-card`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateCardData {
    /// Card artwork, e.g. `Aurora`.
    #[validate(length(min = 1))]
    pub design_type: String,

    pub single_use: bool,

    /// Who funds the card, e.g. `integrator`.
    #[validate(length(min = 1))]
    pub source: String,

    #[validate(length(min = 1))]
    pub card_integrator_id: String,

    #[validate(length(min = 1))]
    pub currency: String,

    #[validate(length(min = 1))]
    pub juice_user_id: String,

    /// Validity in days.
    #[validate(range(min = 1))]
    pub validity: u32,
}

/// Request body for the credit and debit balance endpoints.
///
/// `amount` is in minor units of the card currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PaymentData {
    #[validate(length(min = 1))]
    pub source: String,

    #[validate(range(min = 1))]
    pub amount: u64,

    #[validate(length(min = 1))]
    pub card_id: String,
}

/// A freshly issued card, with owner and provider details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    pub balance: i64,
    pub business_id: String,
    pub card_name: String,
    pub card_number: String,
    pub card_type: String,
    pub currency: String,
    pub cvv2: String,
    pub design_type: String,
    pub expiry: DateTime<Utc>,
    pub id: String,
    pub provider: String,
    pub single_use: bool,
    pub status: String,
    pub user_id: String,
    /// Expiry as printed on the card, `MM/YY`.
    pub valid: String,
}

/// The card shape returned by lookup, balance and freeze endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardSummary {
    pub balance: i64,
    pub card_number: String,
    pub card_type: String,
    pub cvv2: String,
    pub expiry: DateTime<Utc>,
    pub id: String,
    pub single_use: bool,
    pub status: String,
    pub valid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateCardResponse {
    pub data: Card,
}
