//! Card transaction types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single credit or debit against a card.
///
/// Only one side of the currency/id pairs is populated, depending on
/// `type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    pub amount: i64,
    pub card_balance_after: i64,
    pub card_balance_before: i64,
    pub conversion_rate: f64,
    pub created_at: DateTime<Utc>,
    pub credit_currency: Option<String>,
    pub credit_id: Option<String>,
    pub debit_currency: Option<String>,
    pub debit_id: Option<String>,
    pub id: String,
    pub narrative: Option<String>,
    /// `credit` or `debit`.
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionResponse {
    pub data: Transaction,
    pub message: String,
}

/// One page of transactions. `next_page` is an opaque cursor, `None` on the
/// last page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionsResponse {
    pub data: Vec<Transaction>,
    pub message: String,
    pub next_page: Option<String>,
}
