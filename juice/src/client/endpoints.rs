//! One typed method per Juice operation.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::{JuiceError, ValidationError};
use crate::transport::Transport;
use crate::types::{
    AccountResponse, CardSummary, CreateCardData, CreateCardResponse, ListCardsParams, NO_PARAMS,
    PageParams, PaymentData, RegisterAccountData, RegisterUserData, TransactionResponse,
    TransactionsResponse, UpdateAccountData, UserResponse, UsersResponse,
};

use super::Client;

/// Everything but RFC 3986 unreserved characters is escaped, `/` included.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Turns an identifier into exactly one encoded path segment.
///
/// Blank identifiers are rejected.
fn require_id(name: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyIdentifier { name });
    }
    Ok(utf8_percent_encode(value, PATH_SEGMENT).to_string())
}

impl<T: Transport> Client<T> {
    // Accounts

    /// Registers a card integrator account.
    ///
    /// `POST /card-integrators/register-integrator`
    pub async fn register_account(
        &self,
        data: &RegisterAccountData,
    ) -> Result<AccountResponse, JuiceError> {
        self.post("/card-integrators/register-integrator", Some(data))
            .await
    }

    /// Updates the webhook URL, business address and domain of the account.
    ///
    /// `PATCH /card-integrators/update`
    pub async fn update_account(
        &self,
        data: &UpdateAccountData,
    ) -> Result<AccountResponse, JuiceError> {
        self.patch("/card-integrators/update", Some(data)).await
    }

    /// Convenience form of [`update_account`](Self::update_account).
    pub async fn update_account_fields(
        &self,
        webhook_url: impl Into<String>,
        business_address: impl Into<String>,
        domain: impl Into<String>,
    ) -> Result<AccountResponse, JuiceError> {
        let data = UpdateAccountData {
            webhook_url: webhook_url.into(),
            business_address: business_address.into(),
            domain: domain.into(),
        };
        self.update_account(&data).await
    }

    // Users

    /// Registers a user who will hold cards under `account_id`.
    ///
    /// `POST /card-integrators/{account_id}/register-user`
    pub async fn register_user(
        &self,
        data: &RegisterUserData,
        account_id: &str,
    ) -> Result<UserResponse, JuiceError> {
        let account_id = require_id("account_id", account_id)?;
        self.post(
            &format!("/card-integrators/{account_id}/register-user"),
            Some(data),
        )
        .await
    }

    /// Lists card users attached to the account.
    ///
    /// `GET /card-integrators/card-users?limit=..&page=..`
    pub async fn list_users(&self, params: &PageParams) -> Result<UsersResponse, JuiceError> {
        self.get("/card-integrators/card-users", Some(params)).await
    }

    // Cards

    /// Issues a virtual card.
    ///
    /// `POST /cards/create-virtual-card`
    pub async fn create_card(
        &self,
        data: &CreateCardData,
    ) -> Result<CreateCardResponse, JuiceError> {
        self.post("/cards/create-virtual-card", Some(data)).await
    }

    /// Lists a user's cards. The response is a bare array.
    ///
    /// `GET /cards?juice_user_id=..&limit=..&page=..`
    pub async fn list_cards(
        &self,
        params: &ListCardsParams,
    ) -> Result<Vec<CardSummary>, JuiceError> {
        self.get("/cards", Some(params)).await
    }

    /// `GET /cards/{card_id}`
    pub async fn get_card(&self, card_id: &str) -> Result<CardSummary, JuiceError> {
        let card_id = require_id("card_id", card_id)?;
        self.get(&format!("/cards/{card_id}"), NO_PARAMS).await
    }

    /// Tops up a card.
    ///
    /// `PATCH /cards/credit/balance`
    pub async fn credit_card(&self, data: &PaymentData) -> Result<CardSummary, JuiceError> {
        self.patch("/cards/credit/balance", Some(data)).await
    }

    /// Debits a card.
    ///
    /// `PATCH /cards/debit/balance`
    pub async fn debit_card(&self, data: &PaymentData) -> Result<CardSummary, JuiceError> {
        self.patch("/cards/debit/balance", Some(data)).await
    }

    /// `PATCH /cards/{card_id}/freeze`
    pub async fn freeze_card(&self, card_id: &str) -> Result<CardSummary, JuiceError> {
        let card_id = require_id("card_id", card_id)?;
        self.patch(&format!("/cards/{card_id}/freeze"), NO_PARAMS)
            .await
    }

    /// `PATCH /cards/{card_id}/unfreeze`
    pub async fn unfreeze_card(&self, card_id: &str) -> Result<CardSummary, JuiceError> {
        let card_id = require_id("card_id", card_id)?;
        self.patch(&format!("/cards/{card_id}/unfreeze"), NO_PARAMS)
            .await
    }

    // Transactions

    /// Lists transactions on a card.
    ///
    /// `GET /cards/{card_id}/transactions?limit=..&page=..`
    pub async fn list_transactions(
        &self,
        card_id: &str,
        params: &PageParams,
    ) -> Result<TransactionsResponse, JuiceError> {
        let card_id = require_id("card_id", card_id)?;
        self.get(&format!("/cards/{card_id}/transactions"), Some(params))
            .await
    }

    /// `GET /cards/transaction/{trx_id}`
    pub async fn get_transaction(&self, trx_id: &str) -> Result<TransactionResponse, JuiceError> {
        let trx_id = require_id("trx_id", trx_id)?;
        self.get(&format!("/cards/transaction/{trx_id}"), NO_PARAMS)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_id_trims() {
        assert_eq!(require_id("card_id", " abc ").unwrap(), "abc");
    }

    #[test]
    fn test_require_id_keeps_uuids_verbatim() {
        let id = "0c7ca765-764c-4f62-9c35-ac3e2abcee01";
        assert_eq!(require_id("card_id", id).unwrap(), id);
    }

    #[test]
    fn test_require_id_escapes_reserved_characters() {
        assert_eq!(require_id("card_id", "/abc").unwrap(), "%2Fabc");
        assert_eq!(require_id("card_id", "abc/").unwrap(), "abc%2F");
        assert_eq!(require_id("card_id", "abc?limit=1").unwrap(), "abc%3Flimit%3D1");
        assert_eq!(require_id("card_id", "abc#frag").unwrap(), "abc%23frag");
    }

    #[test]
    fn test_require_id_rejects_blank() {
        for blank in ["", "   "] {
            assert!(matches!(
                require_id("card_id", blank),
                Err(ValidationError::EmptyIdentifier { name: "card_id" })
            ));
        }
    }
}
