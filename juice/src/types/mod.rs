//! Juice REST API types.
//!
//! Request payloads derive [`validator::Validate`] and are checked before
//! anything is sent. Response types ignore unknown fields and fall back to
//! defaults for missing ones.

mod account;
mod card;
mod params;
mod transaction;
mod user;

pub use account::{Account, AccountResponse, RegisterAccountData, UpdateAccountData, UsdcAddress};
pub use card::{Card, CardSummary, CreateCardData, CreateCardResponse, PaymentData};
pub use params::{ListCardsParams, NO_PARAMS, NoParams, PageParams};
pub use transaction::{Transaction, TransactionResponse, TransactionsResponse};
pub use user::{RegisterUserData, User, UserAddress, UserResponse, UsersResponse};
