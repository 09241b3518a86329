//! Typed async client for the Juice card-issuing REST API.
//!
//! The `juice` crate wraps account registration, user onboarding, the
//! virtual card lifecycle, card payments and transaction history in
//! strongly typed request and response structs.
//!
//! ## Features
//!
//! - **Validated requests**: payloads are checked with `validator` before
//!   anything goes on the wire
//! - **Async-first HTTP client**: built on `reqwest`, with a pluggable
//!   [`Transport`] for tests and custom stacks
//! - **Layered error handling**: transport, validation, API and decoding
//!   failures are distinct [`JuiceError`] variants
//! - **Normalized API errors**: every error envelope renders as one
//!   lowercase line
//! - **Tracing**: each call runs in a `juice_request` span
//!
//! ## Example
//!
//! ```rust,ignore
//! use juice::Client;
//! use juice::types::{ListCardsParams, PaymentData};
//!
//! let client = Client::from_env()?;
//!
//! let cards = client
//!     .list_cards(&ListCardsParams::new("be2c7d1c-c02a-4925-a7c4-4c5b4fc579f1", 15, 1))
//!     .await?;
//!
//! let card = client
//!     .credit_card(&PaymentData {
//!         source: "integrator".to_string(),
//!         amount: 20_000,
//!         card_id: cards[0].id.clone(),
//!     })
//!     .await?;
//! println!("new balance: {}", card.balance);
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod method;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use client::{Client, ClientBuilder};
pub use config::{ClientConfig, Credential};
pub use error::{
    ApiError, ClientError, ConfigError, DecodeError, ErrorDetails, JuiceError, ValidationError,
};
pub use method::RestMethod;
pub use transport::Transport;
