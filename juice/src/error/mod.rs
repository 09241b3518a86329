//! Layered error types for the Juice client.
//!
//! The error hierarchy is structured for actionable diagnostics:
//! - [`JuiceError`] - Top-level error type for all client operations
//! - [`ClientError`] - Transport and request construction failures
//! - [`ValidationError`] - Request payloads rejected before sending
//! - [`ApiError`] - The error envelope returned by the Juice API
//! - [`DecodeError`] - Response bodies that could not be decoded
//! - [`ConfigError`] - Client configuration errors

mod api_error;
mod client_error;
mod config_error;
mod decode_error;
mod juice_error;
mod validation_error;

pub use api_error::{ApiError, ErrorDetails, FieldErrors, FieldMessages};
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use decode_error::DecodeError;
pub use juice_error::JuiceError;
pub use validation_error::ValidationError;
