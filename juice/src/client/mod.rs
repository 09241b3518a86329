//! The Juice API client.
//!
//! [`executor`] owns configuration, request construction and response
//! decoding. [`endpoints`] layers one typed method per Juice operation on
//! top of it.

mod endpoints;
mod executor;

pub use executor::{Client, ClientBuilder};
