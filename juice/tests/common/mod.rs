//! Shared helpers for the endpoint integration tests.
//!
//! Provides fixture loading and a client pointed at a wiremock server.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use juice::Client;
use wiremock::{MockServer, ResponseTemplate};

pub const ACCOUNT_ID: &str = "27de9f46-726a-4499-aa62-27c3ed274026";
pub const USER_ID: &str = "be2c7d1c-c02a-4925-a7c4-4c5b4fc579f1";
pub const CARD_ID: &str = "0c7ca765-764c-4f62-9c35-ac3e2abcee01";
pub const TRX_ID: &str = "9b14c12e-2e20-4a4e-8508-ab816b8e575c";

/// Loads a JSON fixture from the `tests/fixtures/` directory.
///
/// ## Panics
///
/// Panics if the fixture file cannot be read or does not exist.
pub fn load_fixture(name: &str) -> String {
    let mut fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    fixture_path.push("tests");
    fixture_path.push("fixtures");
    fixture_path.push(name);

    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture at {:?}: {}",
            fixture_path.display(),
            e
        )
    })
}

/// A response with the given status and a fixture as its JSON body.
pub fn fixture_response(status: u16, name: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(load_fixture(name), "application/json")
}

/// A client with credential `test-key` that talks to `server`.
pub fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .credential("test-key")
        .expect("valid credential")
        .base_url(server.uri())
        .expect("valid base url")
        .build()
        .expect("client builds")
}
