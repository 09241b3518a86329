//! Virtual card endpoints.

mod common;

use chrono::{TimeZone, Utc};
use common::{ACCOUNT_ID, CARD_ID, USER_ID, client_for, fixture_response};
use juice::types::{CreateCardData, ListCardsParams, PaymentData};
use juice::{JuiceError, ValidationError};
use wiremock::matchers::{body_json, body_string, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn payment(amount: u64) -> PaymentData {
    PaymentData {
        source: "integrator".to_string(),
        amount,
        card_id: CARD_ID.to_string(),
    }
}

#[tokio::test]
async fn create_card_decodes_issued_card() {
    let mock_server = MockServer::start().await;
    let data = CreateCardData {
        design_type: "Aurora".to_string(),
        single_use: false,
        source: "integrator".to_string(),
        card_integrator_id: ACCOUNT_ID.to_string(),
        currency: "USD".to_string(),
        juice_user_id: USER_ID.to_string(),
        validity: 30,
    };

    Mock::given(method("POST"))
        .and(path("/cards/create-virtual-card"))
        .and(body_json(&data))
        .respond_with(fixture_response(201, "card_created.json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let card = client.create_card(&data).await.unwrap().data;

    assert_eq!(card.id, CARD_ID);
    assert_eq!(card.user_id, USER_ID);
    assert_eq!(card.provider, "union54");
    assert_eq!(card.expiry, Utc.with_ymd_and_hms(2022, 5, 17, 0, 0, 0).unwrap());
    assert_eq!(card.valid, "05/22");
}

#[tokio::test]
async fn list_cards_encodes_filter_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards"))
        .and(query_param("juice_user_id", USER_ID))
        .and(query_param("limit", "15"))
        .and(query_param("page", "1"))
        .respond_with(fixture_response(200, "cards.json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let cards = client
        .list_cards(&ListCardsParams::new(USER_ID, 15, 1))
        .await
        .unwrap();

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].balance, 19900);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some(format!("juice_user_id={USER_ID}&limit=15&page=1").as_str())
    );
}

#[tokio::test]
async fn get_card_sends_no_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/cards/{CARD_ID}")))
        .and(body_string(""))
        .respond_with(fixture_response(200, "card.json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let card = client.get_card(CARD_ID).await.unwrap();

    assert_eq!(card.status, "active");
    assert!(!card.single_use);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn get_card_rejects_blank_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_card("  ").await.unwrap_err();

    assert!(matches!(
        err,
        JuiceError::Validation(ValidationError::EmptyIdentifier { name: "card_id" })
    ));
}

#[tokio::test]
async fn card_ids_stay_one_path_segment() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/cards/%2Fabc/freeze"))
        .respond_with(fixture_response(200, "card_frozen.json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/cards/abc%3Flimit%3D1"))
        .respond_with(fixture_response(200, "card.json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/cards/abc%23frag"))
        .respond_with(fixture_response(200, "card.json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.freeze_card("/abc").await.unwrap();
    client.get_card("abc?limit=1").await.unwrap();
    client.get_card("abc#frag").await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
    for request in &requests {
        assert!(!request.url.path().contains("//"), "{}", request.url);
        assert_eq!(request.url.query(), None);
    }
}

#[tokio::test]
async fn credit_card_patches_balance() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/cards/credit/balance"))
        .and(body_json(serde_json::json!({
            "source": "integrator",
            "amount": 20000,
            "card_id": CARD_ID,
        })))
        .respond_with(fixture_response(200, "card_credited.json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let card = client.credit_card(&payment(20000)).await.unwrap();

    assert_eq!(card.balance, 20000);
}

#[tokio::test]
async fn debit_card_patches_balance() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/cards/debit/balance"))
        .and(body_json(&payment(100)))
        .respond_with(fixture_response(200, "card.json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let card = client.debit_card(&payment(100)).await.unwrap();

    assert_eq!(card.balance, 19900);
}

#[tokio::test]
async fn zero_amount_payment_is_rejected_locally() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.debit_card(&payment(0)).await.unwrap_err();

    match err {
        JuiceError::Validation(e) => assert_eq!(e.invalid_fields(), vec!["amount"]),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn freeze_and_unfreeze_card() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(format!("/cards/{CARD_ID}/freeze")))
        .respond_with(fixture_response(200, "card_frozen.json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .and(path(format!("/cards/{CARD_ID}/unfreeze")))
        .respond_with(fixture_response(200, "card.json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let frozen = client.freeze_card(CARD_ID).await.unwrap();
    assert_eq!(frozen.status, "inactive");

    let active = client.unfreeze_card(CARD_ID).await.unwrap();
    assert_eq!(active.status, "active");
}
