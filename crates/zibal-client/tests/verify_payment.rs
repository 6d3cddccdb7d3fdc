//! Payment verification integration tests.

mod common;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{mock_client, stub_client, StubTransport, MERCHANT};
use zibal_client::{Status, ZibalClient, ZibalError};

#[tokio::test]
async fn verify_payment_returns_confirmed_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/verify"))
        .and(body_json(json!({ "merchant": MERCHANT, "trackId": 4242 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": 100,
            "message": "confirmed",
            "status": 100,
            "amount": 1500,
            "paidAt": "2018-03-25T23:43:01.053000"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let response = client
        .verify_payment(4242)
        .await
        .expect("verify should succeed");

    assert_eq!(response.body.status, Some(Status::Confirmed));
    assert_eq!(response.body.amount, Some(1500));
    assert_eq!(response.body.result_status(), Some(Status::Confirmed));
    assert!(response.body.paid_at_time().is_some());
}

#[tokio::test]
async fn verify_payment_reports_unverified_payment() {
    let transport = StubTransport::json(&json!({
        "result": 202,
        "message": "incomplete",
        "status": 2
    }));
    let client = stub_client(&transport);

    let response = client.verify_payment(4242).await.unwrap();

    assert_eq!(response.body.status, Some(Status::Paid { verified: false }));
    assert_eq!(response.body.result_status(), Some(Status::IncompletePayment));
    assert_eq!(response.body.amount, None);
}

#[tokio::test]
async fn unknown_status_fails_whole_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/verify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": 100,
            "message": "confirmed",
            "status": 999,
            "amount": 1500
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client.verify_payment(4242).await.unwrap_err();

    match err {
        ZibalError::BadResponse {
            response: Some(meta),
        } => assert_eq!(meta.status.as_u16(), 200),
        other => panic!("expected BadResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn unconfigured_client_makes_no_call() {
    let transport = StubTransport::json(&json!({ "result": 100, "message": "ok" }));
    let client = ZibalClient::with_transport(transport.clone());

    let err = client.verify_payment(4242).await.unwrap_err();

    assert!(matches!(err, ZibalError::InvalidConfig));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn start_url_follows_base_url() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    let url = client.start_url(4242).unwrap();
    assert_eq!(url.as_str(), format!("{}/start/4242", server.uri()));
}
