//! End-to-end healthcheck scenarios against a mock ServiceNow instance.
//!
//! Each test drives `ServiceNowAdapter::healthcheck` through the real
//! reqwest transport and asserts on the emitted status event, the
//! returned outcome, and the error log line.

mod common;

use mockito::Server;
use serde_json::json;

use common::{adapter_for, hibernating_page, refused_url, BASIC_AUTH_HEADER, TABLE_PATH};
use servicenow_adapter::{AdapterStatus, ConnectorError, Level, TransportError};

#[tokio::test]
async fn test_healthcheck_online_with_projected_records() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", TABLE_PATH)
        .match_header("authorization", BASIC_AUTH_HEADER)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"result":[{"number":"CHG001","sys_id":"abc","risk":"high"}]}"#)
        .create_async()
        .await;

    let (adapter, logger) = adapter_for(&server.url());
    let mut events = adapter.subscribe();

    let tickets = adapter
        .healthcheck()
        .await
        .expect("healthcheck should succeed")
        .expect("body should not be empty");

    mock.assert_async().await;
    let event = events.recv().await.unwrap();
    assert_eq!(event.status, AdapterStatus::Online);
    assert_eq!(event.payload.id, "sn-it");

    assert_eq!(tickets.len(), 1);
    assert_eq!(
        serde_json::to_value(&tickets[0]).unwrap(),
        json!({ "change_ticket_number": "CHG001", "change_ticket_key": "abc" })
    );
    assert!(logger.contains(Level::Debug, "healthcheck succeeded"));
}

#[tokio::test]
async fn test_healthcheck_offline_when_hibernating() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", TABLE_PATH)
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(hibernating_page())
        .create_async()
        .await;

    let (adapter, logger) = adapter_for(&server.url());
    let mut events = adapter.subscribe();

    let err = adapter.healthcheck().await.unwrap_err();

    assert!(matches!(err, ConnectorError::Hibernating));
    assert_eq!(err.to_string(), "Hibernating instance");
    assert_eq!(events.recv().await.unwrap().status, AdapterStatus::Offline);
    assert!(logger.contains(Level::Error, "sn-it: healthcheck failed: Hibernating instance"));
}

#[tokio::test]
async fn test_healthcheck_offline_on_server_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", TABLE_PATH)
        .with_status(500)
        .with_body(r#"{"error":{"message":"Internal error"}}"#)
        .create_async()
        .await;

    let (adapter, logger) = adapter_for(&server.url());
    let mut events = adapter.subscribe();

    let err = adapter.healthcheck().await.unwrap_err();

    let response = err.response().expect("status errors carry the raw response");
    assert_eq!(response.status, 500);
    assert_eq!(response.body, r#"{"error":{"message":"Internal error"}}"#);
    assert_eq!(events.recv().await.unwrap().status, AdapterStatus::Offline);
    assert!(logger.contains(Level::Error, "sn-it: healthcheck failed"));
}

#[tokio::test]
async fn test_healthcheck_offline_on_connection_refused() {
    let (adapter, logger) = adapter_for(&refused_url());
    let mut events = adapter.subscribe();

    let err = adapter.healthcheck().await.unwrap_err();

    assert!(
        matches!(err, ConnectorError::Transport(TransportError::Connect(_))),
        "expected connect error, got {err:?}"
    );
    assert!(err.response().is_none());
    assert_eq!(events.recv().await.unwrap().status, AdapterStatus::Offline);
    assert!(logger.contains(Level::Error, "ServiceNow request failed"));
}

#[tokio::test]
async fn test_connect_recovers_after_outage() {
    let mut server = Server::new_async().await;
    let down = server
        .mock("GET", TABLE_PATH)
        .with_status(503)
        .expect(1)
        .create_async()
        .await;

    let (adapter, _logger) = adapter_for(&server.url());
    let mut events = adapter.subscribe();

    adapter.connect().await;
    down.assert_async().await;
    down.remove_async().await;

    let _up = server
        .mock("GET", TABLE_PATH)
        .with_status(200)
        .with_body(r#"{"result":[]}"#)
        .create_async()
        .await;
    adapter.connect().await;

    assert_eq!(events.recv().await.unwrap().status, AdapterStatus::Offline);
    assert_eq!(events.recv().await.unwrap().status, AdapterStatus::Online);
}
