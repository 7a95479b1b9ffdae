//! Integration tests for the live status lookup.
//!
//! Uses a mockito server in place of the real status endpoint.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use loadsched::AppError;
use loadsched::status::{LiveStage, StatusClient};
use loadsched_core::Stage;
use mockito::Server;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(5);

async fn client_for(server: &Server) -> StatusClient {
    StatusClient::new(format!("{}/LoadShedding/getstatus", server.url()), TIMEOUT).unwrap()
}

#[tokio::test]
async fn test_fetch_active_stage() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/LoadShedding/getstatus")
        .with_status(200)
        .with_body("3")
        .create_async()
        .await;

    let live = client_for(&server).await.fetch_stage().await.unwrap();

    assert_eq!(live, LiveStage::Shedding(Stage(2)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_no_shedding() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/LoadShedding/getstatus")
        .with_body("1")
        .create_async()
        .await;

    let live = client_for(&server).await.fetch_stage().await.unwrap();

    assert_eq!(live, LiveStage::NoShedding);
    assert_eq!(live.stage(), Stage(0));
}

#[tokio::test]
async fn test_fetch_unavailable_sentinel() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/LoadShedding/getstatus")
        .with_body("99")
        .create_async()
        .await;

    let result = client_for(&server).await.fetch_stage().await;

    assert!(matches!(result, Err(AppError::StatusUnavailable)));
}

#[tokio::test]
async fn test_fetch_non_numeric_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/LoadShedding/getstatus")
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let result = client_for(&server).await.fetch_stage().await;

    assert!(matches!(result, Err(AppError::InvalidStatus(_))));
}

#[tokio::test]
async fn test_fetch_server_error_is_network_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/LoadShedding/getstatus")
        .with_status(503)
        .create_async()
        .await;

    let result = client_for(&server).await.fetch_stage().await;

    match result {
        Err(AppError::NetworkError(msg)) => assert!(msg.contains("503"), "message: {msg}"),
        other => panic!("expected network error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    let client = StatusClient::new("http://127.0.0.1:1/getstatus", TIMEOUT).unwrap();

    let result = client.fetch_stage().await;

    assert!(matches!(result, Err(AppError::NetworkError(_))));
}
