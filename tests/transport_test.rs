//! Wiremock integration tests for ReqwestTransport.

use std::time::Duration;

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use timezonedb::transport::USER_AGENT;
use timezonedb::{HttpTransport, ReqwestTransport, RequestParameters, TimezoneDbError};

#[tokio::test]
async fn sends_query_and_returns_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2.1/get-time-zone"))
        .and(query_param("key", "K"))
        .and(query_param("by", "zone"))
        .and(query_param("zone", "Europe/Oslo"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<result/>"))
        .expect(1)
        .mount(&server)
        .await;

    let query = RequestParameters::new()
        .with("key", "K")
        .with("by", "zone")
        .with("zone", "Europe/Oslo")
        .normalize();

    let transport = ReqwestTransport::new().unwrap();
    let response = transport
        .get(&format!("{}/v2.1/get-time-zone", server.uri()), &query)
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, b"<result/>");
}

#[tokio::test]
async fn error_status_is_returned_not_raised() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new().unwrap();
    let response = transport
        .get(&server.uri(), &RequestParameters::new().normalize())
        .await
        .unwrap();

    assert_eq!(response.status, 503);
    assert!(!response.is_success());
    assert_eq!(response.body, b"maintenance");
}

#[tokio::test]
async fn user_agent_identifies_client() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("user-agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new().unwrap();
    transport
        .get(&server.uri(), &RequestParameters::new().normalize())
        .await
        .unwrap();
}

#[test]
fn user_agent_carries_crate_version() {
    assert_eq!(
        USER_AGENT,
        format!("timezonedb-rs/{}", env!("CARGO_PKG_VERSION"))
    );
}

#[tokio::test]
async fn timeout_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let transport = ReqwestTransport::with_timeout(Duration::from_millis(100)).unwrap();
    let err = transport
        .get(&server.uri(), &RequestParameters::new().normalize())
        .await
        .unwrap_err();

    assert!(matches!(err, TimezoneDbError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    // nothing listens on port 1
    let uri = "http://127.0.0.1:1";

    let transport = ReqwestTransport::new().unwrap();
    let err = transport
        .get(uri, &RequestParameters::new().normalize())
        .await
        .unwrap_err();

    assert!(matches!(err, TimezoneDbError::Transport(_)));
}
