//! Integration tests for the counter read (Quote-Count Synchronizer
//! backend side).

mod common;

use common::config_for;
use common::mock_backend::{MockBackend, MockResponse};
use quotegen::backend::{BackendError, GraphQlBackend, QuoteBackend};

const LIVE_ITEM: &str = r#"[{
    "id": "abc-123",
    "queryName": "LIVE",
    "quotesGenerated": 42,
    "createdAt": "2023-01-01T00:00:00Z",
    "updatedAt": "2023-06-01T00:00:00Z"
}]"#;

#[tokio::test]
async fn returns_first_item_of_the_result_set() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::counter_items(
        r#"[
            {"id": "a", "queryName": "LIVE", "quotesGenerated": 42,
             "createdAt": "x", "updatedAt": "y"},
            {"id": "b", "queryName": "LIVE", "quotesGenerated": 99,
             "createdAt": "x", "updatedAt": "y"}
        ]"#,
    ))
    .await;

    let config = config_for(&mock.graphql_url());
    let backend = GraphQlBackend::with_api_key(&config, None).unwrap();

    let record = backend.fetch_counter("LIVE").await.unwrap();
    assert_eq!(record.quotes_generated, 42);
    assert_eq!(record.query_name, "LIVE");
}

#[tokio::test]
async fn sends_the_query_name_variable() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::counter_items(LIVE_ITEM))
        .await;

    let config = config_for(&mock.graphql_url());
    let backend = GraphQlBackend::with_api_key(&config, None).unwrap();
    backend.fetch_counter("LIVE").await.unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");

    let body = requests[0].json();
    assert_eq!(body["variables"]["queryName"], "LIVE");
    assert!(body["query"]
        .as_str()
        .unwrap()
        .contains("quotesQueryName(queryName: $queryName)"));
}

#[tokio::test]
async fn attaches_api_key_header_when_configured() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::counter_items(LIVE_ITEM))
        .await;

    let config = config_for(&mock.graphql_url());
    let backend = GraphQlBackend::with_api_key(&config, Some("secret-key".to_string())).unwrap();
    backend.fetch_counter("LIVE").await.unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].header("x-api-key"), Some("secret-key"));
}

#[tokio::test]
async fn empty_result_set_is_missing_record_not_a_panic() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::counter_items("[]"))
        .await;

    let config = config_for(&mock.graphql_url());
    let backend = GraphQlBackend::with_api_key(&config, None).unwrap();

    let err = backend.fetch_counter("LIVE").await.unwrap_err();
    match err {
        BackendError::MissingRecord { query_name } => assert_eq!(query_name, "LIVE"),
        other => panic!("expected MissingRecord, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_items_field_is_a_shape_error() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"data": {"quotesQueryName": {}}}"#,
    ))
    .await;

    let config = config_for(&mock.graphql_url());
    let backend = GraphQlBackend::with_api_key(&config, None).unwrap();

    let err = backend.fetch_counter("LIVE").await.unwrap_err();
    assert!(matches!(err, BackendError::Shape(_)), "got {err:?}");
}

#[tokio::test]
async fn empty_envelope_is_a_shape_error() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json("{}")).await;

    let config = config_for(&mock.graphql_url());
    let backend = GraphQlBackend::with_api_key(&config, None).unwrap();

    let err = backend.fetch_counter("LIVE").await.unwrap_err();
    assert!(matches!(err, BackendError::Shape(_)), "got {err:?}");
}

#[tokio::test]
async fn graphql_errors_are_surfaced() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::graphql_error("Unauthorized"))
        .await;

    let config = config_for(&mock.graphql_url());
    let backend = GraphQlBackend::with_api_key(&config, None).unwrap();

    let err = backend.fetch_counter("LIVE").await.unwrap_err();
    match err {
        BackendError::Rejected { message } => assert_eq!(message, "Unauthorized"),
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn http_error_status_is_upstream() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(500, "boom")).await;

    let config = config_for(&mock.graphql_url());
    let backend = GraphQlBackend::with_api_key(&config, None).unwrap();

    let err = backend.fetch_counter("LIVE").await.unwrap_err();
    match err {
        BackendError::Upstream { status } => assert_eq!(status, 500),
        other => panic!("expected Upstream, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_backend_is_transport() {
    // Bind and immediately drop a listener so the port is closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = config_for(&format!("http://{}/graphql", addr));
    let backend = GraphQlBackend::with_api_key(&config, None).unwrap();

    let err = backend.fetch_counter("LIVE").await.unwrap_err();
    assert!(matches!(err, BackendError::Transport { .. }), "got {err:?}");
}

#[tokio::test]
async fn slow_backend_hits_the_deadline() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::counter_items(LIVE_ITEM).with_delay(1500))
        .await;

    let mut config = config_for(&mock.graphql_url());
    config.backend.timeout_seconds = 1;
    let backend = GraphQlBackend::with_api_key(&config, None).unwrap();

    let err = backend.fetch_counter("LIVE").await.unwrap_err();
    match err {
        BackendError::Timeout { secs } => assert_eq!(secs, 1),
        other => panic!("expected Timeout, got {other:?}"),
    }
}
