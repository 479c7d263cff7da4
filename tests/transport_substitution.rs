//! Transport and Signer Substitution Tests
//!
//! Drives the signing and dispatch core through in-memory transports so the
//! exact outgoing requests can be inspected, and so timeouts can be tested
//! without touching the network.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use vagon_streams_sdk::{
    ApiError, Configuration, HttpMethod, HttpRequest, HttpResponse, Signer, Transport,
    VagonClient, VagonError,
};

const NONCE: &str = "00112233445566778899aabbccddeeff";
const TIMESTAMP: &str = "1700000000000";

/// Records every request and answers with a canned response
#[derive(Debug, Clone)]
struct RecordingTransport {
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    response: HttpResponse,
}

impl RecordingTransport {
    fn new(status: u16, body: &str) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            response: HttpResponse::new(status, body),
        }
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for RecordingTransport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, ApiError>> + Send + '_>> {
        self.requests.lock().unwrap().push(request);
        let response = self.response.clone();
        Box::pin(async move { Ok(response) })
    }
}

/// Never answers
#[derive(Debug)]
struct SilentTransport;

impl Transport for SilentTransport {
    fn send(
        &self,
        _request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, ApiError>> + Send + '_>> {
        Box::pin(std::future::pending())
    }
}

/// Always fails before a response arrives
#[derive(Debug)]
struct UnreachableTransport;

impl Transport for UnreachableTransport {
    fn send(
        &self,
        _request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, ApiError>> + Send + '_>> {
        Box::pin(async { Err(ApiError::Network("dns lookup failed".to_string())) })
    }
}

#[derive(Debug)]
struct FixedSigner;

impl Signer for FixedSigner {
    fn nonce(&self) -> String {
        NONCE.to_string()
    }

    fn timestamp(&self) -> String {
        TIMESTAMP.to_string()
    }
}

fn expected_signature(payload: &str) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(b"test-secret").unwrap();
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

fn client_with(transport: impl Transport + 'static) -> VagonClient {
    VagonClient::new(Configuration::new("test-key", "test-secret"))
        .unwrap()
        .with_transport(transport)
}

// ============================================================================
// Outgoing request shape
// ============================================================================

#[tokio::test]
async fn test_get_places_pagination_in_query_and_signs_bare_path() {
    let transport = RecordingTransport::new(200, r#"{"applications":[],"count":0,"page":1}"#);
    let client = client_with(transport.clone()).with_signer(FixedSigner);

    let response = client.application_list(None, None).await.unwrap();
    assert!(response.applications.is_empty());

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];

    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(
        request.url.as_str(),
        "https://api.vagon.io/app-stream-management/v2/applications?page=1&per_page=100"
    );
    assert_eq!(request.body, None);
    assert_eq!(request.header("Content-Type"), None);

    let payload = format!(
        "test-keyGET/app-stream-management/v2/applications{}{}",
        TIMESTAMP, NONCE
    );
    assert_eq!(
        request.header("Authorization").unwrap(),
        format!(
            "HMAC test-key:{}:{}:{}",
            expected_signature(&payload),
            NONCE,
            TIMESTAMP
        )
    );
}

#[tokio::test]
async fn test_stats_without_arguments_send_default_pagination() {
    let transport = RecordingTransport::new(200, r#"{"machines":[],"count":0,"page":1}"#);
    let client = client_with(transport.clone()).with_signer(FixedSigner);

    client.stream_machine_stats(None, None, None).await.unwrap();
    client.visitor_session_stats(None, None, None).await.unwrap();

    let requests = transport.requests();
    assert_eq!(
        requests[0].url.as_str(),
        "https://api.vagon.io/app-stream-management/v2/machines?page=1&per_page=20"
    );
    assert_eq!(
        requests[1].url.as_str(),
        "https://api.vagon.io/app-stream-management/v2/sessions?page=1&per_page=20"
    );
}

#[tokio::test]
async fn test_post_signs_exact_json_body() {
    let transport = RecordingTransport::new(
        200,
        r#"{"type":"user","attributes":{"email":"jane@example.com"}}"#,
    );
    let client = client_with(transport.clone()).with_signer(FixedSigner);

    client.user_create("jane@example.com").await.unwrap();

    let request = transport.requests().remove(0);
    let body = request.body.clone().unwrap();
    assert_eq!(body, r#"{"email":"jane@example.com"}"#);
    assert_eq!(request.header("Content-Type"), Some("application/json"));

    let payload = format!(
        "test-keyPOST/app-stream-management/v2/users{}{}{}",
        TIMESTAMP, NONCE, body
    );
    let authorization = request.header("Authorization").unwrap();
    assert!(authorization.contains(&expected_signature(&payload)));
}

#[tokio::test]
async fn test_delete_without_data_signs_empty_body() {
    let transport = RecordingTransport::new(200, r#"{"client_code":200}"#);
    let client = client_with(transport.clone()).with_signer(FixedSigner);

    client.user_remove("user-5").await.unwrap();

    let request = transport.requests().remove(0);
    assert_eq!(request.method, HttpMethod::Delete);
    assert_eq!(request.body.as_deref(), Some(""));
    assert_eq!(request.header("Content-Type"), None);

    let payload = format!(
        "test-keyDELETE/app-stream-management/v2/users/user-5{}{}",
        TIMESTAMP, NONCE
    );
    assert!(request
        .header("Authorization")
        .unwrap()
        .contains(&expected_signature(&payload)));
}

#[tokio::test]
async fn test_repeated_calls_use_fresh_nonces() {
    let transport = RecordingTransport::new(200, r#"{"applications":[],"count":0,"page":1}"#);
    let client = client_with(transport.clone());

    let (a, b) = tokio::join!(
        client.application_list(None, None),
        client.application_list(None, None)
    );
    a.unwrap();
    b.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);

    let parts = |request: &HttpRequest| -> Vec<String> {
        request
            .header("Authorization")
            .unwrap()
            .trim_start_matches("HMAC ")
            .split(':')
            .map(str::to_string)
            .collect()
    };
    let first = parts(&requests[0]);
    let second = parts(&requests[1]);

    assert_eq!(first.len(), 4);
    assert_ne!(first[2], second[2], "nonce reused");
    assert_ne!(first[1], second[1], "signature reused");
}

// ============================================================================
// Failure modes
// ============================================================================

#[tokio::test]
async fn test_http_error_status_and_body() {
    let transport = RecordingTransport::new(401, "unauthorized");
    let client = client_with(transport);

    let err = client.application_list(None, None).await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.body(), Some("unauthorized"));
}

#[tokio::test]
async fn test_transport_failure_is_not_http_error() {
    let client = client_with(UnreachableTransport);

    let err = client.machine_list("stream-1").await.unwrap_err();
    assert!(matches!(err, VagonError::Api(ApiError::Network(_))));
    assert!(err.is_transport());
    assert!(!err.is_http());
}

#[tokio::test(start_paused = true)]
async fn test_request_timeout_aborts_silent_transport() {
    let timeout = Duration::from_millis(1500);
    let client = VagonClient::new(
        Configuration::new("test-key", "test-secret").with_request_timeout(timeout),
    )
    .unwrap()
    .with_transport(SilentTransport);

    let started = tokio::time::Instant::now();
    let err = client.stream_config_get("stream-1").await.unwrap_err();

    assert!(err.is_timeout());
    assert!(matches!(err, VagonError::Api(ApiError::Timeout(d)) if d == timeout));
    assert!(started.elapsed() >= timeout);
}

#[tokio::test]
async fn test_timeout_does_not_affect_fast_responses() {
    let transport = RecordingTransport::new(200, r#"{"client_code":200}"#);
    let client = VagonClient::new(
        Configuration::new("test-key", "test-secret")
            .with_request_timeout(Duration::from_secs(5)),
    )
    .unwrap()
    .with_transport(transport);

    let response = client.machine_stop("stream-1", "m-1").await.unwrap();
    assert_eq!(response.client_code, Some(200));
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_missing_credentials_fail_before_any_request() {
    let cases = [
        Configuration::new("", "secret"),
        Configuration::new("key", ""),
        Configuration::new("", ""),
        Configuration::new("", "secret").with_request_timeout(Duration::from_secs(1)),
        Configuration::new("key", "").with_base_url("http://localhost:9000"),
    ];

    for config in cases {
        let result = VagonClient::new(config);
        assert!(matches!(result, Err(VagonError::Config(_))));
    }
}
