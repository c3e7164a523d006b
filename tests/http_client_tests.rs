//! Integration tests for the HTTP pipeline.
//!
//! These tests run the client against a local mock server and verify
//! authentication headers, envelope error decoding, retries, and the
//! rate limit guard.

use std::time::Duration;

use aftership::auth::signature::{self, SignatureInput};
use aftership::clients::{HttpError, RestError};
use aftership::{
    AftershipConfig, ApiKey, ApiSecret, ApiVersion, AuthenticationType, Endpoint, RestClient,
};
use chrono::Utc;
use serde_json::json;
use std::collections::BTreeMap;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> AftershipConfig {
    AftershipConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .endpoint(Endpoint::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

fn ok_body() -> serde_json::Value {
    json!({"meta": {"code": 200}, "data": {"couriers": [], "total": 0}})
}

// ============================================================================
// Request Construction Tests
// ============================================================================

#[tokio::test]
async fn test_api_key_and_user_agent_headers_are_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/couriers"))
        .and(header("as-api-key", "test-api-key"))
        .and(header("accept", "application/json"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server));
    let response = client.get("/couriers", None).await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.meta().unwrap().code, 200);
}

#[tokio::test]
async fn test_dated_api_version_uses_tracking_prefix() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tracking/2024-04/couriers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::with_version(&config_for(&server), ApiVersion::V2024_04);
    client.get("couriers", None).await.unwrap();
}

#[tokio::test]
async fn test_query_parameters_are_forwarded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/trackings"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server));
    let query = BTreeMap::from([
        ("page".to_string(), "2".to_string()),
        ("limit".to_string(), "50".to_string()),
    ]);
    client.get("trackings", Some(query)).await.unwrap();
}

fn aes_config_for(server: &MockServer) -> AftershipConfig {
    AftershipConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .auth_type(AuthenticationType::Aes)
        .api_secret(ApiSecret::new("test-secret").unwrap())
        .endpoint(Endpoint::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

/// Recomputes the signature of a received request from what went over the
/// wire and checks it against the signature header.
fn assert_signed_with(request: &wiremock::Request, secret: &str) {
    let headers: BTreeMap<String, String> = request
        .headers
        .iter()
        .map(|(name, values)| (name.as_str().to_string(), values.last().as_str().to_string()))
        .collect();
    let date = headers.get(signature::DATE_HEADER).expect("date header");
    let sent = headers
        .get(signature::SIGNATURE_HEADER)
        .expect("signature header");

    let expected = signature::compute_signature(
        &SignatureInput {
            method: &request.method.to_string(),
            body: &request.body,
            date,
            headers: &headers,
            path: request.url.path(),
            query: request.url.query(),
        }
        .sign_string(),
        secret,
    );

    assert_eq!(sent, &expected);
}

#[tokio::test]
async fn test_aes_signature_matches_received_post() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v4/couriers/detect"))
        .and(header("content-type", "application/json"))
        .and(header_exists("date"))
        .and(header_exists(signature::SIGNATURE_HEADER))
        .and(body_json(json!({"tracking": {"tracking_number": "1234567890"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&aes_config_for(&server));
    let body = json!({"tracking": {"tracking_number": "1234567890"}});
    client
        .post("couriers/detect", Some(body), None)
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert_signed_with(&received[0], "test-secret");
}

#[tokio::test]
async fn test_aes_signature_covers_query_as_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/trackings"))
        .and(query_param("keyword", "John Smith*~"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&aes_config_for(&server));
    let query = BTreeMap::from([
        ("keyword".to_string(), "John Smith*~".to_string()),
        ("page".to_string(), "2".to_string()),
    ]);
    client.get("trackings", Some(query)).await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(
        received[0].url.query(),
        Some("keyword=John%20Smith%2A~&page=2")
    );
    assert_signed_with(&received[0], "test-secret");
}

#[test]
fn test_signature_is_stable_for_identical_input() {
    let headers = BTreeMap::from([("as-api-key".to_string(), "test-api-key".to_string())]);
    let input = SignatureInput {
        method: "POST",
        body: br#"{"tracking":{"tracking_number":"1234567890"}}"#,
        date: "Wed, 21 Oct 2015 07:28:00 GMT",
        headers: &headers,
        path: "/v4/couriers/detect",
        query: None,
    };

    let first = signature::compute_signature(&input.sign_string(), "test-secret");
    let second = signature::compute_signature(&input.sign_string(), "test-secret");
    let other_secret = signature::compute_signature(&input.sign_string(), "other-secret");

    assert_eq!(first, second);
    assert_ne!(first, other_secret);
}

// ============================================================================
// Error Mapping Tests
// ============================================================================

#[tokio::test]
async fn test_error_envelope_is_decoded_into_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/trackings/ups/1Z"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("x-request-id", "req-404")
                .set_body_json(json!({
                    "meta": {"code": 4004, "type": "NotFound", "message": "Tracking does not exist."},
                    "data": {}
                })),
        )
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server));
    let error = client.get("trackings/ups/1Z", None).await.unwrap_err();

    let api_error = error.api_error().unwrap();
    assert!(api_error.is_not_found());
    assert_eq!(api_error.code, 4004);
    assert_eq!(api_error.error_type, "NotFound");
    assert_eq!(api_error.message, "Tracking does not exist.");
    assert_eq!(api_error.path, "/v4/trackings/ups/1Z");
    assert_eq!(api_error.request_id.as_deref(), Some("req-404"));
}

#[tokio::test]
async fn test_non_json_error_body_falls_back_to_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/couriers"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server));
    let error = client.get("couriers", None).await.unwrap_err();

    let api_error = error.api_error().unwrap();
    assert!(api_error.is_unauthorized());
    assert_eq!(api_error.code, 401);
    assert_eq!(api_error.message, "Unauthorized");
}

#[tokio::test]
async fn test_put_without_body_is_rejected_before_sending() {
    let server = MockServer::start().await;
    let client = RestClient::new(&config_for(&server));

    // PUT always carries a body through the public API, so exercise the
    // validation through the lower-level client.
    let http = aftership::HttpClient::new(&config_for(&server));
    let request = aftership::HttpRequest {
        http_method: aftership::HttpMethod::Put,
        path: "trackings/abc".to_string(),
        body: None,
        query: None,
        extra_headers: None,
        tries: None,
    };

    let result = http.request(request).await;
    assert!(matches!(result, Err(HttpError::InvalidRequest(_))));
    assert!(client.rate_limit().is_none());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_truncated_response_body_is_a_network_error() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0_u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\n{\"meta\"")
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    let config = AftershipConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .endpoint(Endpoint::new(format!("http://{addr}")).unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(&config);

    let result = client.get("couriers", None).await;
    assert!(matches!(
        result,
        Err(RestError::Http(HttpError::Network(_)))
    ));
}

// ============================================================================
// Retry Tests
// ============================================================================

#[tokio::test]
async fn test_server_error_is_retried_until_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/couriers"))
        .respond_with(ResponseTemplate::new(503).insert_header("retry-after", "0"))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v4/couriers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server));
    let response = client.get_with_tries("couriers", None, 2).await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_exhausted_retries_return_max_retries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/couriers"))
        .respond_with(
            ResponseTemplate::new(500)
                .insert_header("retry-after", "0")
                .set_body_json(json!({"meta": {"code": 500, "type": "InternalError", "message": "boom"}})),
        )
        .expect(3)
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server));
    let error = client.get_with_tries("couriers", None, 3).await.unwrap_err();

    match error {
        RestError::Http(HttpError::MaxRetries(e)) => {
            assert_eq!(e.tries, 3);
            assert_eq!(e.last_error.message, "boom");
        }
        other => panic!("Expected MaxRetries, got {other:?}"),
    }
}

#[tokio::test]
async fn test_single_try_returns_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/couriers"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server));
    let error = client.get("couriers", None).await.unwrap_err();

    assert!(matches!(error, RestError::Http(HttpError::Api(_))));
}

#[tokio::test]
async fn test_client_errors_are_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v4/trackings"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "meta": {"code": 4003, "type": "BadRequest", "message": "Tracking already exists."}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server));
    let error = client
        .post_with_tries("trackings", Some(json!({"tracking": {}})), None, 3)
        .await
        .unwrap_err();

    assert_eq!(error.api_error().unwrap().code, 4003);
}

// ============================================================================
// Rate Limit Tests
// ============================================================================

#[tokio::test]
async fn test_rate_limit_is_recorded_from_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/couriers"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-ratelimit-reset", "1700000000")
                .insert_header("x-ratelimit-limit", "10")
                .insert_header("x-ratelimit-remaining", "9")
                .set_body_json(ok_body()),
        )
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server));
    client.get("couriers", None).await.unwrap();

    let limit = client.rate_limit().unwrap();
    assert_eq!(limit.limit, 10);
    assert_eq!(limit.remaining, 9);
    assert_eq!(limit.reset, 1_700_000_000);
}

#[tokio::test]
async fn test_reached_rate_limit_blocks_further_requests() {
    let server = MockServer::start().await;
    let reset = Utc::now().timestamp() + 60;

    Mock::given(method("GET"))
        .and(path("/v4/couriers"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("x-ratelimit-reset", reset.to_string().as_str())
                .insert_header("x-ratelimit-limit", "10")
                .insert_header("x-ratelimit-remaining", "0")
                .set_body_json(json!({
                    "meta": {"code": 429, "type": "TooManyRequests", "message": "You have exceeded the API call rate limit."}
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server));

    let first = client.get("couriers", None).await.unwrap_err();
    let api_error = first.api_error().unwrap();
    assert!(api_error.is_rate_limited());
    assert!(api_error.retry_after.unwrap() >= Duration::from_secs(1));

    let second = client.get("couriers", None).await.unwrap_err();
    match second {
        RestError::Http(HttpError::RateLimited(e)) => {
            assert_eq!(e.reset, reset);
            assert_eq!(e.limit, 10);
            assert!(e.retry_after_secs >= 1 && e.retry_after_secs <= 60);
        }
        other => panic!("Expected RateLimited, got {other:?}"),
    }
}

#[tokio::test]
async fn test_expired_rate_limit_window_does_not_block() {
    let server = MockServer::start().await;
    let reset = Utc::now().timestamp() - 5;

    Mock::given(method("GET"))
        .and(path("/v4/couriers"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-ratelimit-reset", reset.to_string().as_str())
                .insert_header("x-ratelimit-limit", "10")
                .insert_header("x-ratelimit-remaining", "0")
                .set_body_json(ok_body()),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server));
    client.get("couriers", None).await.unwrap();
    client.get("couriers", None).await.unwrap();
}

#[tokio::test]
async fn test_rate_limited_response_is_retried_with_retry_after() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/couriers"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "0"))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v4/couriers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server));
    let response = client.get_with_tries("couriers", None, 2).await.unwrap();
    assert!(response.is_ok());
}
