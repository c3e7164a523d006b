//! HTTP client for AfterShip API communication.
//!
//! This module provides the [`HttpClient`] type, which authenticates,
//! sends, and classifies requests, retrying rate-limited and failing
//! responses when asked to.

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use chrono::Utc;

use crate::auth::signature::{self, SignatureInput};
use crate::auth::{AuthenticationType, API_KEY_HEADER};
use crate::clients::errors::{HttpError, MaxHttpRetriesExceededError, RateLimitExceededError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::clients::RateLimit;
use crate::config::{AftershipConfig, ApiSecret};

/// Fixed retry wait time in seconds when the response gives no hint.
pub const RETRY_WAIT_TIME: u64 = 1;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the AfterShip API.
///
/// The client handles:
/// - Base URL construction from the configured endpoint and API version
/// - Default headers including User-Agent and the API key
/// - AES request signing when configured
/// - A local guard that refuses requests while the rate limit is exhausted
/// - Automatic retry logic for 429 and 5xx responses
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. The last observed rate limit is shared by
/// every task using the same client.
///
/// # Example
///
/// ```rust,ignore
/// use aftership::{AftershipConfig, ApiKey};
/// use aftership::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = AftershipConfig::builder()
///     .api_key(ApiKey::new("my-api-key").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
/// let request = HttpRequest::builder(HttpMethod::Get, "couriers").build().unwrap();
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.aftership.com`).
    base_uri: String,
    /// Base path (e.g., "/v4").
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    auth_type: AuthenticationType,
    api_secret: Option<ApiSecret>,
    default_tries: u32,
    /// The most recent rate limit reported by the API.
    rate_limit: RwLock<Option<RateLimit>>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client using the configured API version.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &AftershipConfig) -> Self {
        Self::with_base_path(config.api_version().base_path(), config)
    }

    /// Creates a new HTTP client with an explicit base path.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created.
    #[must_use]
    pub fn with_base_path(base_path: impl Into<String>, config: &AftershipConfig) -> Self {
        let base_path = base_path.into();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}aftership-sdk-rust/{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            API_KEY_HEADER.to_string(),
            config.api_key().as_ref().to_string(),
        );

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self {
            client,
            base_uri: config.endpoint().as_ref().to_string(),
            base_path,
            default_headers,
            auth_type: config.auth_type(),
            api_secret: config.api_secret().cloned(),
            default_tries: config.tries(),
            rate_limit: RwLock::new(None),
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the most recent rate limit reported by the API.
    #[must_use]
    pub fn rate_limit(&self) -> Option<RateLimit> {
        *self
            .rate_limit
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn record_rate_limit(&self, limit: RateLimit) {
        *self
            .rate_limit
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(limit);
    }

    /// Refuses to send while the last known rate limit is exhausted.
    fn check_rate_limit(&self) -> Result<(), RateLimitExceededError> {
        let Some(limit) = self.rate_limit() else {
            return Ok(());
        };

        let now = Utc::now().timestamp();
        if !limit.is_reached_at(now) {
            return Ok(());
        }

        let retry_after_secs = limit.retry_after_at(now).as_secs();
        tracing::warn!(
            reset = limit.reset,
            retry_after_secs,
            "AfterShip rate limit reached, refusing request"
        );
        Err(RateLimitExceededError {
            reset: limit.reset,
            limit: limit.limit,
            retry_after_secs,
        })
    }

    /// Sends an HTTP request to the AfterShip API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The rate limit is known to be exhausted (`RateLimited`)
    /// - Network error occurs, including a failed body read (`Network`)
    /// - Non-2xx response received (`Api`)
    /// - Max retries exceeded (`MaxRetries`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;
        self.check_rate_limit()?;

        let path = format!(
            "{}/{}",
            self.base_path,
            request.path.trim_start_matches('/')
        );
        let query = request
            .query
            .as_ref()
            .map(signature::encode_query)
            .filter(|q| !q.is_empty());
        let url = match &query {
            Some(query) => format!("{}{path}?{query}", self.base_uri),
            None => format!("{}{path}", self.base_uri),
        };
        let body = request
            .body
            .as_ref()
            .map(serde_json::to_vec)
            .transpose()?
            .unwrap_or_default();
        let tries = request.tries.unwrap_or(self.default_tries).max(1);

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;

            let headers = self.build_headers(&request, &path, query.as_deref(), &body);

            tracing::debug!(
                method = request.http_method.as_str(),
                path = %path,
                attempt,
                "Sending AfterShip API request"
            );

            let mut req_builder = self.client.request(request.http_method.into(), &url);
            for (key, value) in &headers {
                req_builder = req_builder.header(key.as_str(), value.as_str());
            }
            if !body.is_empty() {
                req_builder = req_builder.body(body.clone());
            }

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await?;
            let response = HttpResponse::new(code, res_headers, Self::parse_body(&body_text));

            if let Some(limit) = response.rate_limit {
                self.record_rate_limit(limit);
            }

            if response.is_ok() {
                return Ok(response);
            }

            let error = response.to_api_error(&path);

            if !error.is_retryable() {
                return Err(HttpError::Api(error));
            }

            if attempt >= tries {
                if tries == 1 {
                    return Err(HttpError::Api(error));
                }
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    tries,
                    last_error: error,
                }));
            }

            let delay = error
                .retry_after
                .unwrap_or_else(|| Duration::from_secs(RETRY_WAIT_TIME));
            tracing::warn!(
                status = code,
                attempt,
                tries,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "Retrying AfterShip API request"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Builds the full header set for one attempt, signing it if needed.
    ///
    /// `query` is the encoded query string exactly as it appears in the URL.
    fn build_headers(
        &self,
        request: &HttpRequest,
        path: &str,
        query: Option<&str>,
        body: &[u8],
    ) -> BTreeMap<String, String> {
        let mut headers: BTreeMap<String, String> = self
            .default_headers
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        if !body.is_empty() {
            headers.insert(
                "Content-Type".to_string(),
                signature::JSON_CONTENT_TYPE.to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        if self.auth_type == AuthenticationType::Aes {
            if let Some(secret) = &self.api_secret {
                let date = signature::http_date(Utc::now());
                let input = SignatureInput {
                    method: request.http_method.as_str(),
                    body,
                    date: &date,
                    headers: &headers,
                    path,
                    query,
                };
                let sig = signature::compute_signature(&input.sign_string(), secret.as_ref());

                headers.insert(signature::DATE_HEADER.to_string(), date);
                headers.insert(signature::SIGNATURE_HEADER.to_string(), sig);
            }
        }

        headers
    }

    fn parse_body(body_text: &str) -> serde_json::Value {
        if body_text.trim().is_empty() {
            return serde_json::json!({});
        }
        serde_json::from_str(body_text)
            .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
    }

    /// Parses response headers into a `HashMap` keyed by lowercase name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;
    use crate::config::{ApiKey, ApiVersion, Endpoint};

    fn config() -> AftershipConfig {
        AftershipConfig::builder()
            .api_key(ApiKey::new("test-api-key").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_from_config() {
        let client = HttpClient::new(&config());

        assert_eq!(client.base_uri(), "https://api.aftership.com");
        assert_eq!(client.base_path(), "/v4");
        assert!(client.rate_limit().is_none());
    }

    #[test]
    fn test_client_uses_configured_endpoint_and_version() {
        let config = AftershipConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .endpoint(Endpoint::new("http://localhost:9000").unwrap())
            .api_version(ApiVersion::V2024_04)
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        assert_eq!(client.base_uri(), "http://localhost:9000");
        assert_eq!(client.base_path(), "/tracking/2024-04");
    }

    #[test]
    fn test_default_headers() {
        let client = HttpClient::new(&config());
        let headers = client.default_headers();

        assert_eq!(
            headers.get(API_KEY_HEADER),
            Some(&"test-api-key".to_string())
        );
        assert_eq!(headers.get("Accept"), Some(&"application/json".to_string()));
        assert!(headers
            .get("User-Agent")
            .unwrap()
            .starts_with("aftership-sdk-rust/"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = AftershipConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | aftership-sdk-rust/"));
    }

    #[test]
    fn test_api_key_auth_does_not_sign() {
        let client = HttpClient::new(&config());
        let request = HttpRequest::builder(HttpMethod::Get, "couriers")
            .build()
            .unwrap();

        let headers = client.build_headers(&request, "/v4/couriers", None, b"");
        assert!(!headers.contains_key(signature::SIGNATURE_HEADER));
        assert!(!headers.contains_key("Content-Type"));
    }

    #[test]
    fn test_aes_auth_signs_requests() {
        let config = AftershipConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .auth_type(AuthenticationType::Aes)
            .api_secret(crate::ApiSecret::new("secret").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config);
        let request = HttpRequest::builder(HttpMethod::Post, "trackings")
            .body(serde_json::json!({"tracking": {"tracking_number": "1Z"}}))
            .build()
            .unwrap();
        let body = serde_json::to_vec(request.body.as_ref().unwrap()).unwrap();

        let headers = client.build_headers(&request, "/v4/trackings", None, &body);
        let date = headers.get(signature::DATE_HEADER).unwrap();
        let expected = signature::compute_signature(
            &SignatureInput {
                method: "POST",
                body: &body,
                date,
                headers: &headers,
                path: "/v4/trackings",
                query: None,
            }
            .sign_string(),
            "secret",
        );

        assert_eq!(headers.get(signature::SIGNATURE_HEADER), Some(&expected));
        assert_eq!(
            headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_rate_limit_guard() {
        let client = HttpClient::new(&config());
        assert!(client.check_rate_limit().is_ok());

        let reset = Utc::now().timestamp() + 30;
        client.record_rate_limit(RateLimit {
            reset,
            limit: 10,
            remaining: 0,
        });
        let error = client.check_rate_limit().unwrap_err();
        assert_eq!(error.reset, reset);
        assert!(error.retry_after_secs >= 1);

        client.record_rate_limit(RateLimit {
            reset,
            limit: 10,
            remaining: 3,
        });
        assert!(client.check_rate_limit().is_ok());
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(HttpClient::parse_body(""), serde_json::json!({}));
        assert_eq!(
            HttpClient::parse_body(r#"{"meta":{"code":200}}"#)["meta"]["code"],
            200
        );
        assert_eq!(
            HttpClient::parse_body("<html>")["raw_body"],
            "<html>"
        );
    }
}
