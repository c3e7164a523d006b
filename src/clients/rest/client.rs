//! REST client implementation for the AfterShip API.
//!
//! This module provides the [`RestClient`] type for making REST API requests
//! with path normalization and retry handling.

use std::collections::BTreeMap;

use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse, RateLimit};
use crate::config::{AftershipConfig, ApiVersion};

/// REST API client for the AfterShip API.
///
/// Provides convenient methods (`get`, `post`, `put`, `delete`) for making
/// REST API requests with path normalization and retry handling. Resource
/// types such as [`Tracking`](crate::rest::resources::Tracking) take a
/// `&RestClient` for every call.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use aftership::{AftershipConfig, ApiKey, RestClient};
///
/// let config = AftershipConfig::builder()
///     .api_key(ApiKey::new("my-api-key").unwrap())
///     .build()
///     .unwrap();
///
/// let client = RestClient::new(&config);
///
/// // GET request
/// let response = client.get("couriers", None).await?;
///
/// // POST request with body
/// let body = serde_json::json!({"tracking": {"tracking_number": "1Z..."}});
/// let response = client.post("trackings", Some(body), None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// The API version being used.
    api_version: ApiVersion,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client using the configured API version.
    ///
    /// # Example
    ///
    /// ```rust
    /// use aftership::{AftershipConfig, ApiKey, RestClient};
    ///
    /// let config = AftershipConfig::builder()
    ///     .api_key(ApiKey::new("my-api-key").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = RestClient::new(&config);
    /// assert_eq!(client.api_version().to_string(), "v4");
    /// ```
    #[must_use]
    pub fn new(config: &AftershipConfig) -> Self {
        Self::create_client(config, config.api_version().clone())
    }

    /// Creates a new REST client with a specific API version override.
    ///
    /// # Example
    ///
    /// ```rust
    /// use aftership::{AftershipConfig, ApiKey, ApiVersion, RestClient};
    ///
    /// let config = AftershipConfig::builder()
    ///     .api_key(ApiKey::new("my-api-key").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = RestClient::with_version(&config, ApiVersion::V2024_04);
    /// assert_eq!(client.api_version(), &ApiVersion::V2024_04);
    /// ```
    #[must_use]
    pub fn with_version(config: &AftershipConfig, version: ApiVersion) -> Self {
        let config_version = config.api_version();

        if &version == config_version {
            tracing::debug!(
                "Rest client has a redundant API version override to the default {}",
                config_version
            );
        } else {
            tracing::debug!(
                "Rest client overriding default API version {} with {}",
                config_version,
                version
            );
        }

        Self::create_client(config, version)
    }

    fn create_client(config: &AftershipConfig, api_version: ApiVersion) -> Self {
        let http_client = HttpClient::with_base_path(api_version.base_path(), config);

        Self {
            http_client,
            api_version,
        }
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the most recent rate limit reported by the API.
    #[must_use]
    pub fn rate_limit(&self) -> Option<RateLimit> {
        self.http_client.rate_limit()
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The REST API path (e.g., "couriers", "trackings/ups/1Z")
    /// * `query` - Optional query parameters
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get(
        &self,
        path: &str,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query, None)
            .await
    }

    /// Sends a GET request with retry configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors, including retry exhaustion.
    pub async fn get_with_tries(
        &self,
        path: &str,
        query: Option<BTreeMap<String, String>>,
        tries: u32,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query, Some(tries))
            .await
    }

    /// Sends a POST request to the specified path.
    ///
    /// Action endpoints such as `retrack` take no body, so `body` is optional.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, body, query, None)
            .await
    }

    /// Sends a POST request with retry configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors, including retry exhaustion.
    pub async fn post_with_tries(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<BTreeMap<String, String>>,
        tries: u32,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, body, query, Some(tries))
            .await
    }

    /// Sends a PUT request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let body = serde_json::json!({"tracking": {"title": "Updated"}});
    /// let response = client.put("trackings/ups/1Z", body, None).await?;
    /// ```
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body), query, None)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query, None)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<BTreeMap<String, String>>,
        tries: Option<u32>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);

        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }
        if let Some(query_params) = query.filter(|q| !q.is_empty()) {
            builder = builder.query(query_params);
        }
        if let Some(t) = tries {
            builder = builder.tries(t);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Strips leading `/` characters, rejecting paths that end up empty.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim_start_matches('/');

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(trimmed.to_string())
}
