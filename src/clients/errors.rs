//! HTTP-specific error types for the AfterShip API SDK.
//!
//! - [`ApiError`]: A non-2xx response, decoded from the AfterShip `meta`
//!   envelope
//! - [`RateLimitExceededError`]: The client refused to send because the last
//!   known rate limit is exhausted
//! - [`MaxHttpRetriesExceededError`]: Retry attempts were exhausted
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`HttpError`]: Unified error type for all of the above
//!
//! # Example
//!
//! ```rust,ignore
//! use aftership::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Api(e)) if e.is_not_found() => println!("gone: {}", e.message),
//!     Err(HttpError::RateLimited(e)) => println!("retry in {}s", e.retry_after_secs),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use std::time::Duration;

use thiserror::Error;

use crate::clients::RateLimit;

/// Error returned when the API answers with a non-2xx status.
///
/// AfterShip reports failures in a `meta` object:
///
/// ```json
/// {"meta": {"code": 4004, "type": "NotFound", "message": "Tracking does not exist."}, "data": {}}
/// ```
///
/// `code`, `error_type`, and `message` are taken from it. When the body has
/// no `meta`, they fall back to the HTTP status.
///
/// # Example
///
/// ```rust
/// use aftership::clients::ApiError;
///
/// let error = ApiError {
///     status: 404,
///     code: 4004,
///     error_type: "NotFound".to_string(),
///     message: "Tracking does not exist.".to_string(),
///     path: "/v4/trackings/ups/1Z".to_string(),
///     request_id: None,
///     rate_limit: None,
///     retry_after: None,
/// };
///
/// assert!(error.is_not_found());
/// assert_eq!(
///     error.to_string(),
///     "NotFound (4004): Tracking does not exist. [path: /v4/trackings/ups/1Z]"
/// );
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{error_type} ({code}): {message} [path: {path}]")]
pub struct ApiError {
    /// The HTTP status code.
    pub status: u16,
    /// The AfterShip `meta.code` (e.g., 4004), or the HTTP status.
    pub code: i64,
    /// The AfterShip `meta.type` (e.g., "NotFound").
    pub error_type: String,
    /// The AfterShip `meta.message`.
    pub message: String,
    /// The request path that failed.
    pub path: String,
    /// The `x-request-id` header value, if present.
    pub request_id: Option<String>,
    /// Rate limit headers received with the error.
    pub rate_limit: Option<RateLimit>,
    /// How long to wait before retrying, when the API hinted at it.
    pub retry_after: Option<Duration>,
}

impl ApiError {
    /// Returns `true` if the request was rejected for exceeding the rate limit.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        self.status == 429 || self.code == 429
    }

    /// Returns `true` for 404 responses.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Returns `true` for 401 responses (bad or missing API key/signature).
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Returns `true` if retrying the same request may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        self.is_rate_limited() || self.status >= 500
    }
}

/// Error returned without contacting the API because the most recently
/// observed rate limit has no requests remaining.
///
/// ```rust
/// use aftership::clients::RateLimitExceededError;
///
/// let error = RateLimitExceededError { reset: 1_700_000_000, limit: 10, retry_after_secs: 2 };
/// assert!(error.to_string().contains("retry after 2s"));
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("Rate limit of {limit} requests exceeded; retry after {retry_after_secs}s (resets at {reset}).")]
pub struct RateLimitExceededError {
    /// Unix timestamp at which the limit resets.
    pub reset: i64,
    /// The request ceiling of the current window.
    pub limit: u32,
    /// Seconds to wait before sending again.
    pub retry_after_secs: u64,
}

/// Error returned when every attempt failed with a retryable response.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("Exceeded maximum retry count of {tries}. Last error: {last_error}")]
pub struct MaxHttpRetriesExceededError {
    /// The number of attempts made.
    pub tries: u32,
    /// The error from the final attempt.
    #[source]
    pub last_error: ApiError,
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A PUT request was built without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request was built with a body.
    #[error("Cannot send data with {method}.")]
    UnexpectedBody {
        /// The HTTP method that does not accept a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The local rate-limit guard refused to send the request.
    #[error(transparent)]
    RateLimited(#[from] RateLimitExceededError),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The request body could not be serialized.
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns how long to back off before retrying, if this error is
    /// rate-limit related and the wait is known.
    #[must_use]
    pub fn rate_limit_backoff(&self) -> Option<Duration> {
        match self {
            Self::RateLimited(e) => Some(Duration::from_secs(e.retry_after_secs)),
            Self::Api(e) if e.is_rate_limited() => e.retry_after,
            Self::MaxRetries(e) if e.last_error.is_rate_limited() => e.last_error.retry_after,
            _ => None,
        }
    }

    /// Returns the underlying [`ApiError`] if the API produced one.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            Self::MaxRetries(e) => Some(&e.last_error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16, code: i64) -> ApiError {
        ApiError {
            status,
            code,
            error_type: "TooManyRequests".to_string(),
            message: "You have exceeded the API call rate limit.".to_string(),
            path: "/v4/trackings".to_string(),
            request_id: Some("req-1".to_string()),
            rate_limit: None,
            retry_after: Some(Duration::from_secs(3)),
        }
    }

    #[test]
    fn test_api_error_display_includes_meta_fields() {
        let message = api_error(429, 429).to_string();
        assert!(message.contains("TooManyRequests"));
        assert!(message.contains("429"));
        assert!(message.contains("/v4/trackings"));
    }

    #[test]
    fn test_api_error_classification() {
        assert!(api_error(429, 429).is_rate_limited());
        assert!(api_error(429, 429).is_retryable());
        assert!(api_error(503, 503).is_retryable());
        assert!(!api_error(400, 4005).is_retryable());
        assert!(api_error(401, 401).is_unauthorized());
        assert!(api_error(404, 4004).is_not_found());
    }

    #[test]
    fn test_rate_limit_backoff_hints() {
        let local = HttpError::RateLimited(RateLimitExceededError {
            reset: 0,
            limit: 10,
            retry_after_secs: 5,
        });
        assert_eq!(local.rate_limit_backoff(), Some(Duration::from_secs(5)));

        let remote = HttpError::Api(api_error(429, 429));
        assert_eq!(remote.rate_limit_backoff(), Some(Duration::from_secs(3)));

        let exhausted = HttpError::MaxRetries(MaxHttpRetriesExceededError {
            tries: 3,
            last_error: api_error(429, 429),
        });
        assert_eq!(exhausted.rate_limit_backoff(), Some(Duration::from_secs(3)));

        let other = HttpError::Api(api_error(400, 4005));
        assert_eq!(other.rate_limit_backoff(), None);
    }

    #[test]
    fn test_max_retries_error_message() {
        let error = MaxHttpRetriesExceededError {
            tries: 3,
            last_error: api_error(500, 500),
        };
        let message = error.to_string();
        assert!(message.contains("Exceeded maximum retry count of 3"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_invalid_request_error_messages() {
        let missing = InvalidHttpRequestError::MissingBody {
            method: "put".to_string(),
        };
        assert_eq!(missing.to_string(), "Cannot use put without specifying data.");

        let unexpected = InvalidHttpRequestError::UnexpectedBody {
            method: "get".to_string(),
        };
        assert_eq!(unexpected.to_string(), "Cannot send data with get.");
    }
}
