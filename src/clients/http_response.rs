//! HTTP response types for the AfterShip API SDK.
//!
//! AfterShip wraps every payload in an envelope:
//!
//! ```json
//! {"meta": {"code": 200}, "data": {"tracking": {}}}
//! ```
//!
//! [`HttpResponse`] keeps the raw JSON body and exposes the envelope parts,
//! along with the parsed rate limit headers.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clients::errors::ApiError;
use crate::clients::RateLimit;

/// The `meta` object of the response envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// AfterShip status code (e.g., 200, 4004).
    pub code: i64,
    /// Human-readable message, present on errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Error type name (e.g., "BadRequest"), present on errors.
    #[serde(
        default,
        rename = "type",
        skip_serializing_if = "Option::is_none"
    )]
    pub error_type: Option<String>,
}

/// An HTTP response from the AfterShip API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Rate limit information from the `X-RateLimit-*` headers.
    pub rate_limit: Option<RateLimit>,
    /// Seconds to wait before retrying (from the `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the rate limit and
    /// `Retry-After` headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let rate_limit = RateLimit::from_headers(&headers);

        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|secs| secs.is_finite() && *secs >= 0.0);

        Self {
            code,
            headers,
            body,
            rate_limit,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `x-request-id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the envelope `meta` object, if the body has one.
    #[must_use]
    pub fn meta(&self) -> Option<Meta> {
        self.body
            .get("meta")
            .and_then(|meta| serde_json::from_value(meta.clone()).ok())
    }

    /// Returns the envelope `data` object, or `Null` when absent.
    #[must_use]
    pub fn data(&self) -> &serde_json::Value {
        self.body.get("data").unwrap_or(&serde_json::Value::Null)
    }

    /// Suggested wait before retrying this response.
    ///
    /// For rate-limited responses the reset time of the rate limit window
    /// wins over `Retry-After`.
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        if self.code == 429 {
            if let Some(limit) = self.rate_limit {
                return Some(limit.retry_after());
            }
        }
        self.retry_request_after
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    }

    /// Builds an [`ApiError`] describing this (non-2xx) response.
    #[must_use]
    pub fn to_api_error(&self, path: &str) -> ApiError {
        let meta = self.meta().unwrap_or_default();
        let code = if meta.code == 0 {
            i64::from(self.code)
        } else {
            meta.code
        };
        let status = reqwest::StatusCode::from_u16(self.code).ok();

        let error_type = meta.error_type.unwrap_or_else(|| {
            status
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Unknown")
                .replace(' ', "")
        });
        let message = meta.message.unwrap_or_else(|| {
            self.body
                .get("raw_body")
                .and_then(serde_json::Value::as_str)
                .map_or_else(|| format!("HTTP {}", self.code), str::to_string)
        });

        ApiError {
            status: self.code,
            code,
            error_type,
            message,
            path: path.to_string(),
            request_id: self.request_id().map(String::from),
            rate_limit: self.rate_limit,
            retry_after: self.retry_after(),
        }
    }
}
