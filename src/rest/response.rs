//! Response wrapper for REST resource operations.
//!
//! [`ResourceResponse<T>`] pairs the decoded resource with the rate limit
//! and request id of the response it came from. It implements `Deref`, so
//! it can be used like the inner type directly:
//!
//! ```rust,ignore
//! let tracking = Tracking::get(&client, &id, None).await?;
//!
//! // Field access via Deref
//! println!("{:?}", tracking.tag);
//!
//! // Metadata
//! if let Some(limit) = tracking.rate_limit() {
//!     println!("{} requests left", limit.remaining);
//! }
//!
//! // Take ownership
//! let tracking: Tracking = tracking.into_inner();
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::{HttpResponse, RateLimit};
use crate::rest::ResourceError;

/// A response from a REST resource operation.
///
/// # Example
///
/// ```rust
/// use aftership::rest::ResourceResponse;
///
/// let response = ResourceResponse::new(vec!["ups", "fedex"], None, Some("req-1".to_string()));
///
/// assert_eq!(response.len(), 2);
/// assert_eq!(response[0], "ups");
/// assert_eq!(response.request_id(), Some("req-1"));
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    rate_limit: Option<RateLimit>,
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse` with the given data and metadata.
    #[must_use]
    pub const fn new(data: T, rate_limit: Option<RateLimit>, request_id: Option<String>) -> Self {
        Self {
            data,
            rate_limit,
            request_id,
        }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Transforms the inner data, keeping the metadata.
    ///
    /// ```rust
    /// use aftership::rest::ResourceResponse;
    ///
    /// let response = ResourceResponse::new(vec![1, 2, 3], None, None);
    /// let count = response.map(|v| v.len());
    /// assert_eq!(*count, 3);
    /// ```
    #[must_use]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ResourceResponse<U> {
        ResourceResponse {
            data: f(self.data),
            rate_limit: self.rate_limit,
            request_id: self.request_id,
        }
    }

    /// Rate limit reported with the response.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&RateLimit> {
        self.rate_limit.as_ref()
    }

    /// The `x-request-id` of the response.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Decodes `data.<key>` (or all of `data` when `key` is `None`) from
    /// an API response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ParseFailed`] if the key is missing or the
    /// value does not match `T`.
    pub fn from_http_response(
        response: &HttpResponse,
        key: Option<&str>,
        resource: &'static str,
    ) -> Result<Self, ResourceError> {
        let data = response.data();
        let value = match key {
            Some(key) => data.get(key).ok_or_else(|| ResourceError::ParseFailed {
                resource,
                reason: format!("missing `data.{key}`"),
            })?,
            None => data,
        };

        let parsed = serde_json::from_value(value.clone()).map_err(|e| {
            ResourceError::ParseFailed {
                resource,
                reason: e.to_string(),
            }
        })?;

        Ok(Self::new(
            parsed,
            response.rate_limit,
            response.request_id().map(String::from),
        ))
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}
