//! Resource-specific error types for REST API operations.
//!
//! Identifier and parameter checks run before anything is sent, so the
//! validation variants below never involve the network.
//!
//! # Example
//!
//! ```rust,ignore
//! use aftership::rest::ResourceError;
//! use aftership::rest::resources::{Tracking, TrackingId};
//!
//! match Tracking::get(&client, &TrackingId::new("abc"), None).await {
//!     Ok(tracking) => println!("Tag: {:?}", tracking.tag),
//!     Err(e) if e.is_not_found() => println!("No such tracking"),
//!     Err(ResourceError::MissingTrackingId) => println!("Empty id"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::{ApiError, HttpError, RestError};
use thiserror::Error;

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use aftership::rest::ResourceError;
///
/// let error = ResourceError::MissingSlugOrTrackingNumber;
/// assert_eq!(error.to_string(), "Slug and tracking number are both required.");
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A tracking was addressed by an empty id.
    #[error("Tracking ID is required.")]
    MissingTrackingId,

    /// A tracking was addressed by slug and tracking number with one of
    /// them empty.
    #[error("Slug and tracking number are both required.")]
    MissingSlugOrTrackingNumber,

    /// A create or detect call was made without a tracking number.
    #[error("Tracking number is required.")]
    MissingTrackingNumber,

    /// A batch operation was called with no items.
    #[error("At least one item is required for a batch request.")]
    EmptyBatch,

    /// The response envelope did not contain the expected resource.
    #[error("Failed to parse {resource} from response: {reason}")]
    ParseFailed {
        /// The type name of the resource (e.g., "Tracking").
        resource: &'static str,
        /// What went wrong while decoding.
        reason: String,
    },

    /// Request parameters could not be serialized.
    #[error("Failed to serialize parameters: {reason}")]
    Serialize {
        /// The serializer error message.
        reason: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-level error occurred.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Returns the API error behind this failure, if the API produced one.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Http(e) => e.api_error(),
            Self::Rest(e) => e.api_error(),
            _ => None,
        }
    }

    /// Returns `true` if the API answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.api_error().is_some_and(ApiError::is_not_found)
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.api_error().and_then(|e| e.request_id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> ApiError {
        ApiError {
            status: 404,
            code: 4004,
            error_type: "NotFound".to_string(),
            message: "Tracking does not exist.".to_string(),
            path: "/v4/trackings/abc".to_string(),
            request_id: Some("req-9".to_string()),
            rate_limit: None,
            retry_after: None,
        }
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ResourceError::MissingTrackingId.to_string(),
            "Tracking ID is required."
        );
        assert_eq!(
            ResourceError::MissingTrackingNumber.to_string(),
            "Tracking number is required."
        );
        assert!(ResourceError::EmptyBatch.to_string().contains("batch"));
    }

    #[test]
    fn test_parse_failed_names_resource() {
        let error = ResourceError::ParseFailed {
            resource: "Courier",
            reason: "missing field `slug`".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse Courier from response: missing field `slug`"
        );
    }

    #[test]
    fn test_api_error_is_reachable_from_rest_and_http() {
        let via_rest = ResourceError::Rest(RestError::Http(HttpError::Api(not_found())));
        assert!(via_rest.is_not_found());
        assert_eq!(via_rest.request_id(), Some("req-9"));

        let via_http = ResourceError::Http(HttpError::Api(not_found()));
        assert_eq!(via_http.api_error().unwrap().code, 4004);

        assert!(!ResourceError::EmptyBatch.is_not_found());
        assert!(ResourceError::EmptyBatch.request_id().is_none());
    }
}
