//! REST-specific error types for the AfterShip API SDK.
//!
//! - [`RestError::InvalidPath`]: When a REST API path fails validation
//! - [`RestError::Http`]: Wraps underlying HTTP errors
//!
//! # Example
//!
//! ```rust,ignore
//! use aftership::clients::rest::RestError;
//!
//! match client.get("couriers", None).await {
//!     Ok(response) => println!("Couriers: {}", response.body),
//!     Err(RestError::InvalidPath { path }) => println!("Invalid path: {path}"),
//!     Err(RestError::Http(e)) => println!("HTTP error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST API operations.
///
/// # Example
///
/// ```rust
/// use aftership::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "/".to_string() };
/// assert_eq!(error.to_string(), "Invalid REST API path: /");
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The REST API path is empty after normalization.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Returns the underlying API error, if the API produced one.
    #[must_use]
    pub const fn api_error(&self) -> Option<&crate::clients::ApiError> {
        match self {
            Self::Http(e) => e.api_error(),
            Self::InvalidPath { .. } => None,
        }
    }
}
