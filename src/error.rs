//! Error types for the AfterShip API SDK.
//!
//! This module contains the configuration error type. HTTP and resource
//! errors live next to the code that produces them in
//! [`clients`](crate::clients) and [`rest`](crate::rest).
//!
//! # Example
//!
//! ```rust
//! use aftership::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant carries a message that tells the caller what to fix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid AfterShip API key.")]
    EmptyApiKey,

    /// API secret cannot be empty.
    #[error("API secret cannot be empty. Please provide a valid AfterShip API secret.")]
    EmptyApiSecret,

    /// AES signing was requested without an API secret.
    #[error("AES authentication requires an API secret. Set one with `api_secret(...)`.")]
    MissingApiSecret,

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint '{url}'. Please provide a URL with scheme and host (e.g., 'https://api.aftership.com').")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected 'v4' or a dated version such as '2024-04'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
