//! Configuration types for the AfterShip API SDK.
//!
//! # Overview
//!
//! - [`AftershipConfig`]: All settings needed to talk to the API
//! - [`AftershipConfigBuilder`]: Builder for [`AftershipConfig`]
//! - [`ApiKey`] / [`ApiSecret`]: Validated credentials
//! - [`Endpoint`]: Validated API base URL
//! - [`ApiVersion`]: Which AfterShip API release to call
//!
//! # Example
//!
//! ```rust
//! use aftership::{AftershipConfig, ApiKey};
//!
//! let config = AftershipConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

use std::time::Duration;

pub use newtypes::{ApiKey, ApiSecret, Endpoint};
pub use version::ApiVersion;

use crate::auth::AuthenticationType;
use crate::error::ConfigError;

/// Configuration for the AfterShip API SDK.
///
/// `AftershipConfig` is `Clone + Send + Sync`; share one between clients
/// freely.
///
/// # Example
///
/// ```rust
/// use aftership::{AftershipConfig, ApiKey, ApiSecret, AuthenticationType};
///
/// let config = AftershipConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .auth_type(AuthenticationType::Aes)
///     .api_secret(ApiSecret::new("secret").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.auth_type(), AuthenticationType::Aes);
/// ```
#[derive(Clone, Debug)]
pub struct AftershipConfig {
    api_key: ApiKey,
    api_secret: Option<ApiSecret>,
    auth_type: AuthenticationType,
    endpoint: Endpoint,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
    tries: u32,
    timeout: Option<Duration>,
}

impl AftershipConfig {
    /// Creates a new builder for constructing an `AftershipConfig`.
    #[must_use]
    pub fn builder() -> AftershipConfigBuilder {
        AftershipConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API secret, if configured.
    #[must_use]
    pub const fn api_secret(&self) -> Option<&ApiSecret> {
        self.api_secret.as_ref()
    }

    /// Returns the authentication type.
    #[must_use]
    pub const fn auth_type(&self) -> AuthenticationType {
        self.auth_type
    }

    /// Returns the API endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the default number of attempts for retryable failures.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AftershipConfig>();
};

/// Builder for constructing [`AftershipConfig`] instances.
///
/// Only `api_key` is required. `api_secret` becomes required when
/// `auth_type` is [`AuthenticationType::Aes`].
///
/// # Defaults
///
/// - `auth_type`: [`AuthenticationType::ApiKey`]
/// - `endpoint`: `https://api.aftership.com`
/// - `api_version`: [`ApiVersion::V4`]
/// - `tries`: `1` (no retries)
/// - `timeout`: `None`
#[derive(Debug, Default)]
pub struct AftershipConfigBuilder {
    api_key: Option<ApiKey>,
    api_secret: Option<ApiSecret>,
    auth_type: Option<AuthenticationType>,
    endpoint: Option<Endpoint>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
    tries: Option<u32>,
    timeout: Option<Duration>,
}

impl AftershipConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API secret used for AES request signing.
    #[must_use]
    pub fn api_secret(mut self, secret: ApiSecret) -> Self {
        self.api_secret = Some(secret);
        self
    }

    /// Sets the authentication type.
    #[must_use]
    pub const fn auth_type(mut self, auth_type: AuthenticationType) -> Self {
        self.auth_type = Some(auth_type);
        self
    }

    /// Sets the API endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the default number of attempts for 429 and 5xx responses.
    ///
    /// Values below 1 are treated as 1.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`AftershipConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set,
    /// and [`ConfigError::MissingApiSecret`] if AES authentication is
    /// selected without a secret.
    pub fn build(self) -> Result<AftershipConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let auth_type = self.auth_type.unwrap_or_default();

        if auth_type == AuthenticationType::Aes && self.api_secret.is_none() {
            return Err(ConfigError::MissingApiSecret);
        }

        Ok(AftershipConfig {
            api_key,
            api_secret: self.api_secret,
            auth_type,
            endpoint: self.endpoint.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            tries: self.tries.unwrap_or(1).max(1),
            timeout: self.timeout,
        })
    }
}
