//! # AfterShip API Rust SDK
//!
//! A Rust SDK for the AfterShip shipment tracking API, providing type-safe
//! configuration, request signing, and typed access to trackings, couriers,
//! notifications, and delivery date predictions.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`AftershipConfig`] and [`AftershipConfigBuilder`]
//! - Validated newtypes for credentials and the API endpoint
//! - API key and AES (HMAC-SHA256 signed) authentication via [`auth`]
//! - Async HTTP client with retry logic and rate limit tracking
//! - Typed resources in [`rest::resources`]
//!
//! ## Quick Start
//!
//! ```rust
//! use aftership::{AftershipConfig, ApiKey, ApiVersion};
//!
//! let config = AftershipConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_version(ApiVersion::V4)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Signed Requests
//!
//! ```rust
//! use aftership::{AftershipConfig, ApiKey, ApiSecret, AuthenticationType};
//!
//! let config = AftershipConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .auth_type(AuthenticationType::Aes)
//!     .api_secret(ApiSecret::new("your-api-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Tracking a Shipment
//!
//! ```rust,ignore
//! use aftership::{AftershipConfig, ApiKey, RestClient};
//! use aftership::rest::SlugTrackingNumber;
//! use aftership::rest::resources::{CreateTrackingParams, Tracking};
//!
//! let client = RestClient::new(&config);
//!
//! let params = CreateTrackingParams {
//!     tracking_number: "1234567890".to_string(),
//!     slug: Some("dhl".to_string()),
//!     ..Default::default()
//! };
//! Tracking::create(&client, &params).await?;
//!
//! let tracking = Tracking::get(&client, &SlugTrackingNumber::new("dhl", "1234567890"), None).await?;
//! println!("Status: {:?}", tracking.tag);
//! ```
//!
//! ## Rate Limits
//!
//! Every response carries the current rate limit window. The client keeps
//! the latest one and refuses to send while it is exhausted, returning
//! [`HttpError::RateLimited`] with the time to wait:
//!
//! ```rust,ignore
//! match Tracking::all(&client, None).await {
//!     Err(e) => {
//!         if let Some(api_error) = e.api_error() {
//!             println!("{}", api_error.message);
//!         }
//!     }
//!     Ok(page) => println!("{} trackings", page.count),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and identifiers validate before any request
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::AuthenticationType;
pub use config::{AftershipConfig, AftershipConfigBuilder, ApiKey, ApiSecret, ApiVersion, Endpoint};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, MaxHttpRetriesExceededError, RateLimit, RateLimitExceededError,
    RestClient, RestError,
};

// Re-export resource infrastructure
pub use rest::{ResourceError, ResourceResponse, SlugTrackingNumber, TrackingId, TrackingIdentifier};
